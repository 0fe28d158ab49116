// Bet placement: balance checks and atomic debit

mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend::db::require_db;
use backend::repos::games::GameStatus;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::{json, Value};

use crate::support::factory::{create_test_account, create_test_game};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn successful_bet_debits_balance() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let account = create_test_account(db, "bettor", 100.0).await?;
    let game = create_test_game(db, GameStatus::InProgress).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/bets")
        .set_json(json!({
            "user_id": account.id,
            "game_id": game.id,
            "team": "team_1",
            "points": 40.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let bet: Value = test::read_body_json(resp).await;
    assert_eq!(bet["user_id"], account.id);
    assert_eq!(bet["game_id"], game.id);
    assert_eq!(bet["team"], "team_1");
    assert_eq!(bet["points"], 40.0);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", account.id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["points"], 60.0);
    Ok(())
}

#[actix_web::test]
async fn insufficient_balance_leaves_balance_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let account = create_test_account(db, "short", 100.0).await?;
    let game = create_test_game(db, GameStatus::InProgress).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/bets")
        .set_json(json!({
            "user_id": account.id,
            "game_id": game.id,
            "team": "team_2",
            "points": 150.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INSUFFICIENT_BALANCE",
        StatusCode::BAD_REQUEST,
        Some("150"),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", account.id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["points"], 100.0);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/bets", account.id))
        .to_request();
    let bets: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(bets, json!([]));
    Ok(())
}

#[actix_web::test]
async fn whole_balance_can_be_wagered_once() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let account = create_test_account(db, "allin", 100.0).await?;
    let game = create_test_game(db, GameStatus::InProgress).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let payload = |points: f64| {
        json!({
            "user_id": account.id,
            "game_id": game.id,
            "team": "team_1",
            "points": points
        })
    };

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/bets")
            .set_json(payload(100.0))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/bets")
            .set_json(payload(1.0))
            .to_request(),
    )
    .await;
    assert_problem_details_from_service_response(
        resp,
        "INSUFFICIENT_BALANCE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", account.id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["points"], 0.0);
    Ok(())
}

#[actix_web::test]
async fn non_positive_points_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let account = create_test_account(db, "zero", 100.0).await?;
    let game = create_test_game(db, GameStatus::InProgress).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for points in [0.0, -5.0] {
        let req = test::TestRequest::post()
            .uri("/bets")
            .set_json(json!({
                "user_id": account.id,
                "game_id": game.id,
                "team": "team_1",
                "points": points
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "VALIDATION_ERROR",
            StatusCode::BAD_REQUEST,
            Some("points"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn unknown_team_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let account = create_test_account(db, "team", 100.0).await?;
    let game = create_test_game(db, GameStatus::InProgress).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/bets")
        .set_json(json!({
            "user_id": account.id,
            "game_id": game.id,
            "team": "team_3",
            "points": 10.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "VALIDATION_ERROR",
        StatusCode::BAD_REQUEST,
        Some("team"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn unknown_game_does_not_debit() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let account = create_test_account(db, "nogame", 100.0).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/bets")
        .set_json(json!({
            "user_id": account.id,
            "game_id": 987654,
            "team": "team_1",
            "points": 10.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "GAME_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", account.id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["points"], 100.0);
    Ok(())
}

#[actix_web::test]
async fn unknown_account_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let game = create_test_game(db, GameStatus::InProgress).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/bets")
        .set_json(json!({
            "user_id": 555555,
            "game_id": game.id,
            "team": "team_1",
            "points": 10.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "ACCOUNT_NOT_FOUND",
        StatusCode::NOT_FOUND,
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn bet_history_is_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let account = create_test_account(db, "history", 100.0).await?;
    let game = create_test_game(db, GameStatus::InProgress).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for points in [10.0, 20.0, 30.0] {
        let req = test::TestRequest::post()
            .uri("/bets")
            .set_json(json!({
                "account_id": account.id,
                "game_id": game.id,
                "team": "team_2",
                "points": points
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}/bets", account.id))
        .to_request();
    let bets: Value = test::call_and_read_body_json(&app, req).await;
    let points: Vec<f64> = bets
        .as_array()
        .ok_or("expected array")?
        .iter()
        .filter_map(|b| b["points"].as_f64())
        .collect();
    assert_eq!(points, vec![30.0, 20.0, 10.0]);
    Ok(())
}
