pub mod accounts;
pub mod bets;
pub mod games;

pub use accounts::Entity as Accounts;
pub use accounts::Model as Account;
pub use bets::Entity as Bets;
pub use bets::Model as Bet;
pub use games::Entity as Games;
pub use games::Model as Game;
