//! DTOs for accounts_sea adapter.

/// DTO for creating a new account.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub username: String,
    pub password: String,
    pub points: f64,
}

impl AccountCreate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            points: super::DEFAULT_POINTS,
        }
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }
}
