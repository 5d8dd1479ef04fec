use sqlx::FromRow;

/// A row of the `users` table. The password is stored as supplied.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Exact comparison against the stored password.
    pub fn password_matches(&self, supplied: &str) -> bool {
        self.password == supplied
    }
}
