// Token acquisition and account endpoints. None of these require a token.
pub mod login;
pub mod register;
pub mod retrieve_password;

pub use login::login;
pub use register::register;
pub use retrieve_password::retrieve_password;
