pub mod auth;
pub mod extract;
pub mod response;

pub use auth::{require_bearer, AuthUser};
pub use extract::JsonOrForm;
pub use response::{ApiResponse, ApiResult, Message};
