// Protected handlers. The router wraps these in middleware::require_bearer,
// so a request without a valid token never reaches them.
pub mod planets;
