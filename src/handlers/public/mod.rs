// Public handlers: token acquisition, planet reads and the demo routes.
pub mod auth;
pub mod demo;
pub mod planets;
