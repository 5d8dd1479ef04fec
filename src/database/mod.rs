pub mod manager;
pub mod models;
pub mod record;
pub mod repository;
pub mod schema;

pub use manager::DatabaseError;
pub use models::{NewPlanet, NewUser, Planet, PlanetChanges, User};
pub use record::{FieldCheck, RecordError};
pub use repository::{PlanetRepository, UserRepository};
