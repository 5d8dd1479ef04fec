pub mod planet;
pub mod user;

pub use planet::{NewPlanet, Planet, PlanetChanges};
pub use user::{NewUser, User};
