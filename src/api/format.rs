//! Wire projections. Each function lists exactly the fields a record exposes.

use serde_json::{json, Value};

use crate::database::{Planet, User};

pub fn planet_to_api_value(planet: &Planet) -> Value {
    json!({
        "planet_id": planet.planet_id,
        "planet_name": planet.planet_name,
        "planet_type": planet.planet_type,
        "home_star": planet.home_star,
        "mass": planet.mass,
        "radius": planet.radius,
        "distance": planet.distance,
    })
}

pub fn planets_to_api_value(planets: &[Planet]) -> Value {
    Value::Array(planets.iter().map(planet_to_api_value).collect())
}

/// Public view of a user. The password never leaves the server this way.
pub fn user_to_api_value(user: &User) -> Value {
    json!({
        "id": user.id,
        "first_name": user.first_name,
        "last_name": user.last_name,
        "email": user.email,
    })
}
