use serde::Deserialize;
use sqlx::FromRow;

use crate::database::record::{FieldCheck, RecordError};

/// A row of the `planets` table. Physical quantities carry no unit.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Planet {
    pub planet_id: i64,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

/// Allow-listed create input. `planet_id` is optional; storage assigns one
/// when it is absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPlanet {
    #[serde(default)]
    pub planet_id: Option<i64>,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

impl NewPlanet {
    /// Trim text fields and reject blanks and non-finite quantities.
    pub fn validated(self) -> Result<Self, RecordError> {
        let mut check = FieldCheck::new();
        let planet = NewPlanet {
            planet_id: self.planet_id,
            planet_name: check.text("planet_name", Some(self.planet_name)),
            planet_type: check.text("planet_type", Some(self.planet_type)),
            home_star: check.text("home_star", Some(self.home_star)),
            mass: check.finite("mass", self.mass),
            radius: check.finite("radius", self.radius),
            distance: check.finite("distance", self.distance),
        };
        check.finish()?;
        Ok(planet)
    }
}

/// Partial update input. Only supplied fields change; the id is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanetChanges {
    pub planet_name: Option<String>,
    pub planet_type: Option<String>,
    pub home_star: Option<String>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub distance: Option<f64>,
}

impl PlanetChanges {
    pub fn is_empty(&self) -> bool {
        *self == PlanetChanges::default()
    }

    pub fn validated(self) -> Result<Self, RecordError> {
        let mut check = FieldCheck::new();
        let changes = PlanetChanges {
            planet_name: self.planet_name.map(|v| check.text("planet_name", Some(v))),
            planet_type: self.planet_type.map(|v| check.text("planet_type", Some(v))),
            home_star: self.home_star.map(|v| check.text("home_star", Some(v))),
            mass: self.mass.map(|v| check.finite("mass", v)),
            radius: self.radius.map(|v| check.finite("radius", v)),
            distance: self.distance.map(|v| check.finite("distance", v)),
        };
        check.finish()?;
        Ok(changes)
    }

    pub fn apply(self, planet: &mut Planet) {
        if let Some(v) = self.planet_name {
            planet.planet_name = v;
        }
        if let Some(v) = self.planet_type {
            planet.planet_type = v;
        }
        if let Some(v) = self.home_star {
            planet.home_star = v;
        }
        if let Some(v) = self.mass {
            planet.mass = v;
        }
        if let Some(v) = self.radius {
            planet.radius = v;
        }
        if let Some(v) = self.distance {
            planet.distance = v;
        }
    }
}
