use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPlanet, NewUser, Planet, PlanetChanges, User};

pub const PLANET_NOT_FOUND: &str = "That planet does not exist";
pub const PLANET_NAME_TAKEN: &str = "There is already a planet by that name";
pub const PLANET_ID_TAKEN: &str = "There is already a planet with that id";
pub const EMAIL_TAKEN: &str = "That email already exists.";

const PLANET_COLUMNS: &str =
    "planet_id, planet_name, planet_type, home_star, mass, radius, distance";

fn planet_conflict(constraint: &str) -> String {
    if constraint.contains("planet_id") {
        PLANET_ID_TAKEN.to_string()
    } else {
        PLANET_NAME_TAKEN.to_string()
    }
}

pub struct PlanetRepository {
    pool: SqlitePool,
}

impl PlanetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Planet>, DatabaseError> {
        let sql = format!("SELECT {} FROM planets ORDER BY planet_id", PLANET_COLUMNS);
        let planets = sqlx::query_as::<_, Planet>(&sql).fetch_all(&self.pool).await?;
        Ok(planets)
    }

    pub async fn select_one(&self, planet_id: i64) -> Result<Option<Planet>, DatabaseError> {
        let sql = format!("SELECT {} FROM planets WHERE planet_id = ?", PLANET_COLUMNS);
        let planet = sqlx::query_as::<_, Planet>(&sql)
            .bind(planet_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(planet)
    }

    pub async fn select_404(&self, planet_id: i64) -> Result<Planet, DatabaseError> {
        self.select_one(planet_id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(PLANET_NOT_FOUND.to_string()))
    }

    pub async fn name_exists(&self, planet_name: &str) -> Result<bool, DatabaseError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM planets WHERE planet_name = ?")
            .bind(planet_name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Insert and return the stored row. A taken name or id is `Conflict`.
    pub async fn insert(&self, planet: NewPlanet) -> Result<Planet, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO planets (planet_id, planet_name, planet_type, home_star, mass, radius, distance)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(planet.planet_id)
        .bind(&planet.planet_name)
        .bind(&planet.planet_type)
        .bind(&planet.home_star)
        .bind(planet.mass)
        .bind(planet.radius)
        .bind(planet.distance)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, planet_conflict))?;

        let planet_id = planet.planet_id.unwrap_or_else(|| result.last_insert_rowid());
        self.select_404(planet_id).await
    }

    /// Apply `changes` to an existing planet and return the new state.
    pub async fn update(&self, planet_id: i64, changes: PlanetChanges) -> Result<Planet, DatabaseError> {
        let mut planet = self.select_404(planet_id).await?;
        if changes.is_empty() {
            return Ok(planet);
        }
        changes.apply(&mut planet);

        let result = sqlx::query(
            "UPDATE planets
             SET planet_name = ?, planet_type = ?, home_star = ?, mass = ?, radius = ?, distance = ?
             WHERE planet_id = ?",
        )
        .bind(&planet.planet_name)
        .bind(&planet.planet_type)
        .bind(&planet.home_star)
        .bind(planet.mass)
        .bind(planet.radius)
        .bind(planet.distance)
        .bind(planet_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, planet_conflict))?;

        // Deleted between the read and the write
        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(PLANET_NOT_FOUND.to_string()));
        }
        Ok(planet)
    }

    pub async fn delete(&self, planet_id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM planets WHERE planet_id = ?")
            .bind(planet_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(PLANET_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password
             FROM users
             WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user; a taken email is `Conflict`.
    pub async fn insert(&self, user: NewUser) -> Result<User, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, email, password) VALUES (?, ?, ?, ?)",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_write(e, |_| EMAIL_TAKEN.to_string()))?;

        Ok(User {
            id: result.last_insert_rowid(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password: user.password,
        })
    }
}
