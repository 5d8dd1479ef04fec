use sqlx::SqlitePool;
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewPlanet, NewUser};
use crate::database::repository::{PlanetRepository, UserRepository};

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

// planet_name is unique at the storage level so concurrent creates cannot
// both succeed.
const CREATE_PLANETS: &str = "CREATE TABLE IF NOT EXISTS planets (
    planet_id INTEGER PRIMARY KEY,
    planet_name TEXT NOT NULL UNIQUE,
    planet_type TEXT NOT NULL,
    home_star TEXT NOT NULL,
    mass REAL NOT NULL,
    radius REAL NOT NULL,
    distance REAL NOT NULL
)";

pub async fn create(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_USERS).execute(pool).await?;
    sqlx::query(CREATE_PLANETS).execute(pool).await?;
    info!("Database created");
    Ok(())
}

pub async fn drop(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query("DROP TABLE IF EXISTS planets").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;
    info!("Database dropped");
    Ok(())
}

/// Counts of rows written by [`seed`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub planets: usize,
    pub users: usize,
}

pub fn sample_planets() -> Vec<NewPlanet> {
    vec![
        NewPlanet {
            planet_id: None,
            planet_name: "Mercury".to_string(),
            planet_type: "Class D".to_string(),
            home_star: "Sol".to_string(),
            mass: 2.258e23,
            radius: 1516.0,
            distance: 35.98e6,
        },
        NewPlanet {
            planet_id: None,
            planet_name: "Venus".to_string(),
            planet_type: "Class K".to_string(),
            home_star: "Sol".to_string(),
            mass: 4.867e24,
            radius: 3760.0,
            distance: 67.24e6,
        },
        NewPlanet {
            planet_id: None,
            planet_name: "Earth".to_string(),
            planet_type: "Class M".to_string(),
            home_star: "Sol".to_string(),
            mass: 5.972e24,
            radius: 3959.0,
            distance: 92.96e6,
        },
    ]
}

pub fn sample_user() -> NewUser {
    NewUser {
        first_name: "William".to_string(),
        last_name: "Herschel".to_string(),
        email: "test@test.com".to_string(),
        password: "P@ssw0rd".to_string(),
    }
}

/// Insert the sample planets and test user, skipping rows that already exist.
pub async fn seed(pool: &SqlitePool) -> Result<SeedReport, DatabaseError> {
    let planets = PlanetRepository::new(pool.clone());
    let users = UserRepository::new(pool.clone());
    let mut report = SeedReport::default();

    for planet in sample_planets() {
        if planets.name_exists(&planet.planet_name).await? {
            continue;
        }
        planets.insert(planet).await?;
        report.planets += 1;
    }

    let user = sample_user();
    if users.find_by_email(&user.email).await?.is_none() {
        users.insert(user).await?;
        report.users += 1;
    }

    info!(planets = report.planets, users = report.users, "Database seeded");
    Ok(report)
}
