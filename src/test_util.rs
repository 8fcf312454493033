use sea_orm::{Database, DatabaseConnection};

use crate::db::init_schema;
use crate::repository::{NewCharacter, NewPlanet, NewUser};

/// Fresh in-memory store with every table created.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    init_schema(&db).await.unwrap();
    db
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
    }
}

pub fn new_planet(full_name: &str) -> NewPlanet {
    NewPlanet {
        full_name: full_name.to_string(),
        populations: "1000".to_string(),
        rotation_period: "24".to_string(),
        orbital_period: "364".to_string(),
        diameter: "12500".to_string(),
        gravity: "1 standard".to_string(),
        terrain: "grasslands".to_string(),
        surface_water: "40".to_string(),
        climate: "temperate".to_string(),
    }
}

pub fn new_character(full_name: &str) -> NewCharacter {
    NewCharacter {
        full_name: full_name.to_string(),
        birth_year: "19BBY".to_string(),
        species: "Human".to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        gender: "male".to_string(),
        hair_color: "blond".to_string(),
        skin_color: "fair".to_string(),
        homeworld: "Tatooine".to_string(),
    }
}
