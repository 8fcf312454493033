use log::{info, warn};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, TransactionTrait};
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::config::AppConfig;
use crate::entity::{character, fav_character, fav_planet, planet, user};
use crate::error::{map_tx_error, AppError, AppResult};
use crate::repository::{CharacterRepository, NewCharacter, NewPlanet, PlanetRepository};

pub async fn connect_db(config: &AppConfig) -> Result<DatabaseConnection, DbErr> {
    if config.is_sqlite() {
        ensure_sqlite_path(config);
    }
    let url = config.database_url();
    let db = Database::connect(&url).await?;
    init_schema(&db).await?;
    Ok(db)
}

fn ensure_sqlite_path(config: &AppConfig) {
    let raw = config.database_url();
    let path = raw
        .strip_prefix("sqlite://")
        .or_else(|| raw.strip_prefix("sqlite:"))
        .unwrap_or(raw.as_str());
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.starts_with(":memory:") {
        return;
    }
    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("create sqlite dir {} failed: {}", parent.display(), e);
        }
    }
    if let Err(e) = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)
    {
        warn!("create sqlite file {} failed: {}", path.display(), e);
    }
}

/// Create every missing table from the entity definitions, parents first so
/// the association tables can reference them.
pub async fn init_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let stmts = vec![
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(planet::Entity),
        schema.create_table_from_entity(character::Entity),
        schema.create_table_from_entity(fav_planet::Entity),
        schema.create_table_from_entity(fav_character::Entity),
    ];

    for mut stmt in stmts {
        stmt.if_not_exists();
        db.execute(backend.build(&stmt)).await?;
    }
    info!("schema ready on {:?}", backend);
    Ok(())
}

/// Planets and characters imported at startup.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub planets: Vec<NewPlanet>,
    #[serde(default)]
    pub characters: Vec<NewCharacter>,
}

impl Catalog {
    pub fn from_path(path: &str) -> AppResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AppError::internal(format!("read catalog {}: {}", path, e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::internal(format!("parse catalog: {}", e)))
    }
}

/// Insert the catalog rows whose `full_name` is not stored yet, all in one
/// transaction. Returns how many planets and characters were added.
pub async fn seed_catalog(db: &DatabaseConnection, catalog: &Catalog) -> AppResult<(usize, usize)> {
    let catalog = catalog.clone();
    let (planets, characters) = db
        .transaction::<_, (usize, usize), AppError>(|txn| {
            Box::pin(async move {
                let planet_repo = PlanetRepository::new(txn);
                let mut planets = 0;
                for fields in catalog.planets {
                    if planet_repo.find_by_full_name(&fields.full_name).await?.is_none() {
                        planet_repo.create(fields).await?;
                        planets += 1;
                    }
                }

                let character_repo = CharacterRepository::new(txn);
                let mut characters = 0;
                for fields in catalog.characters {
                    if character_repo.find_by_full_name(&fields.full_name).await?.is_none() {
                        character_repo.create(fields).await?;
                        characters += 1;
                    }
                }
                Ok((planets, characters))
            })
        })
        .await
        .map_err(map_tx_error)?;

    info!("catalog seeded: {} planets, {} characters", planets, characters);
    Ok((planets, characters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::setup_db;

    const CATALOG: &str = r#"{
        "planets": [{
            "full_name": "Tatooine", "populations": "200000", "rotation_period": "23",
            "orbital_period": "304", "diameter": "10465", "gravity": "1 standard",
            "terrain": "desert", "surface_water": "1", "climate": "arid"
        }],
        "characters": [{
            "full_name": "Luke Skywalker", "birth_year": "19BBY", "species": "Human",
            "height": "172", "mass": "77", "gender": "male", "hair_color": "blond",
            "skin_color": "fair", "homeworld": "Tatooine"
        }]
    }"#;

    #[actix_web::test]
    async fn seeding_is_idempotent() {
        let db = setup_db().await;
        let catalog = Catalog::from_json(CATALOG).unwrap();

        assert_eq!(seed_catalog(&db, &catalog).await.unwrap(), (1, 1));
        assert_eq!(seed_catalog(&db, &catalog).await.unwrap(), (0, 0));

        let planets = PlanetRepository::new(&db).list_all().await.unwrap();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].climate, "arid");
    }

    #[actix_web::test]
    async fn schema_init_can_run_twice() {
        let db = setup_db().await;
        init_schema(&db).await.unwrap();
    }

    fn sqlite_config(path: &std::path::Path) -> AppConfig {
        AppConfig {
            bind_addr: "127.0.0.1".to_string(),
            server_port: 3000,
            sqlite_path: path.display().to_string(),
            database_url: None,
            seed_path: None,
        }
    }

    #[test]
    fn sqlite_file_and_parents_are_created() {
        let root = std::env::temp_dir().join(format!("sw-db-{}", std::process::id()));
        let file = root.join("nested").join("data.db");
        ensure_sqlite_path(&sqlite_config(&file));
        assert!(file.is_file());
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn unusable_sqlite_path_is_only_logged() {
        let root = std::env::temp_dir().join(format!("sw-db-blocked-{}", std::process::id()));
        fs::create_dir_all(&root).unwrap();
        let blocker = root.join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        let file = blocker.join("data.db");
        ensure_sqlite_path(&sqlite_config(&file));
        assert!(!file.exists());
        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.planets.is_empty());
        assert!(catalog.characters.is_empty());
        assert!(Catalog::from_json("not json").is_err());
    }
}
