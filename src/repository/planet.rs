use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;

use crate::entity::planet;
use crate::error::{map_tx_error, AppError, AppResult};

/// Fields of a planet that is about to be inserted.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPlanet {
    pub full_name: String,
    pub populations: String,
    pub rotation_period: String,
    pub orbital_period: String,
    pub diameter: String,
    pub gravity: String,
    pub terrain: String,
    pub surface_water: String,
    pub climate: String,
}

pub struct PlanetRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> PlanetRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> AppResult<Vec<planet::Model>> {
        Ok(planet::Entity::find()
            .order_by_asc(planet::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<planet::Model>> {
        Ok(planet::Entity::find_by_id(id).one(self.db).await?)
    }

    pub async fn find_by_full_name(&self, full_name: &str) -> AppResult<Option<planet::Model>> {
        Ok(planet::Entity::find()
            .filter(planet::Column::FullName.eq(full_name))
            .one(self.db)
            .await?)
    }

    /// Insert a planet, failing with a constraint violation when `full_name` is taken
    pub async fn create(&self, fields: NewPlanet) -> AppResult<planet::Model> {
        let active = planet::ActiveModel {
            full_name: Set(fields.full_name),
            populations: Set(fields.populations),
            rotation_period: Set(fields.rotation_period),
            orbital_period: Set(fields.orbital_period),
            diameter: Set(fields.diameter),
            gravity: Set(fields.gravity),
            terrain: Set(fields.terrain),
            surface_water: Set(fields.surface_water),
            climate: Set(fields.climate),
            ..Default::default()
        };

        self.db
            .transaction::<_, planet::Model, AppError>(|txn| {
                Box::pin(async move { Ok(active.insert(txn).await?) })
            })
            .await
            .map_err(map_tx_error)
    }
}
