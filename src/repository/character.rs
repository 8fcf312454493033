use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;

use crate::entity::character;
use crate::error::{map_tx_error, AppError, AppResult};

#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    pub full_name: String,
    pub birth_year: String,
    pub species: String,
    pub height: String,
    pub mass: String,
    pub gender: String,
    pub hair_color: String,
    pub skin_color: String,
    pub homeworld: String,
}

pub struct CharacterRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> CharacterRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> AppResult<Vec<character::Model>> {
        Ok(character::Entity::find()
            .order_by_asc(character::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<character::Model>> {
        Ok(character::Entity::find_by_id(id).one(self.db).await?)
    }

    pub async fn find_by_full_name(&self, full_name: &str) -> AppResult<Option<character::Model>> {
        Ok(character::Entity::find()
            .filter(character::Column::FullName.eq(full_name))
            .one(self.db)
            .await?)
    }

    pub async fn create(&self, fields: NewCharacter) -> AppResult<character::Model> {
        let active = character::ActiveModel {
            full_name: Set(fields.full_name),
            birth_year: Set(fields.birth_year),
            species: Set(fields.species),
            height: Set(fields.height),
            mass: Set(fields.mass),
            gender: Set(fields.gender),
            hair_color: Set(fields.hair_color),
            skin_color: Set(fields.skin_color),
            homeworld: Set(fields.homeworld),
            ..Default::default()
        };

        self.db
            .transaction::<_, character::Model, AppError>(|txn| {
                Box::pin(async move { Ok(active.insert(txn).await?) })
            })
            .await
            .map_err(map_tx_error)
    }
}
