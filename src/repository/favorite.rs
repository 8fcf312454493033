use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::entity::{character, fav_character, fav_planet, planet, user};
use crate::error::{map_tx_error, AppError, AppResult};
use crate::repository::UserRepository;

/// Everything a user marked as favorite, each target paired with the
/// association row that links it.
#[derive(Debug, Default)]
pub struct UserFavorites {
    pub planets: Vec<(fav_planet::Model, planet::Model)>,
    pub characters: Vec<(fav_character::Model, character::Model)>,
}

pub struct FavoriteRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> FavoriteRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Link a planet to a user
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user marking the favorite
    /// - `planet_id` (`i32`): ID of the planet being marked
    ///
    /// # Returns
    /// The new association row, or [`AppError::NotFound`] when either id does
    /// not resolve. Both lookups and the insert share one transaction.
    pub async fn create_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> AppResult<fav_planet::Model> {
        self.db
            .transaction::<_, fav_planet::Model, AppError>(|txn| {
                Box::pin(async move {
                    user::Entity::find_by_id(user_id)
                        .one(txn)
                        .await?
                        .ok_or(AppError::NotFound("user"))?;
                    planet::Entity::find_by_id(planet_id)
                        .one(txn)
                        .await?
                        .ok_or(AppError::NotFound("planet"))?;

                    let active = fav_planet::ActiveModel {
                        user_id: Set(user_id),
                        planet_id: Set(planet_id),
                        ..Default::default()
                    };
                    Ok(active.insert(txn).await?)
                })
            })
            .await
            .map_err(map_tx_error)
    }

    /// Link a character to a user, same contract as [`Self::create_planet_favorite`]
    pub async fn create_character_favorite(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> AppResult<fav_character::Model> {
        self.db
            .transaction::<_, fav_character::Model, AppError>(|txn| {
                Box::pin(async move {
                    user::Entity::find_by_id(user_id)
                        .one(txn)
                        .await?
                        .ok_or(AppError::NotFound("user"))?;
                    character::Entity::find_by_id(character_id)
                        .one(txn)
                        .await?
                        .ok_or(AppError::NotFound("character"))?;

                    let active = fav_character::ActiveModel {
                        user_id: Set(user_id),
                        character_id: Set(character_id),
                        ..Default::default()
                    };
                    Ok(active.insert(txn).await?)
                })
            })
            .await
            .map_err(map_tx_error)
    }

    /// Remove a planet favorite by the association's own id
    pub async fn delete_planet_favorite(&self, id: i32) -> AppResult<()> {
        self.db
            .transaction::<_, (), AppError>(|txn| {
                Box::pin(async move {
                    let res = fav_planet::Entity::delete_by_id(id).exec(txn).await?;
                    if res.rows_affected == 0 {
                        return Err(AppError::NotFound("favorite planet"));
                    }
                    Ok(())
                })
            })
            .await
            .map_err(map_tx_error)
    }

    /// Remove a character favorite by the association's own id
    pub async fn delete_character_favorite(&self, id: i32) -> AppResult<()> {
        self.db
            .transaction::<_, (), AppError>(|txn| {
                Box::pin(async move {
                    let res = fav_character::Entity::delete_by_id(id).exec(txn).await?;
                    if res.rows_affected == 0 {
                        return Err(AppError::NotFound("favorite character"));
                    }
                    Ok(())
                })
            })
            .await
            .map_err(map_tx_error)
    }

    /// Gets every favorite of the user, oldest association first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<UserFavorites> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound("user"))?;

        let planets = fav_planet::Entity::find()
            .filter(fav_planet::Column::UserId.eq(user_id))
            .order_by_asc(fav_planet::Column::Id)
            .find_also_related(planet::Entity)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(fav, planet)| planet.map(|p| (fav, p)))
            .collect();

        let characters = fav_character::Entity::find()
            .filter(fav_character::Column::UserId.eq(user_id))
            .order_by_asc(fav_character::Column::Id)
            .find_also_related(character::Entity)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(fav, character)| character.map(|c| (fav, c)))
            .collect();

        Ok(UserFavorites { planets, characters })
    }
}
