use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

use crate::entity::user;
use crate::error::{map_tx_error, AppError, AppResult};

/// A user about to be inserted; `password_hash` is already hashed.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> UserRepository<'a, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> AppResult<Vec<user::Model>> {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(self.db)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(self.db).await?)
    }

    /// Insert an active user
    ///
    /// Fails with [`AppError::ConstraintViolation`] when the name or email is
    /// already registered; nothing is written in that case.
    pub async fn create(&self, fields: NewUser) -> AppResult<user::Model> {
        let active = user::ActiveModel {
            name: Set(fields.name),
            email: Set(fields.email),
            password: Set(fields.password_hash),
            is_active: Set(true),
            ..Default::default()
        };

        self.db
            .transaction::<_, user::Model, AppError>(|txn| {
                Box::pin(async move { Ok(active.insert(txn).await?) })
            })
            .await
            .map_err(map_tx_error)
    }
}
