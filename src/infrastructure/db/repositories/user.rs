use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, EntityTrait, QueryOrder,
};

use crate::{
    error::Result,
    infrastructure::db::entities::{User, user},
};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

pub struct UserRepository;

impl UserRepository {
    pub async fn list_users<C: ConnectionTrait>(db_connection: &C) -> Result<Vec<user::Model>> {
        Ok(User::find()
            .order_by_asc(user::Column::Id)
            .all(db_connection)
            .await?)
    }

    pub async fn find_user_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: i32,
    ) -> Result<Option<user::Model>> {
        Ok(User::find_by_id(id).one(db_connection).await?)
    }

    /// Users have no HTTP create route; this is used for provisioning.
    pub async fn create_user<C: ConnectionTrait>(
        db_connection: &C,
        new_user: NewUser,
    ) -> Result<user::Model> {
        let user = user::ActiveModel {
            name: Set(new_user.name),
            lastname: Set(new_user.lastname),
            email: Set(new_user.email),
            password: Set(new_user.password),
            is_active: Set(new_user.is_active),
            ..Default::default()
        };

        Ok(user.insert(db_connection).await?)
    }

    pub async fn delete_user<C: ConnectionTrait>(db_connection: &C, id: i32) -> Result<u64> {
        Ok(User::delete_by_id(id).exec(db_connection).await?.rows_affected)
    }
}
