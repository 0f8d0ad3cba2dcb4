use crate::{
    AppState,
    error::{AppError, Result},
    infrastructure::db::{entities::user, repositories::UserRepository},
};

pub async fn list_users(state: &AppState) -> Result<Vec<user::Model>> {
    UserRepository::list_users(state.db.get_connection()).await
}

pub async fn get_user(state: &AppState, id: i32) -> Result<user::Model> {
    UserRepository::find_user_by_id(state.db.get_connection(), id)
        .await?
        .ok_or(AppError::UserNotFound)
}

pub async fn delete_user(state: &AppState, id: i32) -> Result<()> {
    let db_transaction = state.db.begin_transaction().await?;

    if UserRepository::find_user_by_id(&db_transaction, id)
        .await?
        .is_none()
    {
        db_transaction.rollback().await?;
        return Err(AppError::UserNotFound);
    }

    UserRepository::delete_user(&db_transaction, id).await?;

    db_transaction.commit().await?;
    tracing::info!(user_id = id, "User deleted");

    Ok(())
}
