use axum::{Json, extract::State};

use crate::{
    AppState,
    api::{
        extract::AppPath,
        types::{MessageResponse, UserResponse},
    },
    error::Result,
    services::user as user_service,
};

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = user_service::list_users(&state).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<UserResponse>> {
    let user = user_service::get_user(&state, id).await?;

    Ok(Json(user.into()))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MessageResponse>> {
    user_service::delete_user(&state, id).await?;

    Ok(Json(MessageResponse::new("Usuario borrado")))
}
