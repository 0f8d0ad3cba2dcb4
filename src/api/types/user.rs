use serde::Serialize;

use crate::infrastructure::db::entities::user;

/// Public projection of a user. The password column never leaves the database layer.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub email: String,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            lastname: user.lastname,
            email: user.email,
        }
    }
}
