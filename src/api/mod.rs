pub mod extract;
pub mod handlers;
pub mod types;

use axum::{Router, routing::get};

use crate::{
    AppState,
    api::{
        handlers::{favorites, people, planets, sitemap, users},
        types::EndpointInfo,
    },
};

const fn endpoint(method: &'static str, path: &'static str) -> EndpointInfo {
    EndpointInfo { method, path }
}

/// Every route registered by [`router`], served by the sitemap at `/`.
pub const ROUTES: &[EndpointInfo] = &[
    endpoint("GET", "/"),
    endpoint("GET", "/user"),
    endpoint("GET", "/user/{id}"),
    endpoint("DELETE", "/user/{id}"),
    endpoint("GET", "/people"),
    endpoint("POST", "/people"),
    endpoint("GET", "/people/{id}"),
    endpoint("PUT", "/people/{id}"),
    endpoint("DELETE", "/people/{id}"),
    endpoint("GET", "/planets"),
    endpoint("POST", "/planets"),
    endpoint("GET", "/planets/{id}"),
    endpoint("PUT", "/planets/{id}"),
    endpoint("DELETE", "/planets/{id}"),
    endpoint("GET", "/user/{id}/fav_characters"),
    endpoint("POST", "/user/{id}/fav_characters"),
    endpoint("DELETE", "/user/{id}/fav_characters"),
    endpoint("GET", "/user/{id}/fav_planets"),
    endpoint("POST", "/user/{id}/fav_planets"),
    endpoint("DELETE", "/user/{id}/fav_planets"),
];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/user", get(users::list_users))
        .route("/user/{id}", get(users::get_user).delete(users::delete_user))
        .route(
            "/people",
            get(people::list_characters).post(people::create_character),
        )
        .route(
            "/people/{id}",
            get(people::get_character)
                .put(people::update_character)
                .delete(people::delete_character),
        )
        .route(
            "/planets",
            get(planets::list_planets).post(planets::create_planet),
        )
        .route(
            "/planets/{id}",
            get(planets::get_planet)
                .put(planets::update_planet)
                .delete(planets::delete_planet),
        )
        .route(
            "/user/{id}/fav_characters",
            get(favorites::list_favorite_characters)
                .post(favorites::add_favorite_character)
                .delete(favorites::remove_favorite_character),
        )
        .route(
            "/user/{id}/fav_planets",
            get(favorites::list_favorite_planets)
                .post(favorites::add_favorite_planet)
                .delete(favorites::remove_favorite_planet),
        )
}
