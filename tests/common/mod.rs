#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use holonet::{
    AppState, build_router,
    config::{Config, DatabaseConfig, ServerConfig},
    infrastructure::db::{
        Database,
        repositories::{NewUser, UserRepository},
    },
};

pub struct TestApp {
    pub router: Router,
    pub db: Arc<Database>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Router over a fresh, fully migrated in-memory SQLite database.
    pub async fn spawn() -> TestApp {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 3000,
                cors_allowed_origins: vec!["*".into()],
                max_concurrent_requests: 16,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".into(),
                max_connections: 1,
                min_connections: 1,
                connect_timeout: Duration::from_secs(5),
                idle_timeout: Duration::from_secs(300),
            },
        };

        let db = Database::init_db(&config.database)
            .await
            .expect("Failed to open in-memory database");
        db.run_migrations().await.expect("Failed to run migrations");
        let db = Arc::new(db);

        let router = build_router(AppState {
            config: Arc::new(config),
            db: db.clone(),
        });

        TestApp { router, db }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body was not JSON")
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn delete_with(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::DELETE, uri, Some(body)).await
    }

    pub async fn insert_user(&self, email: &str) -> i32 {
        UserRepository::create_user(
            self.db.get_connection(),
            NewUser {
                name: "Obi-Wan".into(),
                lastname: "Kenobi".into(),
                email: email.into(),
                password: "hello-there".into(),
                is_active: true,
            },
        )
        .await
        .expect("Failed to insert user")
        .id
    }

    /// Creates a character over HTTP and returns its id.
    pub async fn insert_character(&self, name: &str) -> i32 {
        let response = self
            .post(
                "/people",
                serde_json::json!({
                    "name": name,
                    "birthday_year": 41,
                    "gender": "male",
                    "height": 202,
                    "skin_color": "white",
                    "eye_color": "yellow",
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);

        last_id(&self.get("/people").await.body)
    }

    pub async fn insert_planet(&self, name: &str) -> i32 {
        let response = self
            .post(
                "/planets",
                serde_json::json!({
                    "name": name,
                    "diameter": 12500,
                    "rotation_period": 24,
                    "orbital_period": 364,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);

        last_id(&self.get("/planets").await.body)
    }
}

pub fn last_id(list: &Value) -> i32 {
    list.as_array()
        .and_then(|items| items.last())
        .and_then(|item| item["id"].as_i64())
        .expect("Listing was empty") as i32
}
