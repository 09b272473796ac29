#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use jsonwebtoken::Algorithm;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use repair_shop::config::{DatabaseConfig, EnvironmentConfig};
use repair_shop::database::DatabaseConnection;
use repair_shop::{create_router, AppState};

pub const REGISTRATION_CODE: &str = "taller-2024";
pub const PASSWORD: &str = "S3curePass!";

pub fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_algorithm: Algorithm::HS256,
        jwt_expiration: 900,
        registration_code: REGISTRATION_CODE.to_string(),
        bcrypt_cost: 4,
        cors_origins: Vec::new(),
    }
}

/// App completa sobre una base SQLite en memoria
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

pub struct Response {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let db = DatabaseConnection::connect(&DatabaseConfig::in_memory()).await?;
        let state = AppState::new(db.into_pool(), test_config());
        let router = create_router(state.clone());
        Ok(Self { router, state })
    }

    pub async fn send(&self, request: Request<Body>) -> Result<Response> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        Ok(Response { status, headers, body })
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str, token: &str) -> Result<Response> {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> Result<Response> {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> Result<Response> {
        self.request(Method::PATCH, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> Result<Response> {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Response> {
        let form = format!("username={}&password={}", username, password);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/mechanic/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))?;
        self.send(request).await
    }

    /// Registra un mecánico y devuelve (token, id)
    pub async fn signup(&self, name: &str, email: &str) -> Result<(String, Uuid)> {
        let response = self
            .request(
                Method::POST,
                "/mechanic/signup",
                None,
                Some(json!({
                    "name": name,
                    "email": email,
                    "password": PASSWORD,
                    "phone": "600123456",
                    "registration_code": REGISTRATION_CODE,
                })),
            )
            .await?;
        anyhow::ensure!(
            response.status == StatusCode::CREATED,
            "signup failed: {} {}",
            response.status,
            response.body
        );

        let token = response.body["access_token"]
            .as_str()
            .context("missing access_token")?
            .to_string();
        let id = id_of(&response.body["mechanic"])?;
        Ok((token, id))
    }

    pub async fn create_client(&self, token: &str, name: &str) -> Result<Uuid> {
        let response = self
            .post(
                "/clients/",
                token,
                json!({ "name": name, "phone": "611222333", "email": "cliente@correo.com" }),
            )
            .await?;
        anyhow::ensure!(response.status == StatusCode::CREATED, "client: {}", response.body);
        id_of(&response.body)
    }

    pub async fn create_vehicle(&self, token: &str, client_id: Uuid, plate: &str) -> Result<Uuid> {
        let response = self
            .post(
                &format!("/clients/{}/vehicles/", client_id),
                token,
                json!({ "license_plate": plate, "brand": "Seat", "model": "Ibiza", "year": 2018 }),
            )
            .await?;
        anyhow::ensure!(response.status == StatusCode::CREATED, "vehicle: {}", response.body);
        id_of(&response.body)
    }
}

pub fn id_of(value: &Value) -> Result<Uuid> {
    let raw = value["id"].as_str().context("missing id")?;
    Ok(Uuid::parse_str(raw)?)
}
