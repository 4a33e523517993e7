//! Test application fixture
//!
//! Builds the full router over a fresh store and sends requests through it
//! without binding a socket.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use snake_arena::backend::routes::create_router;
use snake_arena::backend::server::{AppState, ServerConfig};
use snake_arena::backend::store::{GameStore, MemoryStore, SqlStore};

/// A decoded response: status plus JSON body (`Value::Null` when empty)
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// `body["error"]` as a string, empty when absent
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    /// Low bcrypt cost keeps signup fast
    pub fn config() -> ServerConfig {
        ServerConfig {
            jwt_secret: "integration-test-secret".to_string(),
            bcrypt_cost: 4,
            ..ServerConfig::default()
        }
    }

    pub async fn memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub async fn sqlite() -> Self {
        let store = SqlStore::in_memory()
            .await
            .expect("in-memory SQLite store should open");
        Self::with_store(Arc::new(store))
    }

    pub fn with_store(store: Arc<dyn GameStore>) -> Self {
        let state = AppState::new(store, Self::config());
        let router = create_router(state.clone());
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, super::auth_header(token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        self.send(request).await
    }

    /// Send a prebuilt request, for cases the helpers don't cover
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body should be JSON")
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, None, token).await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request(Method::POST, uri, Some(body), token).await
    }

    pub async fn patch(&self, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
        self.request(Method::PATCH, uri, Some(body), token).await
    }
}

/// Expand a list of `async fn(TestApp)` scenarios into one `#[tokio::test]`
/// per scenario and backend.
#[macro_export]
macro_rules! for_each_backend {
    ($($name:ident),* $(,)?) => {
        mod memory_backend {
            $(
                #[tokio::test]
                async fn $name() {
                    super::$name($crate::common::TestApp::memory().await).await;
                }
            )*
        }

        mod sqlite_backend {
            $(
                #[tokio::test]
                async fn $name() {
                    super::$name($crate::common::TestApp::sqlite().await).await;
                }
            )*
        }
    };
}
