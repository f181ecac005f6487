use std::net::SocketAddr;

use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use server::config::{AppConfig, CorsConfig, DatabaseConfig, LogConfig, ServerConfig};
use server::state::AppState;

pub mod routes {
    pub const DEMOS: &str = "/demos";
    pub const STATUS: &str = "/status";
    pub const ROOT: &str = "/";

    pub fn demo(id: i64) -> String {
        format!("/demos/{id}")
    }
}

/// A running test server backed by a throwaway sqlite database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    /// Holds the database file; dropped (and deleted) with the app.
    _db_dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = db_dir.path().join("demos.sqlite");

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec!["*".to_string()],
                    max_age: 3600,
                },
            },
            log: LogConfig {
                verbosity: "info".to_string(),
            },
            database: DatabaseConfig {
                dialect: "sqlite".to_string(),
                host: String::new(),
                name: db_path.to_string_lossy().into_owned(),
                user: String::new(),
                password: String::new(),
                max_connections: 5,
            },
        };

        let db = server::database::init_db(&config.database)
            .await
            .expect("Failed to initialize test database");

        let state = AppState {
            db: db.clone(),
            config,
        };
        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _db_dir: db_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");
        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");
        TestResponse::from_response(res).await
    }

    /// POST a raw (possibly malformed) body with a JSON content type.
    pub async fn post_raw(&self, path: &str, body: &'static str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send POST request");
        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");
        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");
        TestResponse::from_response(res).await
    }

    /// Create a demo through the API and return its id.
    pub async fn create_demo(&self, url: &str, number: Option<i32>) -> i64 {
        let res = self
            .post(routes::DEMOS, &serde_json::json!({"url": url, "number": number}))
            .await;
        assert_eq!(res.status, 201, "demo creation failed: {}", res.text);
        res.body["id"].as_i64().expect("created demo has an id")
    }
}
