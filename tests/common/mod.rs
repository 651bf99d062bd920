#![allow(dead_code)]

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use rpt_tracker::config::Config;

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub base_url: String,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create an action, return the response body and its `Location` header.
    pub async fn create_action(&self, name: &str, description: Option<&str>) -> (Value, String) {
        let mut body = json!({ "name": name });
        if let Some(d) = description {
            body["description"] = json!(d);
        }
        let resp = self
            .client
            .post(self.url("/api/actions"))
            .json(&body)
            .send()
            .await
            .expect("create action failed");
        assert_eq!(resp.status(), StatusCode::CREATED, "create action non-201");
        let location = resp
            .headers()
            .get("location")
            .expect("missing Location header")
            .to_str()
            .unwrap()
            .to_string();
        (resp.json().await.unwrap(), location)
    }

    /// Record a history entry for an action, return the entry JSON.
    pub async fn create_history(&self, action_id: &str) -> Value {
        let resp = self
            .client
            .post(self.url("/api/action-history"))
            .json(&json!({ "actionId": action_id }))
            .send()
            .await
            .expect("create history failed");
        assert_eq!(resp.status(), StatusCode::CREATED, "create history non-201");
        resp.json().await.unwrap()
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn put(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete(&self, path: &str) -> StatusCode {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed")
            .status()
    }

    pub async fn count_actions(&self, id: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM actions WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Create a fresh database with the schema applied, return a pool for it.
pub async fn spawn_db() -> (PgPool, String, String) {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let db_name = format!("rpt_tracker_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    (pool, db_name, test_url)
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_body_limit(1_048_576).await
}

pub async fn spawn_app_with_body_limit(max_body_size: usize) -> TestApp {
    let (pool, db_name, test_url) = spawn_db().await;

    // Bind first so the base URL used in Location headers is the real one
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");

    let config = Config {
        database_url: test_url,
        host: addr.ip(),
        port: addr.port(),
        base_url: base_url.clone(),
        max_body_size,
        db_max_connections: 5,
        log_level: "warn".to_string(),
    };

    let app = rpt_tracker::build_app(pool.clone(), config);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        base_url,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// Drop a test database after tests complete.
pub async fn drop_db(pool: PgPool, db_name: &str) {
    pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}

pub async fn cleanup(app: TestApp) {
    drop_db(app.pool, &app.db_name).await;
}
