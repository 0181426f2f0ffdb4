//! Black-box harness: the real router on an ephemeral port, backed by the database in `DATABASE_URL`.

#![allow(dead_code)]

use quest_api::{build_app, ensure_database_exists, ensure_tables, AppState, Settings};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    /// Direct store access for assertions.
    pub pool: PgPool,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// None when `DATABASE_URL` is unset; callers skip the test.
    pub async fn spawn() -> Option<Self> {
        dotenvy::dotenv().ok();
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set; skipping database test");
            return None;
        };

        ensure_database_exists(&database_url)
            .await
            .expect("failed to ensure database");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&database_url)
            .await
            .expect("failed to connect to DATABASE_URL");
        ensure_tables(&pool).await.expect("failed to create tables");

        let settings = Settings {
            database_url,
            ..Settings::default()
        };
        let app = build_app(AppState::new(pool.clone()), &settings);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Some(Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            pool,
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn unique_email() -> String {
    format!("{}@wild.co", uuid::Uuid::new_v4())
}
