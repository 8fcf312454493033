use std::env;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub server_port: u16,
    pub sqlite_path: String,
    pub database_url: Option<String>,
    pub seed_path: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let server_port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let sqlite_path = env::var("SQLITE_PATH").unwrap_or_else(|_| "/tmp/test.db".to_string());
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty());
        let seed_path = env::var("SEED_PATH").ok().filter(|v| !v.trim().is_empty());

        Self {
            bind_addr,
            server_port,
            sqlite_path,
            database_url,
            seed_path,
        }
    }

    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return normalize_url(url);
        }

        let path = self.sqlite_path.trim();
        if path.starts_with("sqlite:") || path.starts_with("file:") {
            return path.to_string();
        }
        format!("sqlite://{}", path)
    }

    pub fn is_sqlite(&self) -> bool {
        self.database_url().starts_with("sqlite:")
    }
}

/// Hosted Postgres providers hand out `postgres://`, sqlx wants `postgresql://`.
fn normalize_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}
