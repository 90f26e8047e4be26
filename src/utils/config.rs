use dotenv::dotenv;
use std::env;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Settings the process bootstrap reads once at startup. The core never
/// touches these itself; the datastore and HTTP collaborators do.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub api_port: String,
}

impl AppConfig {

    pub fn global() -> &'static AppConfig {
        CONFIG.get_or_init(|| {
            dotenv().ok();

            AppConfig {
                database_url: env::var("DATABASE_URL")
                    .expect("DATABASE_URL environment variable must be set"),
                api_port: env::var("API_PORT")
                    .unwrap_or_else(|_| "3030".to_string()),
            }
        })
    }
}
