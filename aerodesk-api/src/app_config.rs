use aerodesk_core::{CollisionPolicy, DEFAULT_MAX_SEATS};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub seat_map: SeatMapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

fn default_admin_role() -> String {
    "Admin".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatMapConfig {
    #[serde(default)]
    pub collision_policy: CollisionPolicy,
    /// Ceiling on seats one request may generate.
    #[serde(default = "default_max_seats")]
    pub max_seats: usize,
}

fn default_max_seats() -> usize {
    DEFAULT_MAX_SEATS
}

impl Default for SeatMapConfig {
    fn default() -> Self {
        Self {
            collision_policy: CollisionPolicy::default(),
            max_seats: default_max_seats(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in.
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. AERODESK__SEAT_MAP__COLLISION_POLICY=reject
            .add_source(config::Environment::with_prefix("AERODESK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
