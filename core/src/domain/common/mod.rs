use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod batch;
pub mod entities;
pub mod policies;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;

#[derive(Clone, Debug)]
pub struct MealkitConfig {
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub push: PushConfig,
    pub menu: MenuSettings,
}

#[derive(Clone, Debug)]
pub enum StorageConfig {
    Postgres(DatabaseConfig),
    /// Process-local store, optionally seeded with a JSON catalog file.
    Memory { food_seed_path: Option<String> },
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

/// Key material used to verify bearer tokens.
#[derive(Clone, Debug)]
pub enum AuthKey {
    /// HS256 shared secret.
    Secret(String),
    /// RS256 public key in PEM format.
    RsaPublicKeyPem(String),
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub key: AuthKey,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

#[derive(Clone, Debug)]
pub enum PushConfig {
    Fcm(FcmConfig),
    Log,
}

#[derive(Clone, Debug)]
pub struct FcmConfig {
    /// Overrides the project id found in the service-account key.
    pub project_id: Option<String>,
    /// Path of the Google service-account JSON key.
    pub credentials_path: String,
    /// Sends in flight per multicast.
    pub concurrency: usize,
}

/// Bounds used by the menu composer and the slot reload flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSettings {
    pub menu_saved_limit: u64,
    pub empty_menu_catalog_limit: u64,
    pub menu_catalog_limit: u64,
    pub reload_saved_limit: u64,
    pub reload_synonym_limit: u64,
    pub reload_scan_limit: u64,
    pub id_batch_size: usize,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            menu_saved_limit: 10,
            empty_menu_catalog_limit: 3,
            menu_catalog_limit: 100,
            reload_saved_limit: 50,
            reload_synonym_limit: 50,
            reload_scan_limit: 500,
            id_batch_size: 10,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

/// Trims `value` and drops it when nothing is left.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
