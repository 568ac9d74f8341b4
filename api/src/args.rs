use clap::{Parser, ValueEnum};
use mealkit_core::domain::common::{
    AuthConfig, AuthKey, DatabaseConfig, FcmConfig, MealkitConfig, MenuSettings, PushConfig,
    StorageConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealkit-api", version, about = "Mealkit HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub push: PushArgs,

    #[command(flatten)]
    pub menu: MenuArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(
        id = "server_host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server_port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(
        id = "storage_backend",
        long = "storage-backend",
        env = "STORAGE_BACKEND",
        value_enum,
        default_value = "postgres"
    )]
    pub backend: StorageBackend,

    /// JSON array of food documents loaded into the in-memory catalog.
    #[arg(long = "food-seed-path", env = "FOOD_SEED_PATH")]
    pub food_seed_path: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(
        id = "database_host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database_port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mealkit")]
    pub name: String,

    #[arg(
        long = "database-run-migrations",
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    /// HS256 secret shared with the identity provider.
    #[arg(
        long = "auth-jwt-secret",
        env = "AUTH_JWT_SECRET",
        required_unless_present = "jwt_public_key"
    )]
    pub jwt_secret: Option<String>,

    /// RS256 public key (PEM). Takes precedence over the secret.
    #[arg(long = "auth-jwt-public-key", env = "AUTH_JWT_PUBLIC_KEY")]
    pub jwt_public_key: Option<String>,

    #[arg(long = "auth-issuer", env = "AUTH_ISSUER")]
    pub issuer: Option<String>,

    #[arg(long = "auth-audience", env = "AUTH_AUDIENCE")]
    pub audience: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PushBackend {
    Fcm,
    Log,
}

#[derive(Debug, Clone, clap::Args)]
pub struct PushArgs {
    #[arg(
        id = "push_backend",
        long = "push-backend",
        env = "PUSH_BACKEND",
        value_enum,
        default_value = "log"
    )]
    pub backend: PushBackend,

    #[arg(long = "fcm-project-id", env = "FCM_PROJECT_ID")]
    pub fcm_project_id: Option<String>,

    #[arg(
        long = "fcm-credentials-path",
        env = "GOOGLE_APPLICATION_CREDENTIALS",
        required_if_eq("push_backend", "fcm")
    )]
    pub fcm_credentials_path: Option<String>,

    #[arg(long = "fcm-concurrency", env = "FCM_CONCURRENCY", default_value_t = 16)]
    pub fcm_concurrency: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MenuArgs {
    /// Ids per catalog lookup when loading saved foods.
    #[arg(long = "menu-id-batch-size", env = "MENU_ID_BATCH_SIZE", default_value_t = 10)]
    pub id_batch_size: usize,

    #[arg(long = "menu-saved-limit", env = "MENU_SAVED_LIMIT", default_value_t = 10)]
    pub saved_limit: u64,

    #[arg(long = "reload-scan-limit", env = "RELOAD_SCAN_LIMIT", default_value_t = 500)]
    pub reload_scan_limit: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value = "pretty")]
    pub format: LogFormat,

    /// Used when `RUST_LOG` is not set.
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "mealkit_api=info,mealkit_core=info,tower_http=info"
    )]
    pub filter: String,
}

impl From<Args> for MealkitConfig {
    fn from(args: Args) -> Self {
        let storage = match args.storage.backend {
            StorageBackend::Postgres => StorageConfig::Postgres(DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.user,
                password: args.database.password,
                name: args.database.name,
                run_migrations: args.database.run_migrations,
            }),
            StorageBackend::Memory => StorageConfig::Memory {
                food_seed_path: args.storage.food_seed_path,
            },
        };

        let key = match args.auth.jwt_public_key {
            Some(pem) => AuthKey::RsaPublicKeyPem(pem),
            None => AuthKey::Secret(args.auth.jwt_secret.unwrap_or_default()),
        };

        let push = match (args.push.backend, args.push.fcm_credentials_path) {
            (PushBackend::Fcm, Some(credentials_path)) => PushConfig::Fcm(FcmConfig {
                project_id: args.push.fcm_project_id,
                credentials_path,
                concurrency: args.push.fcm_concurrency.max(1),
            }),
            _ => PushConfig::Log,
        };

        MealkitConfig {
            storage,
            auth: AuthConfig {
                key,
                issuer: args.auth.issuer,
                audience: args.auth.audience,
            },
            push,
            menu: MenuSettings {
                menu_saved_limit: args.menu.saved_limit,
                reload_scan_limit: args.menu.reload_scan_limit,
                id_batch_size: args.menu.id_batch_size.max(1),
                ..MenuSettings::default()
            },
        }
    }
}
