use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use store::{Catalog, CatalogError, Credits};

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub url: String,
    pub max_connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://emergency.db?mode=rwc".into(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub address: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8080".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Only send the session cookie over HTTPS.
    pub secure: bool,
    /// Inactivity window for "remember me" logins.
    pub remember_days: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            remember_days: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub starting_balance: Credits,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            starting_balance: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogSource {
    /// Path to a `catalog.toml`. Empty means the built-in catalog.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub session: Session,
    pub account: Account,
    pub catalog: CatalogSource,
}

impl Settings {
    /// Defaults, then `config.toml`, then `EMERGENCY_*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_file("config.toml")
    }

    pub fn with_file(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("database.url", "sqlite://emergency.db?mode=rwc")?
            .set_default("database.max_connections", 5)?
            .set_default("server.address", "127.0.0.1:8080")?
            .set_default("session.secure", false)?
            .set_default("session.remember_days", 7)?
            .set_default("account.starting_balance", 100)?
            .set_default("catalog.path", "")?
            .add_source(
                File::with_name(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            // EMERGENCY_DATABASE__URL, EMERGENCY_ACCOUNT__STARTING_BALANCE, ...
            .add_source(
                Environment::with_prefix("EMERGENCY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Build the catalog this server should sell from.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        if self.catalog.path.trim().is_empty() {
            Ok(Catalog::default())
        } else {
            Catalog::load(&self.catalog.path)
        }
    }
}
