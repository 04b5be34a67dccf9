//! Application bootstrap for SpecDoc
//!
//! Everything that runs once while the host application starts: deciding what
//! kind of project it is, binding document settings from configuration and
//! installing the log subscriber.
//!
//! ```ignore
//! use specdoc_app::{config::Environment, logging, SettingsLoader};
//!
//! logging::init(&Environment::current());
//! let settings = SettingsLoader::new().json_file("appsettings.json")?.resolve()?;
//! ```

pub mod config;
pub mod logging;
mod project;

pub use config::{
    load_dotenv, load_dotenv_from, ConfigError, Environment, SettingsLoader, ENV_PREFIX,
    SETTINGS_SECTION,
};
pub use project::{ParseProjectTypeError, ProjectType};
