//! Configuration binding for document settings.
//!
//! Settings come from two places, applied in order:
//!
//! 1. a section of a JSON settings document, addressed by a colon-separated
//!    path (`AppSettings:SpecificationDocumentSettings` by default);
//! 2. environment variables with a prefix (`SPECIFICATION_DOCUMENT_` by
//!    default), which override the document field by field.
//!
//! Defaults are applied last, only to what neither source supplied.
//!
//! # Example
//!
//! ```ignore
//! use specdoc_app::config::{load_dotenv, SettingsLoader};
//!
//! load_dotenv()?;
//!
//! let settings = SettingsLoader::new()
//!     .json_file("appsettings.json")?
//!     .resolve()?;
//! println!("Docs served at /{}", settings.route_prefix);
//! ```

use serde::Deserialize;
use specdoc_openapi::{DocExpansion, DocumentSettings, ResolvedDocumentSettings};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the settings section
pub const SETTINGS_SECTION: &str = "AppSettings:SpecificationDocumentSettings";

/// Default prefix of overriding environment variables
pub const ENV_PREFIX: &str = "SPECIFICATION_DOCUMENT";

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),
    #[error("Invalid .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    /// The section path resolved to something other than a JSON object.
    #[error("Configuration section '{0}' is not an object")]
    NotAnObject(String),
}

/// Environment profile for the application.
///
/// Detected from the `SPECDOC_ENV` environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Custom(String),
}

impl Environment {
    /// Detect the current environment from `SPECDOC_ENV`.
    ///
    /// Unset means development.
    pub fn current() -> Self {
        match std::env::var("SPECDOC_ENV").as_deref() {
            Ok("production") | Ok("prod") => Self::Production,
            Ok("development") | Ok("dev") => Self::Development,
            Ok(other) => Self::Custom(other.to_string()),
            Err(_) => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production | Self::Custom(_) => "info",
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is not an error, and variables already set are kept.
/// A file that exists but cannot be parsed is reported.
pub fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Load environment variables from a specific file path.
pub fn load_dotenv_from<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    dotenvy::from_path(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "Loaded .env file");
    Ok(())
}

/// Scalar settings that can be overridden from the environment.
///
/// Group descriptors are structured and only come from the document.
/// `XML_COMMENTS` is a comma-separated list.
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    document_title: Option<String>,
    default_group_name: Option<String>,
    enable_authorized: Option<bool>,
    format_as_legacy_version: Option<bool>,
    route_prefix: Option<String>,
    doc_expansion_state: Option<DocExpansion>,
    xml_comments: Option<Vec<String>>,
}

impl EnvOverrides {
    fn apply(self, settings: DocumentSettings) -> DocumentSettings {
        DocumentSettings {
            document_title: self.document_title.or(settings.document_title),
            default_group_name: self.default_group_name.or(settings.default_group_name),
            enable_authorized: self.enable_authorized.or(settings.enable_authorized),
            format_as_legacy_version: self
                .format_as_legacy_version
                .or(settings.format_as_legacy_version),
            route_prefix: self.route_prefix.or(settings.route_prefix),
            doc_expansion_state: self.doc_expansion_state.or(settings.doc_expansion_state),
            xml_comments: self.xml_comments.or(settings.xml_comments),
            group_open_api_infos: settings.group_open_api_infos,
        }
    }
}

/// Field names of the settings section and its group descriptors.
const SECTION_KEYS: &[&str] = &[
    "DocumentTitle",
    "DefaultGroupName",
    "EnableAuthorized",
    "FormatAsLegacyVersion",
    "FormatAsV2",
    "RoutePrefix",
    "DocExpansionState",
    "XmlComments",
    "GroupOpenApiInfos",
    "Group",
    "Title",
    "Description",
    "Version",
    "TermsOfService",
];

/// Rewrite keys to their bound spelling so `documentTitle` and
/// `DOCUMENTTITLE` bind like `DocumentTitle`. Unknown keys are kept as written.
fn canonical_keys(value: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match value {
        Value::Object(object) => Value::Object(
            object
                .iter()
                .map(|(key, value)| {
                    let canonical = SECTION_KEYS
                        .iter()
                        .find(|known| known.eq_ignore_ascii_case(key))
                        .map_or_else(|| key.clone(), |known| known.to_string());
                    let value = match (canonical.as_str(), value) {
                        ("DocExpansionState", Value::String(state)) => {
                            Value::String(state.to_ascii_lowercase())
                        }
                        _ => canonical_keys(value),
                    };
                    (canonical, value)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(canonical_keys).collect()),
        other => other.clone(),
    }
}

#[derive(Debug, Clone)]
enum EnvSource {
    Disabled,
    Process,
    Vars(Vec<(String, String)>),
}

/// Builder that binds [`DocumentSettings`] from a document and the environment.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    section: String,
    env_prefix: String,
    document: Option<serde_json::Value>,
    env: EnvSource,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            section: SETTINGS_SECTION.to_string(),
            env_prefix: ENV_PREFIX.to_string(),
            document: None,
            env: EnvSource::Process,
        }
    }
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colon-separated path of the settings section; empty means the whole document.
    pub fn section(mut self, path: impl Into<String>) -> Self {
        self.section = path.into();
        self
    }

    /// Prefix of overriding variables, without the trailing underscore.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Ignore environment variables.
    pub fn without_env(mut self) -> Self {
        self.env = EnvSource::Disabled;
        self
    }

    /// Read overrides from `vars` instead of the process environment.
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::Vars(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn json_value(mut self, document: serde_json::Value) -> Self {
        self.document = Some(document);
        self
    }

    pub fn json_str(self, document: &str) -> Result<Self, ConfigError> {
        let document = serde_json::from_str(document)?;
        Ok(self.json_value(document))
    }

    pub fn json_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loading document settings");
        self.json_str(&content)
    }

    fn section_value(&self) -> Result<Option<serde_json::Value>, ConfigError> {
        let Some(mut current) = self.document.as_ref() else {
            return Ok(None);
        };

        for key in self.section.split(':').filter(|k| !k.is_empty()) {
            let next = current.as_object().and_then(|object| {
                object.get(key).or_else(|| {
                    object
                        .iter()
                        .find(|(k, _)| k.eq_ignore_ascii_case(key))
                        .map(|(_, v)| v)
                })
            });
            match next {
                Some(next) => current = next,
                None => {
                    debug!(section = %self.section, "Settings section not present");
                    return Ok(None);
                }
            }
        }

        if current.is_object() {
            Ok(Some(canonical_keys(current)))
        } else {
            Err(ConfigError::NotAnObject(self.section.clone()))
        }
    }

    fn overrides(&self) -> Result<EnvOverrides, ConfigError> {
        let prefixed = envy::prefixed(format!("{}_", self.env_prefix));
        let overrides: EnvOverrides = match &self.env {
            EnvSource::Disabled => EnvOverrides::default(),
            EnvSource::Process => prefixed.from_env()?,
            EnvSource::Vars(vars) => prefixed.from_iter(vars.clone())?,
        };
        Ok(overrides)
    }

    /// Bind settings without applying defaults.
    pub fn load(&self) -> Result<DocumentSettings, ConfigError> {
        let from_document = match self.section_value()? {
            Some(section) => DocumentSettings::deserialize(&section)?,
            None => DocumentSettings::default(),
        };
        Ok(self.overrides()?.apply(from_document))
    }

    /// Bind settings and apply defaults.
    pub fn resolve(&self) -> Result<ResolvedDocumentSettings, ConfigError> {
        let settings = self.load()?.resolve();
        info!(
            title = %settings.document_title,
            groups = settings.group_open_api_infos.len(),
            route_prefix = %settings.route_prefix,
            "Document settings resolved"
        );
        Ok(settings)
    }
}
