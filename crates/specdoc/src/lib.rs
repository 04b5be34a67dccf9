//! # SpecDoc
//!
//! Settings for the interactive documentation of an HTTP API.
//!
//! Document settings are bound from configuration with every field optional,
//! then resolved against fixed defaults: a title, a default group, the root
//! route prefix, list expansion and the standard documentation comment
//! bundles. Configured values always win over defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use specdoc::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     load_dotenv()?;
//!     specdoc::logging::init(&Environment::current());
//!
//!     let settings = SettingsLoader::new()
//!         .json_file("appsettings.json")?
//!         .resolve()?;
//!
//!     let page = generate_swagger_html(&settings);
//!     Ok(())
//! }
//! ```
//!
//! ## Crates
//!
//! - `specdoc-openapi` - settings, defaults and Swagger UI options
//! - `specdoc-validate` - per-variant validation messages
//! - `specdoc-app` - project type, configuration binding, logging

pub use specdoc_openapi::*;

pub use specdoc_app::{config, logging};
pub use specdoc_app::{
    load_dotenv, load_dotenv_from, ConfigError, Environment, ParseProjectTypeError, ProjectType,
    SettingsLoader,
};

pub use specdoc_validate as validate;
pub use specdoc_validate::validation_messages;

// Re-export crates used in generated code and public signatures
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;

/// Prelude module - import everything you need with `use specdoc::prelude::*`
pub mod prelude {
    pub use specdoc_openapi::{
        generate_swagger_html, DocExpansion, DocumentSettings, GroupInfo,
        ResolvedDocumentSettings, SwaggerGroupOptions, SwaggerOptions, SwaggerUiConfig,
    };

    #[cfg(feature = "swagger-ui")]
    pub use specdoc_openapi::swagger_ui_html;

    pub use specdoc_app::{load_dotenv, ConfigError, Environment, ProjectType, SettingsLoader};

    pub use specdoc_validate::{
        validate_value, validation_messages, FieldError, ValidationError, ValidationMessage,
        ValidationTypes,
    };
}
