//! Specification document settings
//!
//! [`DocumentSettings`] is the shape bound from configuration: every field is
//! optional because any subset may be missing from the source. Defaulting turns
//! it into a [`ResolvedDocumentSettings`] where nothing is absent.
//!
//! Defaulting only fills gaps. A value that was configured explicitly is never
//! replaced, so running it any number of times gives the same result.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Title used when none is configured.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Specification Api Document";

/// Group name used when none is configured.
pub const DEFAULT_GROUP_NAME: &str = "Default";

/// Documentation comment bundles merged when none are configured.
pub const DEFAULT_XML_COMMENTS: [&str; 3] =
    ["SpecDoc.Application", "SpecDoc.Web.Entry", "SpecDoc.Web.Core"];

/// Version reported for a group that does not declare one.
pub const DEFAULT_GROUP_VERSION: &str = "1.0.0";

/// How operations are expanded when the documentation UI first loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocExpansion {
    /// Expand tags only
    #[default]
    #[serde(alias = "List")]
    List,
    /// Expand tags and operations
    #[serde(alias = "Full")]
    Full,
    /// Collapse everything
    #[serde(alias = "None")]
    None,
}

impl DocExpansion {
    /// Value understood by the Swagger UI `docExpansion` option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Full => "full",
            Self::None => "none",
        }
    }
}

impl fmt::Display for DocExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of one documentation group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupInfo {
    /// Group name, also used in the group's document endpoint
    pub group: String,
    /// Display title; the group name is shown when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
}

impl GroupInfo {
    /// Create a descriptor carrying only the group name
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            ..Default::default()
        }
    }

    /// Set the display title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the group description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the group version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the terms of service URL
    pub fn terms_of_service(mut self, url: impl Into<String>) -> Self {
        self.terms_of_service = Some(url.into());
        self
    }

    /// Build the OpenAPI `info` object for this group's document.
    pub fn to_openapi_info(&self) -> utoipa::openapi::Info {
        utoipa::openapi::InfoBuilder::new()
            .title(self.title.clone().unwrap_or_else(|| self.group.clone()))
            .version(
                self.version
                    .clone()
                    .unwrap_or_else(|| DEFAULT_GROUP_VERSION.to_string()),
            )
            .description(self.description.clone())
            .terms_of_service(self.terms_of_service.clone())
            .build()
    }
}

/// Document settings as bound from configuration
///
/// Keys follow the `AppSettings:SpecificationDocumentSettings` section layout
/// (`DocumentTitle`, `DefaultGroupName`, ...). The legacy key `FormatAsV2` is
/// accepted for `format_as_legacy_version`.
///
/// # Example
///
/// ```rust,ignore
/// use specdoc_openapi::{DocExpansion, DocumentSettings};
///
/// let settings = DocumentSettings::new()
///     .document_title("Orders API")
///     .default_group("orders")
///     .resolve();
///
/// assert_eq!(settings.doc_expansion_state, DocExpansion::List);
/// assert_eq!(settings.group_open_api_infos[0].group, "orders");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DocumentSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_authorized: Option<bool>,
    #[serde(alias = "FormatAsV2", skip_serializing_if = "Option::is_none")]
    pub format_as_legacy_version: Option<bool>,
    /// Path under which the UI is served; empty means the root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_expansion_state: Option<DocExpansion>,
    /// Identifiers of documentation comment bundles, merged in order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xml_comments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_open_api_infos: Option<Vec<GroupInfo>>,
}

impl DocumentSettings {
    /// Create settings with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    pub fn default_group(mut self, name: impl Into<String>) -> Self {
        self.default_group_name = Some(name.into());
        self
    }

    pub fn enable_authorized(mut self, enabled: bool) -> Self {
        self.enable_authorized = Some(enabled);
        self
    }

    pub fn format_as_legacy_version(mut self, legacy: bool) -> Self {
        self.format_as_legacy_version = Some(legacy);
        self
    }

    pub fn route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = Some(prefix.into());
        self
    }

    pub fn doc_expansion(mut self, state: DocExpansion) -> Self {
        self.doc_expansion_state = Some(state);
        self
    }

    /// Append a documentation comment bundle
    pub fn xml_comment(mut self, source: impl Into<String>) -> Self {
        self.xml_comments
            .get_or_insert_with(Vec::new)
            .push(source.into());
        self
    }

    /// Append a group descriptor
    pub fn group(mut self, info: GroupInfo) -> Self {
        self.group_open_api_infos
            .get_or_insert_with(Vec::new)
            .push(info);
        self
    }

    /// Whether every field is present.
    pub fn is_complete(&self) -> bool {
        self.document_title.is_some()
            && self.default_group_name.is_some()
            && self.enable_authorized.is_some()
            && self.format_as_legacy_version.is_some()
            && self.route_prefix.is_some()
            && self.doc_expansion_state.is_some()
            && self.xml_comments.is_some()
            && self.group_open_api_infos.is_some()
    }

    /// Merge these settings with the defaults.
    ///
    /// Present fields are kept as they are, including empty collections.
    /// The default group descriptor is named after the resolved default
    /// group name, so a configured `DefaultGroupName` carries over to it.
    pub fn resolve(self) -> ResolvedDocumentSettings {
        let document_title = self
            .document_title
            .unwrap_or_else(|| defaulted("DocumentTitle", DEFAULT_DOCUMENT_TITLE.to_string()));
        let default_group_name = self
            .default_group_name
            .unwrap_or_else(|| defaulted("DefaultGroupName", DEFAULT_GROUP_NAME.to_string()));
        let enable_authorized = self
            .enable_authorized
            .unwrap_or_else(|| defaulted("EnableAuthorized", false));
        let format_as_legacy_version = self
            .format_as_legacy_version
            .unwrap_or_else(|| defaulted("FormatAsLegacyVersion", false));
        let route_prefix = self
            .route_prefix
            .unwrap_or_else(|| defaulted("RoutePrefix", String::new()));
        let doc_expansion_state = self
            .doc_expansion_state
            .unwrap_or_else(|| defaulted("DocExpansionState", DocExpansion::List));
        let xml_comments = self.xml_comments.unwrap_or_else(|| {
            defaulted(
                "XmlComments",
                DEFAULT_XML_COMMENTS.iter().map(|s| s.to_string()).collect(),
            )
        });
        // Must run after the default group name is settled.
        let group_open_api_infos = self.group_open_api_infos.unwrap_or_else(|| {
            defaulted(
                "GroupOpenApiInfos",
                vec![GroupInfo::new(default_group_name.clone())],
            )
        });

        ResolvedDocumentSettings {
            document_title,
            default_group_name,
            enable_authorized,
            format_as_legacy_version,
            route_prefix,
            doc_expansion_state,
            xml_comments,
            group_open_api_infos,
        }
    }

    /// Return a copy with every absent field filled in.
    pub fn with_defaults(self) -> Self {
        self.resolve().into()
    }

    /// Fill absent fields in place.
    pub fn apply_defaults(&mut self) {
        *self = std::mem::take(self).with_defaults();
    }
}

fn defaulted<T>(field: &'static str, value: T) -> T {
    debug!(field, "Document setting not configured, using default");
    value
}

/// Document settings with every default applied
///
/// Read-only once built; share it freely between request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolvedDocumentSettings {
    pub document_title: String,
    pub default_group_name: String,
    pub enable_authorized: bool,
    pub format_as_legacy_version: bool,
    pub route_prefix: String,
    pub doc_expansion_state: DocExpansion,
    pub xml_comments: Vec<String>,
    pub group_open_api_infos: Vec<GroupInfo>,
}

impl ResolvedDocumentSettings {
    /// Descriptor for `name`, if one is configured
    pub fn group(&self, name: &str) -> Option<&GroupInfo> {
        self.group_open_api_infos.iter().find(|g| g.group == name)
    }

    /// Names of all configured groups, in configuration order
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.group_open_api_infos.iter().map(|g| g.group.as_str())
    }
}

impl Default for ResolvedDocumentSettings {
    fn default() -> Self {
        DocumentSettings::default().resolve()
    }
}

impl From<ResolvedDocumentSettings> for DocumentSettings {
    fn from(settings: ResolvedDocumentSettings) -> Self {
        Self {
            document_title: Some(settings.document_title),
            default_group_name: Some(settings.default_group_name),
            enable_authorized: Some(settings.enable_authorized),
            format_as_legacy_version: Some(settings.format_as_legacy_version),
            route_prefix: Some(settings.route_prefix),
            doc_expansion_state: Some(settings.doc_expansion_state),
            xml_comments: Some(settings.xml_comments),
            group_open_api_infos: Some(settings.group_open_api_infos),
        }
    }
}
