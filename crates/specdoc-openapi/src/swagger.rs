//! Swagger options and Swagger UI HTML generation

use crate::settings::{DocumentSettings, GroupInfo, ResolvedDocumentSettings};
use serde::{Deserialize, Serialize};

const SWAGGER_UI_DIST: &str = "https://unpkg.com/swagger-ui-dist@5";

/// Swagger document options bound from configuration
///
/// Unlike [`DocumentSettings`] nothing here is optional and no defaults are
/// applied; the configuration source is expected to supply everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SwaggerOptions {
    pub document_title: String,
    pub groups: Vec<SwaggerGroupOptions>,
}

/// Options for a single Swagger group
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SwaggerGroupOptions {
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<SwaggerGroupOptions> for GroupInfo {
    fn from(options: SwaggerGroupOptions) -> Self {
        Self {
            group: options.group,
            title: options.title,
            description: options.description,
            version: options.version,
            terms_of_service: None,
        }
    }
}

/// An empty title, group name or group list is treated as not configured,
/// since the binder leaves those fields at their zero value when the key is
/// missing. The first named group becomes the default group.
impl From<SwaggerOptions> for DocumentSettings {
    fn from(options: SwaggerOptions) -> Self {
        let document_title = Some(options.document_title).filter(|t| !t.is_empty());
        let groups: Vec<GroupInfo> = options
            .groups
            .into_iter()
            .filter(|g| !g.group.is_empty())
            .map(GroupInfo::from)
            .collect();
        let default_group_name = groups.first().map(|g| g.group.clone());
        let group_open_api_infos = Some(groups).filter(|g| !g.is_empty());

        Self {
            document_title,
            default_group_name,
            group_open_api_infos,
            ..Default::default()
        }
    }
}

/// Document endpoint for a group; the name is percent-encoded as one path segment.
pub fn group_endpoint(group: &str) -> String {
    format!("/swagger/{}/swagger.json", urlencoding::encode(group))
}

/// One entry in the UI's document selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwaggerUrl {
    pub url: String,
    pub name: String,
}

/// Options handed to `SwaggerUIBundle`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerUiConfig {
    pub urls: Vec<SwaggerUrl>,
    pub doc_expansion: String,
    pub deep_linking: bool,
}

impl SwaggerUiConfig {
    /// Build the UI options from resolved settings, one document per group.
    pub fn from_settings(settings: &ResolvedDocumentSettings) -> Self {
        let urls = settings
            .group_open_api_infos
            .iter()
            .map(|info| SwaggerUrl {
                url: group_endpoint(&info.group),
                name: info.title.clone().unwrap_or_else(|| info.group.clone()),
            })
            .collect();

        Self {
            urls,
            doc_expansion: settings.doc_expansion_state.as_str().to_string(),
            deep_linking: true,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Strings and a bool only; serialization cannot fail.
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Path the UI is mounted on; the root when the route prefix is empty.
pub fn ui_path(settings: &ResolvedDocumentSettings) -> String {
    let prefix = settings.route_prefix.trim_matches('/');
    if prefix.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", prefix)
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Generate Swagger UI HTML page
pub fn generate_swagger_html(settings: &ResolvedDocumentSettings) -> String {
    // A literal "</" would close the script element early.
    let config = SwaggerUiConfig::from_settings(settings)
        .to_json()
        .to_string()
        .replace("</", "<\\/");

    let mut html = String::with_capacity(2048);
    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>"#,
    );
    html.push_str(&escape_html(&settings.document_title));
    html.push_str("</title>\n    <link rel=\"stylesheet\" href=\"");
    html.push_str(SWAGGER_UI_DIST);
    html.push_str(
        r#"/swagger-ui.css">
    <style>
        body {
            margin: 0;
            padding: 0;
        }
        .swagger-ui .topbar {
            display: none;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src=""#,
    );
    html.push_str(SWAGGER_UI_DIST);
    html.push_str("/swagger-ui-bundle.js\"></script>\n    <script src=\"");
    html.push_str(SWAGGER_UI_DIST);
    html.push_str(
        r#"/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            var config = "#,
    );
    html.push_str(&config);
    html.push_str(
        r#";
            config.dom_id = '#swagger-ui';
            config.presets = [
                SwaggerUIBundle.presets.apis,
                SwaggerUIStandalonePreset
            ];
            config.layout = "StandaloneLayout";
            SwaggerUIBundle(config);
        };
    </script>
</body>
</html>"#,
    );
    html
}
