//! Specification document settings for SpecDoc
//!
//! This crate holds the settings that drive interactive API documentation:
//! document title, groups, route prefix, expansion state and the
//! documentation comment bundles to merge. Settings are bound from
//! configuration with every field optional and then resolved against fixed
//! defaults.
//!
//! # Features
//!
//! - Coalescing defaults that never overwrite configured values
//! - Per-group OpenAPI `info` objects
//! - Swagger UI options and HTML shell built from resolved settings
//!
//! # Usage
//!
//! ```rust,ignore
//! use specdoc_openapi::{DocumentSettings, swagger_ui_html};
//!
//! let settings: DocumentSettings = serde_json::from_str(section)?;
//! let settings = settings.resolve();
//!
//! let response = swagger_ui_html(&settings);
//! ```

mod settings;
mod swagger;

pub use settings::{
    DocExpansion, DocumentSettings, GroupInfo, ResolvedDocumentSettings, DEFAULT_DOCUMENT_TITLE,
    DEFAULT_GROUP_NAME, DEFAULT_GROUP_VERSION, DEFAULT_XML_COMMENTS,
};
pub use swagger::{
    generate_swagger_html, group_endpoint, ui_path, SwaggerGroupOptions, SwaggerOptions,
    SwaggerUiConfig, SwaggerUrl,
};

use bytes::Bytes;
use http::{header, HeaderValue, Response};
use http_body_util::Full;

/// Generate Swagger UI HTML response
#[cfg(feature = "swagger-ui")]
pub fn swagger_ui_html(settings: &ResolvedDocumentSettings) -> Response<Full<Bytes>> {
    let html = swagger::generate_swagger_html(settings);
    let mut response = Response::new(Full::new(Bytes::from(html)));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

/// Generate the UI options as a JSON response
pub fn swagger_ui_config_json(settings: &ResolvedDocumentSettings) -> Response<Full<Bytes>> {
    let body = SwaggerUiConfig::from_settings(settings).to_json().to_string();
    let mut response = Response::new(Full::new(Bytes::from(body)));
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[cfg(feature = "swagger-ui")]
    #[test]
    fn swagger_ui_response_is_html() {
        let response = swagger_ui_html(&ResolvedDocumentSettings::default());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn swagger_ui_config_response_is_json() {
        let response = swagger_ui_config_json(&ResolvedDocumentSettings::default());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }
}
