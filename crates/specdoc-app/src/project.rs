//! Project type of the hosting application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape of the hosting application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectType {
    /// RESTful API
    #[default]
    #[serde(rename = "RESTfulAPI", alias = "RestfulApi")]
    RestfulApi,
    /// Web application serving pages
    WebApplication,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestfulApi => "RESTfulAPI",
            Self::WebApplication => "WebApplication",
        }
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::RestfulApi)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown project type: {0}")]
pub struct ParseProjectTypeError(pub String);

impl FromStr for ProjectType {
    type Err = ParseProjectTypeError;

    /// Case-insensitive; underscores and dashes are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "restfulapi" | "api" => Ok(Self::RestfulApi),
            "webapplication" | "web" => Ok(Self::WebApplication),
            _ => Err(ParseProjectTypeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_type() {
        assert_eq!("RESTfulAPI".parse::<ProjectType>(), Ok(ProjectType::RestfulApi));
        assert_eq!("restful_api".parse::<ProjectType>(), Ok(ProjectType::RestfulApi));
        assert_eq!("WebApplication".parse::<ProjectType>(), Ok(ProjectType::WebApplication));
        assert_eq!("web-application".parse::<ProjectType>(), Ok(ProjectType::WebApplication));
        assert_eq!(
            "desktop".parse::<ProjectType>(),
            Err(ParseProjectTypeError("desktop".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for project in [ProjectType::RestfulApi, ProjectType::WebApplication] {
            assert_eq!(project.to_string().parse::<ProjectType>(), Ok(project));
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_value(ProjectType::RestfulApi).unwrap(),
            "RESTfulAPI"
        );
        let parsed: ProjectType = serde_json::from_str("\"WebApplication\"").unwrap();
        assert_eq!(parsed, ProjectType::WebApplication);
        assert!(!parsed.is_api());
    }

    #[test]
    fn test_default_is_api() {
        assert!(ProjectType::default().is_api());
    }
}
