//! Integration tests for SpecDoc
//!
//! These tests cover flows that involve several crates working together.

use specdoc::prelude::*;

// ============================================================================
// Settings Defaulting
// ============================================================================

mod defaulting_tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unconfigured_settings_get_documented_defaults() {
        let mut settings = DocumentSettings::new();
        settings.apply_defaults();

        assert_eq!(
            settings.document_title.as_deref(),
            Some("Specification Api Document")
        );
        assert_eq!(settings.default_group_name.as_deref(), Some("Default"));
        assert_eq!(settings.format_as_legacy_version, Some(false));
        assert_eq!(settings.route_prefix.as_deref(), Some(""));
        assert_eq!(settings.doc_expansion_state, Some(DocExpansion::List));
        assert_eq!(settings.xml_comments.map(|x| x.len()), Some(3));

        let groups = settings.group_open_api_infos.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group, "Default");
    }

    #[test]
    fn test_apply_defaults_twice_is_a_no_op() {
        let mut settings = DocumentSettings::new().default_group("public");
        settings.apply_defaults();
        let once = settings.clone();
        settings.apply_defaults();
        assert_eq!(settings, once);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_configured_group_name_names_generated_group(group in "[A-Za-z][A-Za-z0-9]{0,15}") {
            let resolved = DocumentSettings::new().default_group(group.clone()).resolve();
            prop_assert_eq!(resolved.group_open_api_infos.len(), 1);
            prop_assert_eq!(&resolved.group_open_api_infos[0].group, &group);
        }
    }
}

// ============================================================================
// Configuration to UI
// ============================================================================

mod pipeline_tests {
    use super::*;

    const APPSETTINGS: &str = r#"{
        "AppSettings": {
            "SpecificationDocumentSettings": {
                "DocumentTitle": "Library",
                "DefaultGroupName": "books",
                "DocExpansionState": "None",
                "GroupOpenApiInfos": [
                    { "Group": "books", "Title": "Books", "Version": "2.1.0" },
                    { "Group": "loans" }
                ]
            }
        }
    }"#;

    #[test]
    fn test_loaded_settings_drive_swagger_ui() {
        let settings = SettingsLoader::new()
            .without_env()
            .json_str(APPSETTINGS)
            .unwrap()
            .resolve()
            .unwrap();

        let config = SwaggerUiConfig::from_settings(&settings);
        assert_eq!(config.doc_expansion, "none");
        assert_eq!(
            config.urls.iter().map(|u| u.url.as_str()).collect::<Vec<_>>(),
            vec!["/swagger/books/swagger.json", "/swagger/loans/swagger.json"]
        );

        let html = generate_swagger_html(&settings);
        assert!(html.contains("<title>Library</title>"));
        assert_eq!(specdoc::ui_path(&settings), "/");

        let info = settings.group("books").unwrap().to_openapi_info();
        assert_eq!(info.version, "2.1.0");
    }

    #[test]
    fn test_swagger_options_flow_through_defaults() {
        let options: SwaggerOptions =
            serde_json::from_str(r#"{ "DocumentTitle": "Catalog", "Groups": [{ "Group": "v1" }] }"#)
                .unwrap();
        let resolved = DocumentSettings::from(options).resolve();

        assert_eq!(resolved.document_title, "Catalog");
        assert_eq!(resolved.default_group_name, "v1");
        assert_eq!(resolved.route_prefix, "");
    }

    #[test]
    fn test_project_type_from_configuration() {
        let project: ProjectType = serde_json::from_str("\"RESTfulAPI\"").unwrap();
        assert!(project.is_api());
    }
}

// ============================================================================
// Validation Messages
// ============================================================================

mod validation_tests {
    use super::*;

    specdoc::validation_messages! {
        enum SignupRule {
            Username => "Usernames are letters and digits only",
            Invitation,
        }
    }

    #[test]
    fn test_declared_message_replaces_generic_text() {
        let error = SignupRule::Username.field_error("username");
        assert_eq!(error.message, "Usernames are letters and digits only");

        let fallback = SignupRule::Invitation.field_error("invite");
        assert_eq!(fallback.message, "Validation failed for field 'invite'");
    }

    #[test]
    fn test_builtin_types_report_table_messages() {
        let error = validate_value("email", "nobody", &[ValidationTypes::EmailAddress]).unwrap_err();
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["error"]["fields"][0]["code"], "EmailAddress");
        assert_eq!(
            json["error"]["fields"][0]["message"],
            "The value must be an email address"
        );
    }
}
