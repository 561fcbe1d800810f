use crate::ExportConfig;

#[test]
fn test_export_config_strips_trailing_slash() {
    let config = ExportConfig::new("https://dev.azure.com/contoso/", "Shop", "pat").unwrap();
    assert_eq!(config.organization_url(), "https://dev.azure.com/contoso");
    assert_eq!(config.project_name(), "Shop");
    assert_eq!(config.access_token(), "pat");
}

#[test]
fn test_export_config_rejects_blank_members() {
    assert!(ExportConfig::new("", "Shop", "pat").is_err());
    assert!(ExportConfig::new("https://dev.azure.com/contoso", "  ", "pat").is_err());
    assert!(ExportConfig::new("https://dev.azure.com/contoso", "Shop", "").is_err());
}

#[test]
fn test_export_config_debug_redacts_token() {
    let config = ExportConfig::new("https://dev.azure.com/contoso", "Shop", "s3cret").unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("s3cret"));
    assert!(debug.contains("<redacted>"));
}
