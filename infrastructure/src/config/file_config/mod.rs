//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod query;
mod repl;
mod service;

pub use output::FileOutputConfig;
pub use query::FileQueryConfig;
pub use repl::FileReplConfig;
pub use service::FileServiceConfig;

use podlens_application::{Messages, QueryParams};
use podlens_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answer service connection
    pub service: FileServiceConfig,
    /// Dispatcher behavior
    pub query: FileQueryConfig,
    /// User-facing messages (translations go here)
    pub messages: Messages,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings fall back to defaults.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.service.validate());
        issues.extend(self.query.parse_overlap_policy().1);
        issues
    }

    /// Dispatcher parameters; invalid values fall back to defaults
    pub fn query_params(&self) -> QueryParams {
        let (policy, _) = self.query.parse_overlap_policy();
        QueryParams::default()
            .with_overlap_policy(policy)
            .with_reject_blank(self.query.reject_blank)
            .with_messages(self.messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podlens_domain::{ConfigIssueCode, OutputFormat, OverlapPolicy, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
app_id = "DEMO-123"
endpoint = "https://api.wolframalpha.com/v2/query"
formats = ["plaintext", "image"]
timeout_secs = 10

[query]
overlap_policy = "allow"
reject_blank = true

[messages]
not_understood = "Не удалось распознать запрос"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/podlens/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.app_id.as_deref(), Some("DEMO-123"));
        assert_eq!(config.service.formats, vec!["plaintext", "image"]);
        assert_eq!(config.service.timeout_secs, 10);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);

        let params = config.query_params();
        assert_eq!(params.overlap_policy, OverlapPolicy::Allow);
        assert!(params.reject_blank);
        assert_eq!(params.messages.not_understood, "Не удалось распознать запрос");
        // Unset messages keep their defaults
        assert_eq!(params.messages.something_went_wrong, "Something went wrong");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[service]
app_id = "DEMO"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.query, FileQueryConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.service.app_id.is_none());
        assert_eq!(config.query_params(), QueryParams::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let mut config = FileConfig::default();
        config.service.app_id = Some("DEMO".to_string());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.service.endpoint = "ftp://example.com".to_string();
        config.service.formats = vec![];
        config.query.overlap_policy = "whatever".to_string();

        let issues = config.validate();
        let errors = issues.iter().filter(|i| i.is_error()).count();
        let warnings = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        // app_id + endpoint
        assert_eq!(errors, 2);
        // formats + overlap_policy
        assert_eq!(warnings, 2);
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "query.overlap_policy"
        )));
    }
}
