//! Answer service configuration from TOML (`[service]` section)

use crate::wolfram::client::{DEFAULT_ENDPOINT, WolframSettings};
use podlens_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw answer service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Application id issued by the service
    pub app_id: Option<String>,
    /// Query endpoint URL
    pub endpoint: String,
    /// Result formats to request
    pub formats: Vec<String>,
    /// Request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
    /// User-Agent header override
    pub user_agent: Option<String>,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            formats: vec!["plaintext".to_string()],
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl FileServiceConfig {
    /// Formats to request, falling back to `plaintext` when none are set
    pub fn effective_formats(&self) -> Vec<String> {
        let formats: Vec<String> = self
            .formats
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if formats.is_empty() {
            vec!["plaintext".to_string()]
        } else {
            formats
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.app_id.as_deref().is_none_or(|id| id.trim().is_empty()) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingValue {
                    field: "service.app_id".to_string(),
                },
                message: "service.app_id is not set (use --app-id, PODLENS_APP_ID or the config file)"
                    .to_string(),
            });
        }

        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidValue {
                    field: "service.endpoint".to_string(),
                    value: self.endpoint.clone(),
                },
                message: format!(
                    "service.endpoint: '{}' is not an http(s) URL",
                    self.endpoint
                ),
            });
        }

        if self.formats.iter().all(|f| f.trim().is_empty()) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::MissingValue {
                    field: "service.formats".to_string(),
                },
                message: "service.formats is empty, falling back to 'plaintext'".to_string(),
            });
        }

        issues
    }

    /// Build client settings; the app id is empty when unset
    pub fn to_settings(&self) -> WolframSettings {
        let mut settings = WolframSettings::new(self.app_id.clone().unwrap_or_default());
        settings.endpoint = self.endpoint.clone();
        settings.formats = self.effective_formats();
        settings.timeout = (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs));
        if let Some(ua) = &self.user_agent {
            settings.user_agent = ua.clone();
        }
        settings
    }
}
