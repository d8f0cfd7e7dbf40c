//! Query configuration from TOML (`[query]` section)

use podlens_domain::{ConfigIssue, ConfigIssueCode, OverlapPolicy, Severity};
use serde::{Deserialize, Serialize};

/// Raw query configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    /// "reject" or "allow"
    pub overlap_policy: String,
    /// Reject blank questions before dispatch
    pub reject_blank: bool,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        Self {
            overlap_policy: OverlapPolicy::default().as_str().to_string(),
            reject_blank: false,
        }
    }
}

impl FileQueryConfig {
    /// Parse the overlap policy, falling back to the default on bad input
    pub fn parse_overlap_policy(&self) -> (OverlapPolicy, Vec<ConfigIssue>) {
        match self.overlap_policy.parse::<OverlapPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => (
                OverlapPolicy::default(),
                vec![ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "query.overlap_policy".to_string(),
                        value: self.overlap_policy.clone(),
                        valid_values: vec!["reject".to_string(), "allow".to_string()],
                    },
                    message: format!(
                        "query.overlap_policy: unknown value '{}', falling back to '{}'",
                        self.overlap_policy,
                        OverlapPolicy::default()
                    ),
                }],
            ),
        }
    }
}
