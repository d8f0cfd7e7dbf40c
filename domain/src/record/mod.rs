//! Display records
//!
//! - [`Record`]: one flattened `{title, content}` pair
//! - [`RecordList`]: the session's accumulated records, newest first

mod list;

pub use list::RecordList;

use serde::{Deserialize, Serialize};

/// A flattened pod ready for display (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub content: String,
}

impl Record {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
