//! Raw answer structure as reported by the answer service.
//!
//! These types are adapter-neutral: infrastructure decodes the service's
//! wire format into them, and nothing here knows about HTTP or JSON.

use serde::{Deserialize, Serialize};

/// One atomic piece of subpod content.
///
/// Only [`ContentElement::PlainText`] carries displayable text; every other
/// variant is ignored when flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentElement {
    PlainText { text: String },
    Image { src: String, alt: Option<String> },
    Other { kind: String },
}

impl ContentElement {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn image(src: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: None,
        }
    }

    /// Text of a plain-text element, `None` for every other kind
    pub fn as_plain_text(&self) -> Option<&str> {
        match self {
            Self::PlainText { text } => Some(text),
            Self::Image { .. } | Self::Other { .. } => None,
        }
    }
}

/// A sub-section of a pod grouping content elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubpod {
    pub contents: Vec<ContentElement>,
}

impl RawSubpod {
    pub fn new(contents: Vec<ContentElement>) -> Self {
        Self { contents }
    }
}

/// One titled section of an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPod {
    pub title: String,
    /// Pod-level failure; such pods are skipped entirely.
    pub is_error: bool,
    pub subpods: Vec<RawSubpod>,
}

impl RawPod {
    pub fn new(title: impl Into<String>, subpods: Vec<RawSubpod>) -> Self {
        Self {
            title: title.into(),
            is_error: false,
            subpods,
        }
    }

    pub fn failed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_error: true,
            subpods: Vec::new(),
        }
    }
}

/// The complete answer for one question.
///
/// `is_error` and `is_success` are independent flags: a service error is
/// reported through `is_error`, while `is_success == false` alone means the
/// service could not interpret the question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnswer {
    pub is_success: bool,
    pub is_error: bool,
    pub error_message: Option<String>,
    pub pods: Vec<RawPod>,
}

impl RawAnswer {
    /// A successful answer carrying the given pods
    pub fn success(pods: Vec<RawPod>) -> Self {
        Self {
            is_success: true,
            is_error: false,
            error_message: None,
            pods,
        }
    }

    /// A service-level error with the service-provided message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            is_error: true,
            error_message: Some(message.into()),
            pods: Vec::new(),
        }
    }

    /// The service understood the transport but not the question
    pub fn not_understood() -> Self {
        Self {
            is_success: false,
            is_error: false,
            error_message: None,
            pods: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_plain_text() {
        assert_eq!(ContentElement::plain_text("4").as_plain_text(), Some("4"));
        assert_eq!(ContentElement::image("https://x/y.gif").as_plain_text(), None);
        assert_eq!(
            ContentElement::Other {
                kind: "mathml".to_string()
            }
            .as_plain_text(),
            None
        );
    }

    #[test]
    fn test_constructors_set_flags() {
        let ok = RawAnswer::success(vec![]);
        assert!(ok.is_success && !ok.is_error);

        let err = RawAnswer::error("Empty query");
        assert!(err.is_error);
        assert_eq!(err.error_message.as_deref(), Some("Empty query"));

        let nu = RawAnswer::not_understood();
        assert!(!nu.is_success && !nu.is_error);
    }

    #[test]
    fn test_content_element_serializes_tagged() {
        let json = serde_json::to_string(&ContentElement::plain_text("4")).unwrap();
        assert_eq!(json, r#"{"type":"plain_text","text":"4"}"#);
    }

    #[test]
    fn test_other_element_keeps_its_kind() {
        let element = ContentElement::Other {
            kind: "mathml".to_string(),
        };
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(json, r#"{"type":"other","kind":"mathml"}"#);

        let back: ContentElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
        assert_eq!(back.as_plain_text(), None);
    }
}
