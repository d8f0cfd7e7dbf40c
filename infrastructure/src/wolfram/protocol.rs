//! Wire types for `output=json` responses of the v2 query API.
//!
//! ```json
//! {"queryresult": {
//!     "success": true, "error": false,
//!     "pods": [{"title": "Result", "error": false,
//!               "subpods": [{"title": "", "plaintext": "4"}]}]
//! }}
//! ```
//!
//! `error` is either a boolean or an object `{"code": "1", "msg": "..."}`.

use podlens_domain::{ContentElement, RawAnswer, RawPod, RawSubpod};
use serde::Deserialize;

/// Message used when the service flags an error without describing it
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Top-level envelope
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub queryresult: QueryResult,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QueryResult {
    pub success: bool,
    pub error: ErrorField,
    pub pods: Vec<Pod>,
}

/// The `error` member: `false`, `true`, or a detail object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorField {
    Flag(bool),
    Detail(ErrorDetail),
}

impl Default for ErrorField {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl ErrorField {
    pub fn is_error(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Detail(_) => true,
        }
    }

    /// Message for a flagged error, `None` when there is no error
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Flag(false) => None,
            Self::Flag(true) => Some(UNKNOWN_ERROR.to_string()),
            Self::Detail(detail) => Some(
                detail
                    .msg
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            ),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    /// Sent as a string or a number depending on the endpoint
    pub code: Option<serde_json::Value>,
    pub msg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Pod {
    pub title: String,
    pub id: Option<String>,
    pub error: ErrorField,
    pub subpods: Vec<Subpod>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Subpod {
    pub title: String,
    pub img: Option<Image>,
    pub plaintext: Option<String>,
    pub mathml: Option<serde_json::Value>,
    pub minput: Option<serde_json::Value>,
    pub moutput: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct Image {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl Subpod {
    /// Content elements in a fixed order: image, plain text, then the rest
    fn into_contents(self) -> Vec<ContentElement> {
        let mut contents = Vec::new();

        if let Some(img) = self.img {
            contents.push(ContentElement::Image {
                src: img.src,
                alt: img.alt,
            });
        }
        if let Some(text) = self.plaintext.filter(|t| !t.is_empty()) {
            contents.push(ContentElement::PlainText { text });
        }
        for (kind, value) in [
            ("mathml", &self.mathml),
            ("minput", &self.minput),
            ("moutput", &self.moutput),
        ] {
            if value.is_some() {
                contents.push(ContentElement::Other {
                    kind: kind.to_string(),
                });
            }
        }

        contents
    }
}

impl From<Pod> for RawPod {
    fn from(pod: Pod) -> Self {
        RawPod {
            title: pod.title,
            is_error: pod.error.is_error(),
            subpods: pod
                .subpods
                .into_iter()
                .map(|s| RawSubpod::new(s.into_contents()))
                .collect(),
        }
    }
}

impl From<QueryResult> for RawAnswer {
    fn from(result: QueryResult) -> Self {
        RawAnswer {
            is_success: result.success,
            is_error: result.error.is_error(),
            error_message: result.error.message(),
            pods: result.pods.into_iter().map(RawPod::from).collect(),
        }
    }
}

/// Decode a response body into the domain answer model
pub fn decode_answer(body: &str) -> Result<RawAnswer, serde_json::Error> {
    let response: QueryResponse = serde_json::from_str(body)?;
    Ok(response.queryresult.into())
}
