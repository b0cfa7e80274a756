use thiserror::Error;

/// Why a link could not be decoded.
///
/// `NotThisFormat` means the caller should try another decoder. The payload
/// variants mean the link is a vmess link but corrupt. `Json` is passed
/// through untouched: the payload decoded from base64 but is not a JSON
/// object at all.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("not a vmess link")]
    NotThisFormat,

    #[error("vmess link payload is malformed")]
    MalformedPayload,

    #[error("vmess link payload is incomplete")]
    IncompletePayload,

    #[error("vmess link json payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    pub fn is_not_this_format(&self) -> bool {
        matches!(self, ParseError::NotThisFormat)
    }

    /// Only a JSON failure is unexpected; everything else is routine noise
    /// from scraped subscriptions.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::Json(_))
    }
}
