use crate::slack::{MessageEvent, SlackFile};
use thiserror::Error;

/// Image formats Amazon Rekognition accepts from this bot.
pub const SUPPORTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// Largest image Rekognition will take as raw bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5_242_880;

/// Message subtype Slack attaches to file uploads.
pub const FILE_SHARE_SUBTYPE: &str = "file_share";

/// Why a delivery was dropped without a reply. Every variant is silent
/// externally; the handler only logs it.
#[derive(Debug, Error, PartialEq)]
pub enum SkipReason {
    #[error("verification token mismatch")]
    TokenMismatch,
    #[error("not a file_share message")]
    NotFileShare,
    #[error("no files attached to message")]
    NoFiles,
    #[error("unsupported file type {0}")]
    UnsupportedMime(String),
    #[error("image too large for text detection ({0} bytes)")]
    TooLarge(u64),
}

/// Compares the token presented in the payload against the verification
/// token issued for the Slack app.
pub fn verify_token(presented: Option<&str>, expected: &str) -> bool {
    presented == Some(expected)
}

/// Checks that the message is a file share carrying an image Rekognition
/// can process, and returns the first attached file.
pub fn validate_event(event: &MessageEvent) -> Result<&SlackFile, SkipReason> {
    if event.subtype.as_deref() != Some(FILE_SHARE_SUBTYPE) {
        return Err(SkipReason::NotFileShare);
    }

    let file = event.files.first().ok_or(SkipReason::NoFiles)?;

    if !SUPPORTED_IMAGE_TYPES.contains(&file.mimetype.as_str()) {
        return Err(SkipReason::UnsupportedMime(file.mimetype.clone()));
    }
    if file.size > MAX_IMAGE_BYTES {
        return Err(SkipReason::TooLarge(file.size));
    }
    Ok(file)
}
