//! Response envelope shared by every API endpoint.
//!
//! Success: `{ "success": true, "message": ..., "data": ... }`
//! Failure: `{ "success": false, "message": ..., "error": ... }`
//! (failures are produced by [`AppError`](crate::error::AppError)).

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::ok(entry, "Entry updated successfully")))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

impl Envelope<()> {
    /// Success with `"data": null`.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::ok((), message)
    }
}
