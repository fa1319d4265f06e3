//! Timer log constants and validation.
//!
//! A timer log records one press of Start: the configured duration, the
//! client-side execution time and an optional label. These helpers are used
//! by the API layer before anything is written to storage.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum label length after trimming (characters, not bytes).
pub const MAX_LABEL_LENGTH: usize = 80;

/// Number of rows returned by the recent-logs listing.
pub const RECENT_LOG_LIMIT: i64 = 20;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the configured duration.
///
/// Rejects a missing value, zero, negatives and non-finite numbers.
pub fn validate_configured_minutes(minutes: Option<f64>) -> Result<f64, CoreError> {
    match minutes {
        Some(m) if m.is_finite() && m > 0.0 => Ok(m),
        _ => Err(CoreError::Validation(
            "configuredMinutes must be greater than 0".to_string(),
        )),
    }
}

/// Trim the label and enforce [`MAX_LABEL_LENGTH`].
///
/// An omitted label becomes the empty string.
pub fn normalize_label(label: Option<&str>) -> Result<String, CoreError> {
    let trimmed = label.map(str::trim).unwrap_or_default();
    let length = trimmed.chars().count();

    if length > MAX_LABEL_LENGTH {
        return Err(CoreError::Validation(format!(
            "label exceeds maximum length of {MAX_LABEL_LENGTH} characters (got {length})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Require the client-supplied execution timestamp to be present.
///
/// The value itself is opaque here; storage is responsible for interpreting it.
pub fn require_executed_at(executed_at: Option<String>) -> Result<String, CoreError> {
    executed_at
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| CoreError::Validation("executedAt is required".to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
