//! Caller identity resolution.
//!
//! The stores never authenticate anyone: they trust whatever [`Username`]
//! they are handed. The authentication layer of the enclosing application
//! decides who is making the request; this seam converts its answer - an
//! optional raw username - into a validated identity, or an error the
//! caller turns into a redirect to the login page.

use greengrocer_core::Username;

use crate::error::StoreError;

/// Resolve the caller identity supplied by the authentication layer.
///
/// Making the identity an explicit, validated input keeps the store
/// signatures honest: every store operation takes a `&Username`, so an
/// unauthenticated request cannot reach them by construction.
///
/// # Errors
///
/// Returns [`StoreError::Unauthenticated`] when no identity is present and
/// [`StoreError::InvalidUsername`] when the supplied value does not parse.
pub fn require_identity(username: Option<&str>) -> Result<Username, StoreError> {
    let raw = username.ok_or(StoreError::Unauthenticated)?;
    Ok(Username::parse(raw)?)
}
