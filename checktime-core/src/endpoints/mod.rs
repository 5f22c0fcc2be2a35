//! Typed wrappers over [`ApiClient::submit`](crate::ApiClient::submit), one
//! module per dashboard area.
//!
//! Each wrapper fixes the path, verb, payload shape and localized notice keys
//! for one server operation. Retry policy, where any exists, lives here in
//! calling code, never in the client itself.

pub mod holidays;
pub mod overrides;
pub mod schedules;
