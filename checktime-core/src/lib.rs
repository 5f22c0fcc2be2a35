//! Client-side primitives for CheckTime admin tools.
//!
//! This crate provides the pieces every CheckTime front end needs:
//! - [`ApiClient`] with its [`submit`](ApiClient::submit) operation, which
//!   turns any HTTP/JSON exchange with a CheckTime server into an [`Outcome`]
//! - the [`Notifier`] trait for user-facing transient notices
//! - a load-then-freeze translation catalog in [`i18n`]
//! - typed models and endpoint wrappers for holidays, day overrides and
//!   work schedule periods

pub mod client;
pub mod endpoints;
pub mod error;
pub mod i18n;
pub mod models;
pub mod notify;
pub mod request;
pub mod result;

// Re-export the main types at crate root for convenience
pub use client::{ApiClient, Navigator, ResponseOptions};
pub use error::{CheckTimeError, CheckTimeResult};
pub use notify::{NoticeKind, Notifier, TerminalNotifier};
pub use request::{ApiRequest, Payload};
pub use result::{ApiResult, Outcome};
