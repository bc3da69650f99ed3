//! Application layer — port trait definitions and the refresh use-case.
//!
//! This module depends only on `faro_common` and `crate::domain` — never on
//! `crate::infra`, `crate::commands`, or `crate::output`.

pub mod ports;
pub mod services;

pub use ports::{PageEndpoint, RefreshObserver, SilentObserver};
