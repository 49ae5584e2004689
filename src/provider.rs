//! MFA provider records (data) and their two-stage decoding pipeline (behavior).
//!
//! `kind` holds the registry mapping wire tokens to [`MfaProviderKind`] values, `config` the
//! closed family of variant payloads, and `entity` the assembled [`MfaProvider`] record.
//! `de` turns untyped JSON into a provider without judging it, and `validate` enforces the
//! record's invariants in a fixed, fail-fast order.

pub mod config;
pub mod de;
pub mod entity;
pub mod kind;
pub mod validate;

mod wire;

pub use config::*;
pub use de::*;
pub use entity::*;
pub use kind::*;
pub use validate::*;
