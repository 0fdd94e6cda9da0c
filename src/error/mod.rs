//! Error types for the gacha core.
//!
//! This module provides the library's error hierarchy. The `GachaError` enum
//! serves as the top-level error type returned across the library boundary;
//! it wraps the domain-specific errors so callers can match on broad
//! categories while the underlying cause stays attached.

pub mod config;
pub mod internal;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, store::StoreError};

/// Top-level error type for every fallible operation in the library.
///
/// Most variants use `#[from]` for automatic conversion. Configuration
/// problems are fatal and surface during startup; store failures are
/// propagated to the caller of the failing operation; the string variants
/// carry caller-facing messages for expected request-level failures.
#[derive(Error, Debug)]
pub enum GachaError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// A malformed rarity weight table falls under this variant and is
    /// detected eagerly, before any pull can run.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Durable store failure.
    ///
    /// Propagated to the caller as a failed operation; a pull that hits this
    /// has written nothing to the caches.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Stored data that cannot be converted back into domain values.
    ///
    /// Indicates rows written outside this library or a bug; surfaces with
    /// the offending value attached.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),

    /// Attempt to create a resource that already exists.
    ///
    /// # Fields
    /// - Message naming the conflicting resource
    #[error("{0}")]
    AlreadyExists(String),

    /// Request that is well-formed but cannot be applied.
    ///
    /// # Fields
    /// - Message describing what was invalid
    #[error("{0}")]
    InvalidInput(String),
}

/// Manual conversion from sea_orm::DbErr to GachaError.
///
/// Chains through `StoreError` so repository code can use `?` directly on
/// sea-orm calls while the error taxonomy still records the failure as a
/// store failure.
impl From<sea_orm::DbErr> for GachaError {
    fn from(err: sea_orm::DbErr) -> Self {
        GachaError::StoreErr(StoreError::Db(err))
    }
}
