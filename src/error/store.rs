use thiserror::Error;

/// Durable store failures surfaced by repository operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database error from SeaORM.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
