//! Unit of Work collaborator.
//!
//! Application services wrap repository writes in a unit of work that the
//! persistence layer implements. The domain core never sees it.
//!
//! The work is passed as a future; it is not polled until the transaction
//! has begun. On success the transaction is committed, on error it is
//! rolled back and the original error is returned.

use std::future::Future;

use async_trait::async_trait;

use crate::error::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Transaction boundary provided by the persistence layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Begin a transaction
    async fn begin(&self) -> AppResult<()>;

    /// Commit the current transaction
    async fn commit(&self) -> AppResult<()>;

    /// Roll back the current transaction
    async fn rollback(&self) -> AppResult<()>;
}

/// Run `work` inside a transaction on `uow`.
pub async fn run_in_transaction<T, Fut>(uow: &dyn UnitOfWork, work: Fut) -> AppResult<T>
where
    Fut: Future<Output = AppResult<T>> + Send,
    T: Send,
{
    uow.begin().await?;

    match work.await {
        Ok(result) => {
            uow.commit().await?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = uow.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Simpler API for executing transactional operations.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, $body:expr) => {
        $crate::unit_of_work::run_in_transaction($uow, async { $body }).await
    };
}
