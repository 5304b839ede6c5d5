//! Common utilities shared by both bounded contexts' application layers.
//!
//! This crate provides:
//! - Unified application error handling on top of `DomainError`
//! - Configuration structures
//! - The Unit of Work collaborator used around repository writes

pub mod config;
pub mod error;
pub mod unit_of_work;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use unit_of_work::{run_in_transaction, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use unit_of_work::MockUnitOfWork;
