//! roost-migrate - Schema migration engine for the roost corpus backend
//!
//! Provides:
//! - Directory discovery of `.sql` migration files in file-name order
//! - A persistent applied-migration ledger
//! - A fail-stop runner, safe to invoke on every process start
//! - An opt-in advisory lease for multi-replica deployments
//!
//! The engine is generic over the [`Executor`] capability and carries
//! no database driver of its own; `roost-store` supplies the SQLite
//! implementation.

pub mod apply;
pub mod discover;
pub mod error;
pub mod executor;
pub mod ledger;
pub mod lock;
pub mod runner;

// Re-export key types
pub use discover::{discover, MigrationFile};
pub use error::{MigrateError, Result};
pub use executor::{BoxError, Executor};
pub use lock::{LockOptions, RunnerLock};
pub use runner::Runner;
