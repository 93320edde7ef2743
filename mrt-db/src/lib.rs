//! MRT Database Layer
//!
//! Executes validated warp queries against the MyWarp MySQL schema.
//!
//! # Layout
//!
//! - `sql` - renders a `QuerySpec` into bound `sqlx` queries (inner joins to
//!   `player` and `world`, conjunctive `WHERE`, `ORDER BY`, `LIMIT/OFFSET`)
//! - `store` - the `WarpStore` trait with a MySQL and an in-memory backend
//! - `service` - `WarpQueryService`, running page and count queries
//! - `config` - connection settings and pool bootstrap
//!
//! # Example
//!
//! ```ignore
//! use mrt_db::{DbConfig, MySqlWarpStore, WarpQueryService};
//! use std::sync::Arc;
//!
//! async fn example() -> mrt_db::StoreResult<()> {
//!     let pool = DbConfig::load("config/db_config.yml")?.connect().await?;
//!     let service = WarpQueryService::new(Arc::new(MySqlWarpStore::new(pool)));
//!     let warp = service.get(1).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod schema;
pub mod service;
pub mod sql;
pub mod store;

pub use config::DbConfig;
pub use error::*;
pub use service::{WarpPage, WarpQueryService};
pub use store::{memory::MemoryWarpStore, mysql::MySqlWarpStore, WarpStore};
