//! Warp list query planning
//!
//! A list request flows through this module in a fixed order:
//!
//! 1. [`filter`] validates the filter parameters and turns each one into a
//!    [`Predicate`]; the predicates form a conjunctive [`Filter`].
//! 2. [`ordering`] resolves `order_by` / `sort_by` into a [`SortOrder`].
//! 3. [`pagination`] resolves `limit` / `offset` into a [`Page`].
//!
//! The first rejected parameter aborts the request with a
//! [`ValidationError`](crate::ValidationError). Nothing here touches storage;
//! the resulting [`QuerySpec`] is executed by `mrt-db`.

pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod params;
pub mod spec;

pub use filter::{Filter, Predicate};
pub use ordering::{OrderColumn, SortDirection, SortOrder};
pub use pagination::{Page, MAX_WARPS_LIMIT};
pub use params::WarpQueryParams;
pub use spec::QuerySpec;
