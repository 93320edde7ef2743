//! MRT API Server
//!
//! Read-only REST API over MyWarp warps and the MRT company and world
//! catalogs.
//!
//! ## Endpoints
//!
//! Mounted under both `/api/v1` and `/api/v2`:
//!
//! ### Warps
//! - GET /warps - List warps (v1: array; v2: `{pagination, result}`)
//! - GET /warps/:id - Get warp by id
//!
//! ### Companies
//! - GET /companies - List companies, `?mode=` filters by transport mode
//! - GET /companies/:id - Get company
//!
//! ### Worlds
//! - GET /worlds - List worlds
//! - GET /worlds/:id - Get world
//!
//! Unversioned:
//! - GET /ping - Heartbeat
//! - GET /health - Store availability and version
//! - GET /swagger/index.html - Swagger UI
//! - GET /swagger/doc.json - OpenAPI 3 document
//!
//! Only the `/api` routes count against `max_in_flight`.

pub mod dto;
pub mod error;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use routes::*;
pub use server::*;
pub use state::*;
