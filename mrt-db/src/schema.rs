//! MyWarp schema fragments
//!
//! The warp database is owned by the MyWarp plugin; this crate only reads it.
//! Relevant tables:
//!
//! ```text
//! warp   (warp_id, name, player_id, world_id, x, y, z, pitch, yaw,
//!         creation_date, type, visits, welcome_message)
//! player (player_id, uuid)
//! world  (world_id, uuid)
//! ```
//!
//! Integer columns are cast in the projection so decoding does not depend on
//! signedness or width of the MyWarp column definitions.

/// Projection shared by every warp row query
pub const WARP_COLUMNS: &str = "CAST(warp.warp_id AS UNSIGNED) AS warp_id, \
warp.name AS name, \
player.uuid AS player_uuid, \
world.uuid AS world_uuid, \
warp.x AS x, \
warp.y AS y, \
warp.z AS z, \
warp.pitch AS pitch, \
warp.yaw AS yaw, \
warp.creation_date AS creation_date, \
CAST(warp.type AS SIGNED) AS warp_type, \
CAST(warp.visits AS UNSIGNED) AS visits, \
warp.welcome_message AS welcome_message";

/// Inner joins resolving player and world UUIDs.
///
/// Warps whose foreign keys don't resolve are excluded by the join itself.
pub const WARP_JOINS: &str = "FROM warp \
INNER JOIN player ON warp.player_id = player.player_id \
INNER JOIN world ON warp.world_id = world.world_id";

pub const WARP_ID: &str = "warp.warp_id";
pub const WARP_NAME: &str = "warp.name";
pub const WARP_CREATION_DATE: &str = "warp.creation_date";
pub const WARP_TYPE: &str = "warp.type";
pub const WARP_VISITS: &str = "warp.visits";
pub const PLAYER_UUID: &str = "player.uuid";
pub const WORLD_UUID: &str = "world.uuid";
