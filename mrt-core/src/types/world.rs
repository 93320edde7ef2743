//! World types

use serde::{Deserialize, Serialize};

/// A server world defined in static data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub id: String,
    /// Joined against `world.uuid` in the warp database
    pub uuid: String,
}
