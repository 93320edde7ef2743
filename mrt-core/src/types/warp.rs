//! Warp types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvalidWarpType;

/// Warp visibility, stored as a small integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WarpType {
    /// Only the owner (and invited players) may use it
    Private = 0,
    /// Anyone may use it
    Public = 1,
}

impl WarpType {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

impl From<WarpType> for u8 {
    fn from(value: WarpType) -> Self {
        value.as_u8()
    }
}

impl TryFrom<i64> for WarpType {
    type Error = InvalidWarpType;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Private),
            1 => Ok(Self::Public),
            other => Err(InvalidWarpType(other)),
        }
    }
}

impl TryFrom<u8> for WarpType {
    type Error = InvalidWarpType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl std::fmt::Display for WarpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A warp joined against its owning player and world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warp {
    pub id: u32,
    pub name: String,
    #[serde(rename = "playerUUID")]
    pub player_uuid: String,
    #[serde(rename = "worldUUID")]
    pub world_uuid: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub pitch: f64,
    pub yaw: f64,
    #[serde(rename = "creationDate")]
    pub creation_date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub warp_type: WarpType,
    pub visits: u32,
    #[serde(rename = "welcomeMessage")]
    pub welcome_message: Option<String>,
}
