//! Company types
//!
//! Companies are not stored in the database. Each one owns a LIKE pattern
//! that selects its warps by name.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Transport mode a company operates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    WarpRail,
    Bus,
    Air,
    Sea,
    Other,
}

impl TransportMode {
    /// Every mode, in listing order
    pub const ALL: [TransportMode; 5] = [
        TransportMode::WarpRail,
        TransportMode::Bus,
        TransportMode::Air,
        TransportMode::Sea,
        TransportMode::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WarpRail => "warp_rail",
            Self::Bus => "bus",
            Self::Air => "air",
            Self::Sea => "sea",
            Self::Other => "other",
        }
    }
}

impl FromStr for TransportMode {
    type Err = UnknownTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownTransportMode(s.to_string()))
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a mode string is not one of [`TransportMode::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct UnknownTransportMode(pub String);

/// A transit company defined in static data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
    /// LIKE pattern matched against warp names
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<TransportMode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_mode_parsing() {
        assert_eq!("warp_rail".parse(), Ok(TransportMode::WarpRail));
        assert_eq!("sea".parse(), Ok(TransportMode::Sea));
        assert!("WarpRail".parse::<TransportMode>().is_err());
        assert!("rail".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_company_yaml_without_mode() {
        let company: Company =
            serde_yaml::from_str("id: mrt\nname: MRT Transit\npattern: 'MRT%'\n").unwrap();

        assert_eq!(company.id, "mrt");
        assert_eq!(company.pattern, "MRT%");
        assert_eq!(company.mode, None);
    }
}
