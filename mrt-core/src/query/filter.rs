//! Warp filters
//!
//! Each supported filter is described once in [`FILTERS`]: the parameter it
//! reads, and how a raw value becomes a [`Predicate`]. Filters are applied in
//! table order, which is also the order validation errors are reported in.

use uuid::Uuid;

use super::params::WarpQueryParams;
use crate::catalog::ReferenceData;
use crate::error::{ValidationError, ValidationResult};
use crate::types::WarpType;

/// A single storage-level constraint on warps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `warp.name = value`
    NameEquals(String),
    /// `player.uuid = value` (lowercase, hyphenated)
    PlayerEquals(String),
    /// `warp.name LIKE pattern`
    NameLike(String),
    /// `world.uuid = value`
    WorldEquals(String),
    /// `warp.type = value`
    TypeEquals(WarpType),
}

/// Conjunction of predicates. Empty matches every warp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Unconditional filter
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_unconditional(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl FromIterator<Predicate> for Filter {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

struct FilterDescriptor {
    param: &'static str,
    value: fn(&WarpQueryParams) -> Option<&str>,
    build: fn(&str, &ReferenceData) -> ValidationResult<Predicate>,
}

const FILTERS: [FilterDescriptor; 5] = [
    FilterDescriptor {
        param: "name",
        value: WarpQueryParams::name,
        build: |raw, _| Ok(Predicate::NameEquals(raw.to_string())),
    },
    FilterDescriptor {
        param: "player",
        value: WarpQueryParams::player,
        build: |raw, _| parse_player_uuid(raw).map(Predicate::PlayerEquals),
    },
    FilterDescriptor {
        param: "company",
        value: WarpQueryParams::company,
        build: |raw, refs| {
            refs.companies
                .get(raw)
                .map(|company| Predicate::NameLike(company.pattern.clone()))
                .ok_or_else(|| {
                    ValidationError::new(
                        "company",
                        "The 'company' query parameter must be one of the IDs returned from the /companies endpoint.",
                    )
                })
        },
    },
    FilterDescriptor {
        param: "world",
        value: WarpQueryParams::world,
        build: |raw, refs| {
            refs.worlds
                .get(raw)
                .map(|world| Predicate::WorldEquals(world.uuid.clone()))
                .ok_or_else(|| {
                    ValidationError::new(
                        "world",
                        "The 'world' query parameter must be one of the IDs returned from the /worlds endpoint.",
                    )
                })
        },
    },
    FilterDescriptor {
        param: "type",
        value: WarpQueryParams::warp_type,
        build: |raw, _| parse_warp_type(raw).map(Predicate::TypeEquals),
    },
];

/// Validate every supplied filter parameter and combine them with AND.
///
/// Stops at the first invalid parameter.
pub fn build_filter(params: &WarpQueryParams, refs: &ReferenceData) -> ValidationResult<Filter> {
    FILTERS
        .iter()
        .filter_map(|descriptor| {
            (descriptor.value)(params).map(|raw| (descriptor.build)(raw, refs))
        })
        .collect()
}

/// Canonicalize and validate a player UUID.
///
/// Accepts 32 hex digits with or without the 8-4-4-4-12 hyphens and returns
/// the lowercase hyphenated form.
pub fn parse_player_uuid(raw: &str) -> ValidationResult<String> {
    let invalid = || {
        ValidationError::new(
            "player",
            "The 'player' query parameter must be a UUID that has 32 hexadecimal digits (with or without hyphens).",
        )
    };

    let hyphenated = if raw.len() == 32 && raw.is_ascii() {
        format!(
            "{}-{}-{}-{}-{}",
            &raw[0..8],
            &raw[8..12],
            &raw[12..16],
            &raw[16..20],
            &raw[20..32]
        )
    } else {
        raw.to_string()
    };

    if hyphenated.len() != 36 {
        return Err(invalid());
    }

    Uuid::try_parse(&hyphenated)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| invalid())
}

pub fn parse_warp_type(raw: &str) -> ValidationResult<WarpType> {
    raw.parse::<i64>()
        .ok()
        .and_then(|value| WarpType::try_from(value).ok())
        .ok_or_else(|| {
            ValidationError::new(
                "type",
                "The 'type' query parameter must be either 0 (private) or 1 (public).",
            )
        })
}
