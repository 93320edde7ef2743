//! Warp list ordering

use crate::error::{ValidationError, ValidationResult};

/// Column a warp list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderColumn {
    /// Primary key; keeps offset paging deterministic
    #[default]
    Id,
    Name,
    CreationDate,
    Visits,
}

impl OrderColumn {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        match raw {
            "name" => Ok(Self::Name),
            "creation_date" => Ok(Self::CreationDate),
            "visits" => Ok(Self::Visits),
            _ => Err(ValidationError::new(
                "order_by",
                "The 'order_by' query parameter must be one of 'name', 'creation_date', or 'visits'.",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        match raw {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ValidationError::new(
                "sort_by",
                "The 'sort_by' query parameter must be one of 'asc' or 'desc'.",
            )),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Single-column ordering; defaults to id ascending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub column: OrderColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Resolve `order_by` then `sort_by`, in that validation order
    pub fn resolve(order_by: Option<&str>, sort_by: Option<&str>) -> ValidationResult<Self> {
        let column = order_by
            .map(OrderColumn::parse)
            .transpose()?
            .unwrap_or_default();
        let direction = sort_by
            .map(SortDirection::parse)
            .transpose()?
            .unwrap_or_default();

        Ok(Self { column, direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_id_ascending() {
        let order = SortOrder::resolve(None, None).unwrap();
        assert_eq!(order.column, OrderColumn::Id);
        assert_eq!(order.direction, SortDirection::Asc);
    }

    #[test]
    fn test_resolve_order() {
        let order = SortOrder::resolve(Some("visits"), Some("desc")).unwrap();
        assert_eq!(order.column, OrderColumn::Visits);
        assert_eq!(order.direction, SortDirection::Desc);

        let order = SortOrder::resolve(None, Some("desc")).unwrap();
        assert_eq!(order.column, OrderColumn::Id);
        assert_eq!(order.direction, SortDirection::Desc);
    }

    #[test]
    fn test_order_by_checked_before_sort_by() {
        let err = SortOrder::resolve(Some("id"), Some("up")).unwrap_err();
        assert_eq!(err.param, "order_by");

        let err = SortOrder::resolve(Some("name"), Some("ASC")).unwrap_err();
        assert_eq!(err.param, "sort_by");
        assert!(err.detail.contains("'asc' or 'desc'"));
    }
}
