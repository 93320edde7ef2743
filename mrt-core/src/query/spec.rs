//! Validated warp list query

use tracing::debug;

use super::filter::{build_filter, Filter};
use super::ordering::SortOrder;
use super::pagination::Page;
use super::params::WarpQueryParams;
use crate::catalog::ReferenceData;
use crate::error::ValidationResult;
use crate::logging::operations;

/// A fully resolved warp list request.
///
/// The same `filter` drives both the page fetch and the total count, so
/// `total_hits` always describes the filter the page was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    pub filter: Filter,
    pub order: SortOrder,
    pub page: Page,
}

impl QuerySpec {
    /// Validate raw parameters in order: filters, ordering, pagination.
    pub fn from_params(params: &WarpQueryParams, refs: &ReferenceData) -> ValidationResult<Self> {
        let spec = build_filter(params, refs).and_then(|filter| {
            let order = SortOrder::resolve(params.order_by(), params.sort_by())?;
            let page = Page::resolve(params.limit(), params.offset())?;
            Ok(Self {
                filter,
                order,
                page,
            })
        });

        if let Err(err) = &spec {
            debug!(
                operation = operations::VALIDATE,
                param = err.param,
                "Warp query rejected"
            );
        }

        spec
    }

    /// Filter for the paired count query
    pub fn count_filter(&self) -> &Filter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CompanyCatalog, WorldCatalog};
    use crate::query::{OrderColumn, Predicate, SortDirection};
    use crate::types::World;

    fn refs() -> ReferenceData {
        ReferenceData::new(
            CompanyCatalog::default(),
            WorldCatalog::from_entries(vec![World {
                id: "new".to_string(),
                uuid: "253ced62-9637-4f7b-a32d-4e3e8e767bd1".to_string(),
            }])
            .unwrap(),
        )
    }

    fn params(pairs: &[(&str, &str)]) -> WarpQueryParams {
        let mut params = WarpQueryParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "name" => params.name = value,
                "player" => params.player = value,
                "company" => params.company = value,
                "world" => params.world = value,
                "type" => params.warp_type = value,
                "order_by" => params.order_by = value,
                "sort_by" => params.sort_by = value,
                "limit" => params.limit = value,
                "offset" => params.offset = value,
                other => panic!("unexpected parameter {other}"),
            }
        }
        params
    }

    #[test]
    fn test_empty_request_uses_defaults() {
        let spec = QuerySpec::from_params(&WarpQueryParams::default(), &refs()).unwrap();
        assert_eq!(spec, QuerySpec::default());
        assert!(spec.count_filter().is_unconditional());
    }

    #[test]
    fn test_full_request() {
        let spec = QuerySpec::from_params(
            &params(&[
                ("world", "new"),
                ("type", "0"),
                ("order_by", "creation_date"),
                ("sort_by", "desc"),
                ("limit", "10"),
                ("offset", "20"),
            ]),
            &refs(),
        )
        .unwrap();

        assert_eq!(spec.filter.predicates().len(), 2);
        assert!(matches!(spec.filter.predicates()[0], Predicate::WorldEquals(_)));
        assert_eq!(spec.order.column, OrderColumn::CreationDate);
        assert_eq!(spec.order.direction, SortDirection::Desc);
        assert_eq!(spec.page, Page { limit: 10, offset: 20 });
    }

    #[test]
    fn test_validation_order() {
        let cases: &[(&[(&str, &str)], &str)] = &[
            (&[("offset", "-1"), ("limit", "-1"), ("sort_by", "x"), ("order_by", "x"), ("type", "x"), ("world", "x"), ("company", "x"), ("player", "x")], "player"),
            (&[("offset", "-1"), ("limit", "-1"), ("sort_by", "x"), ("order_by", "x"), ("type", "x"), ("world", "x"), ("company", "x")], "company"),
            (&[("offset", "-1"), ("limit", "-1"), ("sort_by", "x"), ("order_by", "x"), ("type", "x"), ("world", "x")], "world"),
            (&[("offset", "-1"), ("limit", "-1"), ("sort_by", "x"), ("order_by", "x"), ("type", "x")], "type"),
            (&[("offset", "-1"), ("limit", "-1"), ("sort_by", "x"), ("order_by", "x")], "order_by"),
            (&[("offset", "-1"), ("limit", "-1"), ("sort_by", "x")], "sort_by"),
            (&[("offset", "-1"), ("limit", "-1")], "limit"),
            (&[("offset", "-1")], "offset"),
        ];

        for (pairs, expected) in cases {
            let err = QuerySpec::from_params(&params(pairs), &refs()).unwrap_err();
            assert_eq!(err.param, *expected);
        }
    }
}
