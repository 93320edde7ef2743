//! SQL rendering for warp queries
//!
//! Every value reaches MySQL as a bound parameter. The page query and the
//! count query are rendered from the same `Filter`, so both always carry an
//! identical `WHERE` clause.

use mrt_core::{Filter, OrderColumn, Predicate, QuerySpec, SortOrder};
use sqlx::{MySql, QueryBuilder};

use crate::schema::{
    PLAYER_UUID, WARP_COLUMNS, WARP_CREATION_DATE, WARP_ID, WARP_JOINS, WARP_NAME, WARP_TYPE,
    WARP_VISITS, WORLD_UUID,
};

/// `SELECT ... WHERE ... ORDER BY ... LIMIT ? OFFSET ?`
pub fn select_page(spec: &QuerySpec) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!("SELECT {} {}", WARP_COLUMNS, WARP_JOINS));

    push_filter(&mut builder, &spec.filter);
    push_order(&mut builder, spec.order);

    builder
        .push(" LIMIT ")
        .push_bind(spec.page.limit)
        .push(" OFFSET ")
        .push_bind(spec.page.offset);

    builder
}

/// `SELECT COUNT(...) WHERE ...`, unaffected by ordering and paging
pub fn select_count(filter: &Filter) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT({}) {}", WARP_ID, WARP_JOINS));
    push_filter(&mut builder, filter);
    builder
}

pub fn select_by_id(id: u64) -> QueryBuilder<'static, MySql> {
    let mut builder = QueryBuilder::new(format!("SELECT {} {}", WARP_COLUMNS, WARP_JOINS));
    builder.push(" WHERE ").push(WARP_ID).push(" = ").push_bind(id);
    builder
}

fn push_filter(builder: &mut QueryBuilder<'static, MySql>, filter: &Filter) {
    for (index, predicate) in filter.predicates().iter().enumerate() {
        builder.push(if index == 0 { " WHERE " } else { " AND " });

        match predicate {
            Predicate::NameEquals(name) => builder.push(WARP_NAME).push(" = ").push_bind(name.clone()),
            Predicate::PlayerEquals(uuid) => builder.push(PLAYER_UUID).push(" = ").push_bind(uuid.clone()),
            Predicate::NameLike(pattern) => builder.push(WARP_NAME).push(" LIKE ").push_bind(pattern.clone()),
            Predicate::WorldEquals(uuid) => builder.push(WORLD_UUID).push(" = ").push_bind(uuid.clone()),
            Predicate::TypeEquals(warp_type) => builder.push(WARP_TYPE).push(" = ").push_bind(warp_type.as_u8()),
        };
    }
}

/// Rows tied on the ordering column fall back to ascending id
fn push_order(builder: &mut QueryBuilder<'static, MySql>, order: SortOrder) {
    builder
        .push(" ORDER BY ")
        .push(order_column(order.column))
        .push(" ")
        .push(order.direction.as_sql());

    if order.column != OrderColumn::Id {
        builder.push(", ").push(WARP_ID).push(" ASC");
    }
}

fn order_column(column: OrderColumn) -> &'static str {
    match column {
        OrderColumn::Id => WARP_ID,
        OrderColumn::Name => WARP_NAME,
        OrderColumn::CreationDate => WARP_CREATION_DATE,
        OrderColumn::Visits => WARP_VISITS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrt_core::{Page, SortDirection, WarpType};

    fn tail(sql: &str) -> &str {
        let start = sql.find("world.world_id").expect("joins rendered") + "world.world_id".len();
        &sql[start..]
    }

    #[test]
    fn test_default_page_query() {
        let builder = select_page(&QuerySpec::default());
        let sql = builder.sql();

        assert!(sql.starts_with("SELECT CAST(warp.warp_id AS UNSIGNED) AS warp_id"));
        assert!(sql.contains(
            "FROM warp INNER JOIN player ON warp.player_id = player.player_id \
             INNER JOIN world ON warp.world_id = world.world_id"
        ));
        assert_eq!(tail(sql), " ORDER BY warp.warp_id ASC LIMIT ? OFFSET ?");
    }

    #[test]
    fn test_filtered_page_query() {
        let spec = QuerySpec {
            filter: Filter::all()
                .and(Predicate::NameEquals("Central".to_string()))
                .and(Predicate::PlayerEquals("0d6e3c4a-1b2c-4d5e-8f90-a1b2c3d4e5f6".to_string()))
                .and(Predicate::NameLike("MRT%".to_string()))
                .and(Predicate::WorldEquals("253ced62-9637-4f7b-a32d-4e3e8e767bd1".to_string()))
                .and(Predicate::TypeEquals(WarpType::Public)),
            order: SortOrder {
                column: OrderColumn::Visits,
                direction: SortDirection::Desc,
            },
            page: Page { limit: 10, offset: 5 },
        };

        let builder = select_page(&spec);

        assert_eq!(
            tail(builder.sql()),
            " WHERE warp.name = ? AND player.uuid = ? AND warp.name LIKE ? \
             AND world.uuid = ? AND warp.type = ? ORDER BY warp.visits DESC, warp.warp_id ASC \
             LIMIT ? OFFSET ?"
        );
    }

    #[test]
    fn test_count_query_shares_where_clause() {
        let filter = Filter::all()
            .and(Predicate::NameLike("MRT%".to_string()))
            .and(Predicate::TypeEquals(WarpType::Private));
        let spec = QuerySpec {
            filter: filter.clone(),
            ..Default::default()
        };

        let page = select_page(&spec);
        let count = select_count(&filter);
        let count_sql = count.sql();

        assert!(count_sql.starts_with("SELECT COUNT(warp.warp_id) FROM warp"));
        assert_eq!(
            tail(count_sql),
            " WHERE warp.name LIKE ? AND warp.type = ?"
        );
        assert!(tail(page.sql()).starts_with(tail(count_sql)));
        assert!(!count_sql.contains("ORDER BY"));
        assert!(!count_sql.contains("LIMIT"));
    }

    #[test]
    fn test_unconditional_count_query() {
        let count = select_count(&Filter::all());
        assert_eq!(tail(count.sql()), "");
    }

    #[test]
    fn test_order_columns() {
        for (column, expected) in [
            (OrderColumn::Name, " ORDER BY warp.name ASC, warp.warp_id ASC LIMIT"),
            (
                OrderColumn::CreationDate,
                " ORDER BY warp.creation_date ASC, warp.warp_id ASC LIMIT",
            ),
        ] {
            let spec = QuerySpec {
                order: SortOrder {
                    column,
                    direction: SortDirection::Asc,
                },
                ..Default::default()
            };
            let builder = select_page(&spec);
            assert!(tail(builder.sql()).starts_with(expected));
        }
    }

    #[test]
    fn test_by_id_query() {
        let builder = select_by_id(42);
        assert_eq!(tail(builder.sql()), " WHERE warp.warp_id = ?");
    }
}
