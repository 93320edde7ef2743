//! MySQL warp store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mrt_core::{Filter, QuerySpec, Warp, WarpType};
use sqlx::mysql::MySqlPool;
use sqlx::FromRow;
use tracing::trace;

use super::WarpStore;
use crate::error::{StoreError, StoreResult};
use crate::sql;

/// Row shape produced by `schema::WARP_COLUMNS`
#[derive(Debug, FromRow)]
struct WarpRow {
    warp_id: u64,
    name: String,
    player_uuid: String,
    world_uuid: String,
    x: f64,
    y: f64,
    z: f64,
    pitch: f64,
    yaw: f64,
    creation_date: DateTime<Utc>,
    warp_type: i64,
    visits: u64,
    welcome_message: Option<String>,
}

impl TryFrom<WarpRow> for Warp {
    type Error = StoreError;

    fn try_from(row: WarpRow) -> Result<Self, Self::Error> {
        let id = u32::try_from(row.warp_id)
            .map_err(|_| StoreError::InvalidRow(format!("warp id {} out of range", row.warp_id)))?;
        let warp_type = WarpType::try_from(row.warp_type)
            .map_err(|e| StoreError::InvalidRow(format!("warp {}: {}", id, e)))?;
        let visits = u32::try_from(row.visits).map_err(|_| {
            StoreError::InvalidRow(format!("warp {}: visits {} out of range", id, row.visits))
        })?;

        Ok(Warp {
            id,
            name: row.name,
            player_uuid: row.player_uuid,
            world_uuid: row.world_uuid,
            x: row.x,
            y: row.y,
            z: row.z,
            pitch: row.pitch,
            yaw: row.yaw,
            creation_date: row.creation_date,
            warp_type,
            visits,
            welcome_message: row.welcome_message,
        })
    }
}

/// `WarpStore` over a pooled MySQL connection
#[derive(Debug, Clone)]
pub struct MySqlWarpStore {
    pool: MySqlPool,
}

impl MySqlWarpStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarpStore for MySqlWarpStore {
    async fn fetch_page(&self, spec: &QuerySpec) -> StoreResult<Vec<Warp>> {
        let mut builder = sql::select_page(spec);
        trace!(sql = builder.sql(), "Fetching warp page");
        let rows: Vec<WarpRow> = builder.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter().map(Warp::try_from).collect()
    }

    async fn count(&self, filter: &Filter) -> StoreResult<u64> {
        let mut builder = sql::select_count(filter);
        trace!(sql = builder.sql(), "Counting warps");
        let total: i64 = builder.build_query_scalar().fetch_one(&self.pool).await?;

        u64::try_from(total)
            .map_err(|_| StoreError::InvalidRow(format!("negative count {}", total)))
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Warp>> {
        let mut builder = sql::select_by_id(id);
        let row: Option<WarpRow> = builder.build_query_as().fetch_optional(&self.pool).await?;

        row.map(Warp::try_from).transpose()
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row() -> WarpRow {
        WarpRow {
            warp_id: 12,
            name: "Spawn".to_string(),
            player_uuid: "0d6e3c4a-1b2c-4d5e-8f90-a1b2c3d4e5f6".to_string(),
            world_uuid: "253ced62-9637-4f7b-a32d-4e3e8e767bd1".to_string(),
            x: 1.0,
            y: 70.0,
            z: -1.0,
            pitch: 0.0,
            yaw: 180.0,
            creation_date: Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap(),
            warp_type: 1,
            visits: 300,
            welcome_message: Some("Welcome to {warp}".to_string()),
        }
    }

    #[test]
    fn test_row_conversion() {
        let warp = Warp::try_from(row()).unwrap();

        assert_eq!(warp.id, 12);
        assert_eq!(warp.warp_type, WarpType::Public);
        assert_eq!(warp.visits, 300);
        assert_eq!(warp.welcome_message.as_deref(), Some("Welcome to {warp}"));
    }

    #[test]
    fn test_row_with_unknown_type_is_rejected() {
        let mut bad = row();
        bad.warp_type = 5;

        assert!(matches!(Warp::try_from(bad), Err(StoreError::InvalidRow(_))));
    }

    #[test]
    fn test_row_with_oversized_id_is_rejected() {
        let mut bad = row();
        bad.warp_id = u64::from(u32::MAX) + 1;

        assert!(matches!(Warp::try_from(bad), Err(StoreError::InvalidRow(_))));
    }
}
