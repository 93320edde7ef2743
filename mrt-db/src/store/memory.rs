//! In-memory warp store
//!
//! Evaluates predicates in process with MySQL's default collation rules:
//! case-insensitive `=` and `LIKE`, `%` and `_` wildcards, `\` as escape.
//! Backs the router tests, which need no database.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use tokio::sync::RwLock;

use mrt_core::{Filter, OrderColumn, Predicate, QuerySpec, SortDirection, SortOrder, Warp};

use super::WarpStore;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryWarpStore {
    warps: Arc<RwLock<Vec<Warp>>>,
    queries: AtomicU64,
    unavailable: AtomicBool,
}

impl MemoryWarpStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warps(warps: Vec<Warp>) -> Self {
        Self {
            warps: Arc::new(RwLock::new(warps)),
            ..Self::default()
        }
    }

    /// Number of store calls served so far, pings excluded
    pub fn queries(&self) -> u64 {
        self.queries.load(AtomicOrdering::SeqCst)
    }

    /// Make every call fail as if the database were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, AtomicOrdering::SeqCst);
    }

    fn begin(&self) -> StoreResult<()> {
        if self.unavailable.load(AtomicOrdering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl WarpStore for MemoryWarpStore {
    async fn fetch_page(&self, spec: &QuerySpec) -> StoreResult<Vec<Warp>> {
        self.begin()?;
        self.queries.fetch_add(1, AtomicOrdering::SeqCst);

        let warps = self.warps.read().await;
        let mut matched: Vec<&Warp> = warps.iter().filter(|w| matches_filter(w, &spec.filter)).collect();
        matched.sort_by(|a, b| compare(a, b, spec.order));

        let offset = usize::try_from(spec.page.offset).unwrap_or(usize::MAX);
        let limit = spec.page.limit as usize;

        Ok(matched.into_iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self, filter: &Filter) -> StoreResult<u64> {
        self.begin()?;
        self.queries.fetch_add(1, AtomicOrdering::SeqCst);

        let warps = self.warps.read().await;
        Ok(warps.iter().filter(|w| matches_filter(w, filter)).count() as u64)
    }

    async fn find_by_id(&self, id: u64) -> StoreResult<Option<Warp>> {
        self.begin()?;
        self.queries.fetch_add(1, AtomicOrdering::SeqCst);

        let warps = self.warps.read().await;
        Ok(warps.iter().find(|w| u64::from(w.id) == id).cloned())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.begin()
    }
}

fn matches_filter(warp: &Warp, filter: &Filter) -> bool {
    filter.predicates().iter().all(|predicate| match predicate {
        Predicate::NameEquals(name) => warp.name.to_lowercase() == name.to_lowercase(),
        Predicate::PlayerEquals(uuid) => warp.player_uuid.eq_ignore_ascii_case(uuid),
        Predicate::NameLike(pattern) => like(&warp.name, pattern),
        Predicate::WorldEquals(uuid) => warp.world_uuid.eq_ignore_ascii_case(uuid),
        Predicate::TypeEquals(warp_type) => warp.warp_type == *warp_type,
    })
}

/// Orders by the requested column; ties fall back to ascending id.
fn compare(a: &Warp, b: &Warp, order: SortOrder) -> Ordering {
    let primary = match order.column {
        OrderColumn::Id => a.id.cmp(&b.id),
        OrderColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        OrderColumn::CreationDate => a.creation_date.cmp(&b.creation_date),
        OrderColumn::Visits => a.visits.cmp(&b.visits),
    };
    let primary = match order.direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Any,
    One,
    Literal(char),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => Token::Any,
            '_' => Token::One,
            // A trailing backslash matches itself
            '\\' => Token::Literal(chars.next().unwrap_or('\\')),
            other => Token::Literal(other),
        });
    }

    tokens
}

/// Case-insensitive SQL `LIKE`
pub fn like(value: &str, pattern: &str) -> bool {
    let value: Vec<char> = value.to_lowercase().chars().collect();
    let tokens = tokenize(&pattern.to_lowercase());

    let (mut v, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match tokens.get(t) {
            Some(Token::Any) => {
                backtrack = Some((t, v));
                t += 1;
            }
            Some(Token::One) => {
                v += 1;
                t += 1;
            }
            Some(Token::Literal(c)) if *c == value[v] => {
                v += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, resume)) => {
                    t = star + 1;
                    v = resume + 1;
                    backtrack = Some((star, resume + 1));
                }
                None => return false,
            },
        }
    }

    tokens[t..].iter().all(|token| *token == Token::Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mrt_core::{Page, WarpType};

    fn warp(id: u32, name: &str, visits: u32, warp_type: WarpType) -> Warp {
        Warp {
            id,
            name: name.to_string(),
            player_uuid: "0d6e3c4a-1b2c-4d5e-8f90-a1b2c3d4e5f6".to_string(),
            world_uuid: "253ced62-9637-4f7b-a32d-4e3e8e767bd1".to_string(),
            x: 0.0,
            y: 64.0,
            z: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            creation_date: Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, id).unwrap(),
            warp_type,
            visits,
            welcome_message: None,
        }
    }

    fn store() -> MemoryWarpStore {
        MemoryWarpStore::with_warps(vec![
            warp(3, "MRT-A1", 10, WarpType::Public),
            warp(1, "mrt-b2", 50, WarpType::Public),
            warp(2, "Spawn", 10, WarpType::Private),
            warp(4, "MRTX", 5, WarpType::Public),
        ])
    }

    #[test]
    fn test_like_wildcards() {
        assert!(like("MRT-A1", "MRT-%"));
        assert!(like("mrt-a1", "MRT-%"));
        assert!(like("MRT-A1", "MRT-__"));
        assert!(!like("MRT-A1", "MRT-_"));
        assert!(like("abcabc", "%abc"));
        assert!(like("", "%"));
        assert!(!like("", "_"));
        assert!(like("a%b", "a\\%b"));
        assert!(!like("axb", "a\\%b"));
        assert!(like("a_b", "a\\_b"));
        assert!(!like("axb", "a\\_b"));
    }

    #[tokio::test]
    async fn test_fetch_page_filters_and_orders() {
        let store = store();
        let spec = QuerySpec {
            filter: Filter::all()
                .and(Predicate::NameLike("MRT-%".to_string()))
                .and(Predicate::TypeEquals(WarpType::Public)),
            ..Default::default()
        };

        let ids: Vec<u32> = store.fetch_page(&spec).await.unwrap().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.count(&spec.filter).await.unwrap(), 2);
        assert_eq!(store.queries(), 2);
    }

    #[tokio::test]
    async fn test_ties_broken_by_id() {
        let store = store();
        let spec = QuerySpec {
            order: SortOrder {
                column: OrderColumn::Visits,
                direction: SortDirection::Desc,
            },
            ..Default::default()
        };

        let ids: Vec<u32> = store.fetch_page(&spec).await.unwrap().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_paging_past_end() {
        let store = store();
        let spec = QuerySpec {
            page: Page { limit: 2, offset: 10 },
            ..Default::default()
        };

        assert!(store.fetch_page(&spec).await.unwrap().is_empty());
        assert_eq!(store.count(&spec.filter).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_name_equality_ignores_case() {
        let store = store();
        let filter = Filter::all().and(Predicate::NameEquals("spawn".to_string()));

        assert_eq!(store.count(&filter).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = store();

        assert_eq!(store.find_by_id(2).await.unwrap().map(|w| w.name), Some("Spawn".to_string()));
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let store = store();
        store.set_unavailable(true);

        assert!(store.ping().await.is_err());
        assert!(store.count(&Filter::all()).await.is_err());
        assert_eq!(store.queries(), 0);
    }
}
