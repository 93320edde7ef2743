//! Warp list pagination

use crate::error::{ValidationError, ValidationResult};

/// Maximum number of warps returned per request
pub const MAX_WARPS_LIMIT: u32 = 2000;

/// Requested page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: MAX_WARPS_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    /// Resolve `limit` then `offset`
    pub fn resolve(limit: Option<&str>, offset: Option<&str>) -> ValidationResult<Self> {
        let limit = limit.map(parse_limit).transpose()?.unwrap_or(MAX_WARPS_LIMIT);
        let offset = offset.map(parse_offset).transpose()?.unwrap_or(0);

        Ok(Self { limit, offset })
    }

    /// Number of rows a page holds when `total` rows match
    pub fn hits_for(&self, total: u64) -> u64 {
        total.saturating_sub(self.offset).min(u64::from(self.limit))
    }
}

fn parse_limit(raw: &str) -> ValidationResult<u32> {
    raw.parse::<i64>()
        .ok()
        .filter(|limit| (0..=i64::from(MAX_WARPS_LIMIT)).contains(limit))
        .and_then(|limit| u32::try_from(limit).ok())
        .ok_or_else(|| {
            ValidationError::new(
                "limit",
                format!(
                    "The 'limit' query parameter must be an unsigned integer within the following range: 0 <= limit <= {}.",
                    MAX_WARPS_LIMIT
                ),
            )
        })
}

fn parse_offset(raw: &str) -> ValidationResult<u64> {
    raw.parse::<i64>()
        .ok()
        .and_then(|offset| u64::try_from(offset).ok())
        .ok_or_else(|| {
            ValidationError::new(
                "offset",
                "The 'offset' query parameter must be an unsigned integer.",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = Page::resolve(None, None).unwrap();
        assert_eq!(page.limit, 2000);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn test_limit_bounds() {
        assert_eq!(Page::resolve(Some("0"), None).unwrap().limit, 0);
        assert_eq!(Page::resolve(Some("2000"), None).unwrap().limit, 2000);

        for raw in ["2001", "-1", "ten", "1e3"] {
            let err = Page::resolve(Some(raw), None).unwrap_err();
            assert_eq!(err.param, "limit");
            assert!(err.detail.contains("0 <= limit <= 2000"));
        }
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(Page::resolve(None, Some("4000")).unwrap().offset, 4000);

        for raw in ["-1", "abc", "99999999999999999999"] {
            let err = Page::resolve(None, Some(raw)).unwrap_err();
            assert_eq!(err.param, "offset");
        }
    }

    #[test]
    fn test_limit_checked_before_offset() {
        let err = Page::resolve(Some("5000"), Some("-5")).unwrap_err();
        assert_eq!(err.param, "limit");
    }

    #[test]
    fn test_hits_for() {
        let page = Page { limit: 10, offset: 0 };
        assert_eq!(page.hits_for(3), 3);
        assert_eq!(page.hits_for(25), 10);

        let page = Page { limit: 10, offset: 20 };
        assert_eq!(page.hits_for(25), 5);
        assert_eq!(page.hits_for(15), 0);
    }
}
