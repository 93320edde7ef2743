//! Logging Standards and Conventions
//!
//! All MRT crates log through `tracing` with structured fields.
//!
//! # Log Levels
//!
//! | Level | Usage | Examples |
//! |-------|-------|----------|
//! | ERROR | Request-fatal failures | Store unreachable, query failed |
//! | WARN  | Recoverable issues | Response could not be rendered |
//! | INFO  | Startup and lifecycle | Catalog loaded, server listening |
//! | DEBUG | Per-request flow | Validation rejected, query hits |
//! | TRACE | Fine-grained detail | Rendered SQL |
//!
//! # Structured Logging Fields
//!
//! - `operation`: Operation name (see [`operations`])
//! - `param`: Rejected query parameter
//! - `count`: Item count
//! - `hits` / `total_hits`: Page size and total matches
//! - `duration_ms`: Operation duration
//! - `error`: Error message
//!
//! ```ignore
//! use tracing::debug;
//!
//! // Good
//! debug!(operation = operations::WARP_LIST, hits = warps.len(), "Warps listed");
//!
//! // Bad
//! debug!("Listed {} warps", warps.len());
//! ```

/// Log level enumeration matching tracing levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse from string, accepting `warning` for `warn`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation names used in the `operation` field
pub mod operations {
    pub const CATALOG_LOAD: &str = "catalog_load";
    pub const VALIDATE: &str = "validate";
    pub const WARP_LIST: &str = "warp_list";
    pub const WARP_COUNT: &str = "warp_count";
    pub const WARP_GET: &str = "warp_get";
    pub const RENDER: &str = "render";
    pub const DB_CONNECT: &str = "db_connect";
    pub const HEALTH_CHECK: &str = "health_check";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("invalid"), None);
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Debug.to_string(), "debug");
    }
}
