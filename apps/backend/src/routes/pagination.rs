//! List pagination query parameters.

use serde::Deserialize;

use crate::error::AppError;

pub const DEFAULT_LIMIT: i64 = 50;
pub const MAX_LIMIT: i64 = 500;

/// Raw query parameters. Kept as strings so parse failures surface with
/// the parser's own error text instead of the framework's.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Effective page after defaulting and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Page {
    /// limit defaults to 50 and is clamped to [1, 500]; offset defaults
    /// to 0 and is clamped to [0, i64::MAX]. An empty parameter counts
    /// as absent.
    pub fn from_query(query: &PageQuery) -> Result<Self, AppError> {
        let limit = match query.limit.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|e| AppError::bad_request("LIMIT_INVALID", e.to_string()))?
                .clamp(1, MAX_LIMIT),
            None => DEFAULT_LIMIT,
        };

        let offset = match query.offset.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|e| AppError::bad_request("OFFSET_INVALID", e.to_string()))?
                .max(0),
            None => 0,
        };

        Ok(Self {
            limit: limit as u64,
            offset: offset as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>, offset: Option<&str>) -> PageQuery {
        PageQuery {
            limit: limit.map(str::to_string),
            offset: offset.map(str::to_string),
        }
    }

    #[test]
    fn defaults_when_absent() {
        let page = Page::from_query(&query(None, None)).unwrap();
        assert_eq!(page, Page { limit: 50, offset: 0 });
    }

    #[test]
    fn empty_parameters_count_as_absent() {
        let page = Page::from_query(&query(Some(""), Some(""))).unwrap();
        assert_eq!(page, Page { limit: 50, offset: 0 });
    }

    #[test]
    fn limit_is_clamped_into_range() {
        for (raw, effective) in [("0", 1), ("-3", 1), ("1", 1), ("500", 500), ("10000", 500)] {
            let page = Page::from_query(&query(Some(raw), None)).unwrap();
            assert_eq!(page.limit, effective, "limit={raw}");
        }
    }

    #[test]
    fn offset_is_clamped_to_zero() {
        for (raw, effective) in [("-1", 0), ("0", 0), ("25", 25)] {
            let page = Page::from_query(&query(None, Some(raw))).unwrap();
            assert_eq!(page.offset, effective, "offset={raw}");
        }
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let err = Page::from_query(&query(Some("abc"), None)).unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest {
                code: "LIMIT_INVALID",
                ..
            }
        ));

        let err = Page::from_query(&query(None, Some("1.5"))).unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest {
                code: "OFFSET_INVALID",
                ..
            }
        ));
    }
}
