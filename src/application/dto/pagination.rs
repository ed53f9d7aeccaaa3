use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalized limit/offset pair. Out-of-range values are clamped rather
/// than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    pub fn from_params(limit: Option<u32>, offset: Option<u64>) -> Self {
        Self {
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
            // Capped so the offset always fits a signed database bind.
            offset: offset.unwrap_or(0).min(i64::MAX as u64),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct Paging {
    pub limit: u32,
    pub offset: u64,
    /// Total matching rows, independent of limit and offset.
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

impl<T> Page<T> {
    pub fn new(mut data: Vec<T>, request: PageRequest, total: u64) -> Self {
        // The store already applies LIMIT; re-check so the envelope
        // invariant holds even against a misbehaving backend.
        data.truncate(request.limit as usize);
        Self {
            data,
            paging: Paging {
                limit: request.limit,
                offset: request.offset,
                total,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_params_absent() {
        let request = PageRequest::from_params(None, None);
        assert_eq!(request.limit, 10);
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn limit_is_clamped_into_range() {
        assert_eq!(PageRequest::from_params(Some(0), None).limit, 1);
        assert_eq!(PageRequest::from_params(Some(1000), None).limit, 100);
        assert_eq!(PageRequest::from_params(Some(25), Some(50)).offset, 50);
    }

    #[test]
    fn offset_never_exceeds_signed_range() {
        let request = PageRequest::from_params(None, Some(u64::MAX));
        assert_eq!(request.offset, i64::MAX as u64);
        assert!(i64::try_from(request.offset).is_ok());
    }

    #[test]
    fn page_never_exceeds_limit() {
        let request = PageRequest::from_params(Some(2), None);
        let page = Page::new(vec![1, 2, 3, 4], request, 40);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.paging.total, 40);
    }

    #[test]
    fn total_is_independent_of_offset() {
        let request = PageRequest::from_params(Some(10), Some(9000));
        let page: Page<i32> = Page::new(vec![], request, 7);
        assert!(page.data.is_empty());
        assert_eq!(page.paging.total, 7);
        assert_eq!(page.paging.offset, 9000);
    }
}
