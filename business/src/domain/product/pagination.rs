use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Requested page window. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    /// Missing values fall back to page 1 and 10 items per page.
    /// Zero is raised to 1 for both.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).max(1),
        }
    }

    /// Rows to skip, always computed from the requested page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    pub fn take(&self) -> u64 {
        u64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    /// Requested page clamped to `last_page`.
    pub page: u32,
    pub last_page: u32,
}

impl PageMeta {
    pub fn compute(total: u64, pagination: &Pagination) -> Self {
        let last_page = total.div_ceil(u64::from(pagination.limit.max(1)));
        let last_page = u32::try_from(last_page).unwrap_or(u32::MAX);
        Self {
            total,
            page: pagination.page.min(last_page),
            last_page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_apply_defaults_when_absent() {
        let pagination = Pagination::new(None, None);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.skip(), 0);
        assert_eq!(pagination.take(), 10);
    }

    #[test]
    fn should_raise_zero_values_to_one() {
        let pagination = Pagination::new(Some(0), Some(0));
        assert_eq!(pagination, Pagination { page: 1, limit: 1 });
    }

    #[test]
    fn should_compute_meta_for_second_page() {
        let meta = PageMeta::compute(15, &Pagination::new(Some(2), Some(10)));
        assert_eq!(
            meta,
            PageMeta {
                total: 15,
                page: 2,
                last_page: 2
            }
        );
    }

    #[test]
    fn should_report_zero_pages_when_empty() {
        let meta = PageMeta::compute(0, &Pagination::default());
        assert_eq!(meta.total, 0);
        assert_eq!(meta.last_page, 0);
        assert_eq!(meta.page, 0);
    }

    #[test]
    fn should_clamp_page_but_skip_from_requested_page() {
        let pagination = Pagination::new(Some(5), Some(10));
        let meta = PageMeta::compute(15, &pagination);

        assert_eq!(meta.page, 2);
        assert_eq!(pagination.skip(), 40);
    }

    proptest! {
        #[test]
        fn last_page_covers_every_row(total in 0u64..100_000, page in 1u32..1_000, limit in 1u32..500) {
            let meta = PageMeta::compute(total, &Pagination::new(Some(page), Some(limit)));

            prop_assert!(u64::from(meta.last_page) * u64::from(limit) >= total);
            if total > 0 {
                prop_assert!(u64::from(meta.last_page - 1) * u64::from(limit) < total);
            }
            prop_assert!(meta.page <= meta.last_page);
            prop_assert!(meta.page <= page);
        }
    }
}
