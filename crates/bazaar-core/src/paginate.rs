//! # Paginated View
//!
//! Slices a filtered variant list into pages.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  paginate(filtered, page_index, page_size)                              │
//! │                                                                         │
//! │  • page_index is 1-based                                                │
//! │  • out-of-range requests CLAMP to the nearest valid page, never error   │
//! │  • page_count = ceil(len / page_size), 0 for an empty list              │
//! │  • the result BORROWS the input: a slice, not a copy                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Variant;

// =============================================================================
// Constants
// =============================================================================

/// Items shown per page unless the host configures otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

// =============================================================================
// Page View
// =============================================================================

/// One page of a filtered list, plus the metadata the pager widget needs.
///
/// Borrows the filtered list; downstream must not mutate through it (and
/// cannot — the slice is shared). Owned snapshots for the presentation
/// boundary are the engine's job.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// The variants on the current page.
    pub items: &'a [Variant],

    /// Total number of pages. Zero when the list is empty.
    pub page_count: usize,

    /// The page actually served, after clamping. 1 when the list is empty.
    pub current_page: usize,

    /// Total items across all pages ("Showing 20 of 45").
    pub total_items: usize,
}

/// Slices `filtered` into its `page_index`-th page of `page_size` items.
///
/// A `page_size` of zero is served as 1 (see
/// [`crate::validation::validate_page_size`] for hosts that prefer to
/// reject it up front).
///
/// ## Example
/// ```rust
/// use bazaar_core::paginate::paginate;
///
/// let view = paginate(&[], 3, 20);
/// assert_eq!(view.page_count, 0);
/// assert!(view.items.is_empty());
/// ```
pub fn paginate(filtered: &[Variant], page_index: usize, page_size: usize) -> PageView<'_> {
    let page_size = page_size.max(1);
    let total_items = filtered.len();
    let page_count = total_items.div_ceil(page_size);

    let current_page = if page_count == 0 {
        1
    } else {
        page_index.clamp(1, page_count)
    };

    let start = (current_page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    PageView {
        items: &filtered[start..end],
        page_count,
        current_page,
        total_items,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(n: usize) -> Vec<Variant> {
        (0..n)
            .map(|i| Variant {
                id: format!("v-{i}"),
                name: format!("Variant {i}"),
                regular_price_cents: 1000 + i as i64,
                category_id: None,
                subcategory_id: None,
                brand_id: None,
                stock_quantity: 1,
                promotion: None,
                reviews: vec![],
                images: vec![],
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        let view = paginate(&[], 1, 20);
        assert_eq!(view.page_count, 0);
        assert_eq!(view.current_page, 1);
        assert!(view.items.is_empty());
        assert_eq!(view.total_items, 0);
    }

    #[test]
    fn test_last_partial_page() {
        let list = variants(45);
        let view = paginate(&list, 3, 20);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.items[0].id, "v-40");
        assert_eq!(view.total_items, 45);
    }

    #[test]
    fn test_exact_multiple() {
        let list = variants(40);
        let view = paginate(&list, 2, 20);
        assert_eq!(view.page_count, 2);
        assert_eq!(view.items.len(), 20);
        assert_eq!(view.items[0].id, "v-20");
    }

    #[test]
    fn test_overflow_clamps_to_last_page() {
        let list = variants(45);
        let view = paginate(&list, 99, 20);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.items.len(), 5);
    }

    #[test]
    fn test_underflow_clamps_to_first_page() {
        let list = variants(45);
        let view = paginate(&list, 0, 20);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.items.len(), 20);
        assert_eq!(view.items[0].id, "v-0");
    }

    #[test]
    fn test_zero_page_size_served_as_one() {
        let list = variants(3);
        let view = paginate(&list, 2, 0);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, "v-1");
    }

    #[test]
    fn test_single_page_fits_all() {
        let list = variants(2);
        let view = paginate(&list, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.items.len(), 2);
    }
}
