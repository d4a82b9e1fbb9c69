//! Derived table views.
//!
//! Pure recomputation of the search-filtered, paginated product table from
//! the store's product snapshot and the transient table parameters. Nothing
//! here holds state: every value is recomputed on demand from its inputs.

use crate::catalog::Product;

/// One page of the filtered product table, plus the totals the table
/// chrome displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<Product>,
    pub total_results: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
}

/// Case-insensitive substring match of `search` against product names.
/// An empty search term matches everything.
pub fn filter_by_name(products: &[Product], search: &str) -> Vec<Product> {
    let term = search.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Slice one page out of a filtered product list.
///
/// An out-of-range `page_index` yields an empty page rather than clamping;
/// the table parameter reducer resets the index on the paths that could
/// strand it (search and page-size changes).
pub fn paginate(filtered: &[Product], page_index: usize, page_size: usize) -> Vec<Product> {
    let start = page_index.saturating_mul(page_size);
    if start >= filtered.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(filtered.len());
    filtered[start..end].to_vec()
}

/// Number of pages the filtered set spans at the given page size.
pub fn total_pages(total_results: usize, page_size: usize) -> usize {
    total_results.div_ceil(page_size.max(1))
}

/// Recompute the full page view from the product snapshot and the table
/// parameters.
pub fn page_view(
    products: &[Product],
    search: &str,
    page_index: usize,
    page_size: usize,
) -> PageView {
    let filtered = filter_by_name(products, search);
    let total_results = filtered.len();
    PageView {
        rows: paginate(&filtered, page_index, page_size),
        total_results,
        total_pages: total_pages(total_results, page_size),
        page_index,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(id: &str, name: &str) -> Product {
        let release = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: "ten characters or more".to_string(),
            logo: "logo.png".to_string(),
            date_release: release,
            date_revision: crate::catalog::revision_for(release),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("CARD1", "Visa Gold"),
            product("CARD2", "Visa Black"),
            product("ACC1", "Savings"),
        ]
    }

    #[test]
    fn empty_search_matches_everything() {
        let products = sample();
        assert_eq!(filter_by_name(&products, ""), products);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let products = sample();
        let hits = filter_by_name(&products, "vIsA");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("visa")));
    }

    #[test]
    fn filtered_is_subset_of_products() {
        let products = sample();
        for hit in filter_by_name(&products, "a") {
            assert!(products.contains(&hit));
        }
    }

    #[test]
    fn second_page_of_size_one_is_second_element() {
        let filtered = vec![product("A11", "First"), product("B22", "Second")];
        let page = paginate(&filtered, 1, 1);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, "B22");
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let filtered = sample();
        assert!(paginate(&filtered, 5, 10).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn page_view_combines_filter_and_slice() {
        let products = sample();
        let view = page_view(&products, "visa", 0, 1);
        assert_eq!(view.total_results, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, "CARD1");
    }
}
