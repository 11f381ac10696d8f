//! View projection
//!
//! Pure derivation of the visible catalog page from the live catalog plus
//! transient UI state. Nothing here touches caches or the network, so the
//! projector is deterministic and testable in isolation.

pub mod session;

use serde::{Deserialize, Serialize};

use crate::models::{CatalogItem, ALL_CATEGORIES};

/// Textures per page; 60 fills complete rows at the grid's common column
/// counts, so only the final page can end on a partial row
pub const PAGE_SIZE: usize = 60;

/// Maximum number of page buttons shown in the pagination controls
pub const PAGE_WINDOW: usize = 5;

/// Transient UI state driving the projection; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub selected_category: String,
    /// 1-indexed
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            current_page: 1,
        }
    }
}

impl ViewState {
    /// Changing the search term resets to page 1 so a stale page index on a
    /// shrunk result set is never observable
    pub fn set_search<S: Into<String>>(&mut self, term: S) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Changing the category filter resets to page 1, same as the search term
    pub fn set_category<S: Into<String>>(&mut self, category: S) {
        self.selected_category = category.into();
        self.current_page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

/// One projected page of the filtered catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    /// Page numbers to render as pagination buttons
    pub page_window: Vec<usize>,
}

/// Project the catalog into the visible slice for the given view state
pub fn project(items: &[CatalogItem], view: &ViewState) -> CatalogPage {
    let term = view.search_term.trim().to_lowercase();

    let filtered: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| matches_search(item, &term) && matches_category(item, &view.selected_category))
        .collect();

    let total_items = filtered.len();
    // An empty result set still renders as "page 1 / 1" with an empty grid
    let total_pages = total_items.div_ceil(PAGE_SIZE).max(1);

    let start = (view.current_page - 1).saturating_mul(PAGE_SIZE);
    let page_items = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    CatalogPage {
        items: page_items,
        total_items,
        total_pages,
        page: view.current_page,
        page_window: page_window(view.current_page, total_pages),
    }
}

/// Case-insensitive substring match on name, id, or display code; an empty
/// term matches everything
fn matches_search(item: &CatalogItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(term)
        || item.id.to_lowercase().contains(term)
        || item.code.to_lowercase().contains(term)
}

fn matches_category(item: &CatalogItem, selected: &str) -> bool {
    selected == ALL_CATEGORIES || item.category == selected
}

/// Page numbers for the pagination controls: at most [`PAGE_WINDOW`] buttons
/// centered on the current page, clamped at both ends
fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).collect();
    }

    let first = if current <= 3 {
        1
    } else if current >= total_pages - 2 {
        total_pages - (PAGE_WINDOW - 1)
    } else {
        current - 2
    };

    (first..first + PAGE_WINDOW).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNCATEGORIZED;

    fn item(id: &str, name: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            file_name: format!("{}.png", id),
            image_path: format!("/resources/textures/{}.png", id),
            code: format!("TXC-{}", id.to_uppercase()),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    fn catalog_of(count: usize) -> Vec<CatalogItem> {
        (1..=count)
            .map(|i| item(&format!("tx{:04}", i), &format!("Texture {}", i), UNCATEGORIZED))
            .collect()
    }

    #[test]
    fn test_filter_matches_name_id_and_code() {
        let items = vec![
            item("a", "Sword", "Weapons"),
            item("b", "Shield", "Armor"),
            item("txc-b_lookalike", "Helm", "Armor"),
        ];

        // Name match, case-insensitive
        let mut view = ViewState::default();
        view.set_search("shi");
        let page = project(&items, &view);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "b");

        // Id match
        view.set_search("LOOKALIKE");
        let page = project(&items, &view);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "txc-b_lookalike");

        // Code match
        view.set_search("txc-a");
        let page = project(&items, &view);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "a");

        // Every filtered item actually contains the term somewhere
        view.set_search("e");
        for matched in project(&items, &view).items {
            let term_found = matched.name.to_lowercase().contains('e')
                || matched.id.to_lowercase().contains('e')
                || matched.code.to_lowercase().contains('e');
            assert!(term_found);
        }
    }

    #[test]
    fn test_category_filter_and_all_sentinel() {
        let items = vec![
            item("a", "Sword", "Weapons"),
            item("b", "Shield", "Armor"),
        ];

        let mut view = ViewState::default();
        view.set_category("Armor");
        let page = project(&items, &view);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "b");

        view.set_category(ALL_CATEGORIES);
        assert_eq!(project(&items, &view).items.len(), 2);
    }

    #[test]
    fn test_pagination_125_items() {
        let items = catalog_of(125);
        let mut view = ViewState::default();

        let page1 = project(&items, &view);
        assert_eq!(page1.total_items, 125);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.items.len(), 60);
        assert_eq!(page1.items[0].id, "tx0001");

        view.set_page(2);
        let page2 = project(&items, &view);
        assert_eq!(page2.items.len(), 60);
        assert_eq!(page2.items[0].id, "tx0061");

        view.set_page(3);
        let page3 = project(&items, &view);
        assert_eq!(page3.items.len(), 5);
        assert_eq!(page3.items[0].id, "tx0121");
        assert_eq!(page3.items[4].id, "tx0125");
    }

    #[test]
    fn test_pages_concatenate_to_exact_filtered_set() {
        let items = catalog_of(137);
        let mut view = ViewState::default();

        let total_pages = project(&items, &view).total_pages;
        let mut seen = Vec::new();
        for page in 1..=total_pages {
            view.set_page(page);
            seen.extend(project(&items, &view).items);
        }

        assert_eq!(seen.len(), items.len());
        assert_eq!(seen, items);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut view = ViewState::default();
        view.set_page(7);
        view.set_search("sword");
        assert_eq!(view.current_page, 1);

        view.set_page(4);
        view.set_category("Weapons");
        assert_eq!(view.current_page, 1);
    }

    #[test]
    fn test_empty_result_set_is_one_empty_page() {
        let items = vec![item("a", "Sword", "Weapons")];
        let mut view = ViewState::default();
        view.set_search("no such texture");

        let page = project(&items, &view);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.page_window, vec![1]);
    }

    #[test]
    fn test_page_past_end_yields_empty_slice() {
        let items = catalog_of(5);
        let mut view = ViewState::default();
        view.set_page(9);

        let page = project(&items, &view);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_page_window_clamps_at_both_ends() {
        // Short catalogs show every page
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 5), vec![1, 2, 3, 4, 5]);

        // Near the start the window pins to [1..5]
        assert_eq!(page_window(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 9), vec![1, 2, 3, 4, 5]);

        // Mid-range the window centers on the current page
        assert_eq!(page_window(5, 9), vec![3, 4, 5, 6, 7]);

        // Near the end the window pins to the last five pages
        assert_eq!(page_window(8, 9), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(9, 9), vec![5, 6, 7, 8, 9]);
    }
}
