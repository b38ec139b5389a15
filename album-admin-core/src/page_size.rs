//! Page-size selection: a fixed enumerated option set filtered by free-text
//! input. The selector never holds the authoritative page size — that lives
//! in the navigation state — it only models the combo-input interaction so a
//! UI widget cannot fork its own copy of the selection.

use crate::pagination::PAGE_SIZE_OPTIONS;

pub fn format_page_size(size: u32) -> String {
    format!("{} / page", size)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeSelector {
    selected: u32,
    query: String,
    open: bool,
    show_display_value: bool,
}

impl PageSizeSelector {
    pub fn new(selected: u32) -> Self {
        PageSizeSelector {
            selected,
            query: String::new(),
            open: false,
            show_display_value: true,
        }
    }

    pub fn selected(&self) -> u32 {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Text shown in the input box: the formatted selection, or the raw
    /// query while the user is typing.
    pub fn display_value(&self) -> String {
        if self.show_display_value {
            format_page_size(self.selected)
        } else {
            self.query.clone()
        }
    }

    pub fn placeholder(&self) -> String {
        format_page_size(self.selected)
    }

    /// Focusing clears the input and opens the option list, ready to filter.
    pub fn focus(&mut self) {
        self.query.clear();
        self.show_display_value = false;
        self.open = true;
    }

    /// Blurring with nothing typed restores the formatted display string.
    pub fn blur(&mut self) {
        if self.query.is_empty() {
            self.show_display_value = true;
        }
        self.open = false;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
        self.show_display_value = false;
        self.open = true;
    }

    /// Options matching the query by substring on the stringified size; an
    /// empty query shows all options.
    pub fn filtered_options(&self) -> Vec<u32> {
        if self.query.is_empty() {
            return PAGE_SIZE_OPTIONS.to_vec();
        }
        PAGE_SIZE_OPTIONS
            .iter()
            .copied()
            .filter(|size| size.to_string().contains(&self.query))
            .collect()
    }

    /// True when the user typed something that matches no option; the widget
    /// shows an empty-state message instead of the option list.
    pub fn is_empty_state(&self) -> bool {
        !self.query.is_empty() && self.filtered_options().is_empty()
    }

    /// Selecting a value closes the option list and restores the formatted
    /// display string.
    pub fn select(&mut self, size: u32) {
        self.selected = size;
        self.query.clear();
        self.show_display_value = true;
        self.open = false;
    }

    /// Keep the selector in step with an externally changed page size (the
    /// navigation state is the source of truth).
    pub fn sync_selected(&mut self, size: u32) {
        self.selected = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_shows_all_options() {
        let selector = PageSizeSelector::new(10);
        assert_eq!(selector.filtered_options(), vec![10, 20, 50, 100]);
        assert!(!selector.is_empty_state());
    }

    #[test]
    fn test_prefix_and_substring_filtering() {
        let mut selector = PageSizeSelector::new(10);
        selector.set_query("1".to_string());
        assert_eq!(selector.filtered_options(), vec![10, 100]);
        selector.set_query("0".to_string());
        assert_eq!(selector.filtered_options(), vec![10, 20, 50, 100]);
        selector.set_query("00".to_string());
        assert_eq!(selector.filtered_options(), vec![100]);
    }

    #[test]
    fn test_no_match_is_empty_state() {
        let mut selector = PageSizeSelector::new(10);
        selector.set_query("7".to_string());
        assert!(selector.filtered_options().is_empty());
        assert!(selector.is_empty_state());
    }

    #[test]
    fn test_select_closes_and_restores_display() {
        let mut selector = PageSizeSelector::new(10);
        selector.focus();
        selector.set_query("2".to_string());
        assert!(selector.is_open());
        assert_eq!(selector.display_value(), "2");

        selector.select(20);
        assert!(!selector.is_open());
        assert_eq!(selector.selected(), 20);
        assert_eq!(selector.display_value(), "20 / page");
    }

    #[test]
    fn test_blur_without_query_restores_display() {
        let mut selector = PageSizeSelector::new(50);
        selector.focus();
        assert_eq!(selector.display_value(), "");
        selector.blur();
        assert_eq!(selector.display_value(), "50 / page");
        assert!(!selector.is_open());
    }

    #[test]
    fn test_sync_selected_follows_navigation_state() {
        let mut selector = PageSizeSelector::new(10);
        selector.sync_selected(100);
        assert_eq!(selector.selected(), 100);
        assert_eq!(selector.display_value(), "100 / page");
    }
}
