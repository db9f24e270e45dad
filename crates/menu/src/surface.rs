/// Attribute carrying a filter button's identifier
pub const FILTER_ATTRIBUTE: &str = "data-filter";

/// The page elements the menu writes to
///
/// Filter buttons are addressed by their position in document order.
/// A page without the compact dropdown treats `set_filter_select_value`
/// as a no-op.
pub trait MenuSurface {
    /// Replace everything inside the menu container
    fn replace_sections(&mut self, html: &str);

    fn set_empty_state_hidden(&mut self, hidden: bool);

    /// `data-filter` value of every filter button, in document order
    fn filter_button_values(&self) -> Vec<String>;

    fn set_filter_button_active(&mut self, index: usize, active: bool);

    fn set_filter_select_value(&mut self, value: &str);

    fn scroll_sections_into_view(&mut self);
}
