//! Keeping filter buttons, dropdown and rendered sections in step

mod common;

use common::{LOGO, RecordingSurface, SAMPLE_MENU};
use menuboard_menu::category::categories;
use menuboard_menu::{FILTER_ATTRIBUTE, Filter, MenuData, MenuPage, render_filter_controls};

const CONTROLS: [&str; 5] = ["all", "soups", "chinese", "desserts", "breads-parottas"];

fn page_with_controls(with_select: bool) -> MenuPage<RecordingSurface> {
    let surface = RecordingSurface::with_controls(&CONTROLS, with_select);
    let mut page = MenuPage::new(surface, LOGO);
    page.apply_load(Ok(MenuData::from_json(SAMPLE_MENU).unwrap()))
        .unwrap();
    page
}

#[test]
fn test_button_activation_syncs_dropdown_and_renders() {
    let mut page = page_with_controls(true);

    page.select_filter_button(2).unwrap();

    let surface = page.surface();
    assert_eq!(page.context().filter, Filter::from("chinese"));
    assert_eq!(surface.active_buttons(), vec!["chinese"]);
    assert_eq!(surface.select.as_deref(), Some("chinese"));
    assert_eq!(surface.card_count(), 1);
    assert!(surface.sections_html.contains("Gobi Manchurian"));
    assert_eq!(surface.scrolls, 1);
}

#[test]
fn test_dropdown_change_syncs_buttons_and_renders() {
    let mut page = page_with_controls(true);

    page.select_filter_option("breads-parottas").unwrap();

    let surface = page.surface();
    assert_eq!(page.context().filter, Filter::from("breads-parottas"));
    assert_eq!(surface.active_buttons(), vec!["breads-parottas"]);
    assert_eq!(surface.card_count(), 2);
    assert!(surface.sections_html.contains(r#"data-category="breads--parottas""#));
    assert_eq!(surface.scrolls, 1);
}

#[test]
fn test_controls_agree_after_any_sequence() {
    let mut page = page_with_controls(true);

    page.select_filter_button(1).unwrap();
    page.select_filter_option("all").unwrap();
    page.select_filter_button(3).unwrap();
    page.select_filter_option("chinese").unwrap();

    let surface = page.surface();
    let current = page.context().filter.as_value();
    assert_eq!(current, "chinese");
    assert_eq!(surface.active_buttons(), vec![current]);
    assert_eq!(surface.select.as_deref(), Some(current));
    assert_eq!(surface.scrolls, 4);
}

#[test]
fn test_back_to_all_restores_every_item() {
    let mut page = page_with_controls(true);

    page.select_filter_button(1).unwrap();
    assert_eq!(page.surface().card_count(), 2);

    page.select_filter_button(0).unwrap();
    assert_eq!(page.context().filter, Filter::All);
    assert_eq!(page.surface().card_count(), 5);
    assert_eq!(page.surface().select.as_deref(), Some("all"));
}

#[test]
fn test_missing_dropdown_is_tolerated() {
    let mut page = page_with_controls(false);

    page.select_filter_button(1).unwrap();

    assert_eq!(page.surface().select, None);
    assert_eq!(page.surface().active_buttons(), vec!["soups"]);
    assert_eq!(page.surface().card_count(), 2);
}

#[test]
fn test_dropdown_value_without_matching_button() {
    let mut page = page_with_controls(true);

    page.select_filter_option("beverages").unwrap();

    assert!(page.surface().active_buttons().is_empty());
    assert_eq!(page.surface().card_count(), 0);
    assert_eq!(page.surface().empty_state_hidden, Some(false));
}

#[test]
fn test_out_of_range_button_changes_nothing() {
    let mut page = page_with_controls(true);

    page.select_filter_button(42).unwrap();

    assert_eq!(page.context().filter, Filter::All);
    assert_eq!(page.surface().active_buttons(), vec!["all"]);
    assert_eq!(page.surface().scrolls, 0);
}

/// `data-filter` values of the generated controls, in document order
fn generated_button_values() -> Vec<String> {
    let html = render_filter_controls("filter-btn", "categorySelect", &Filter::All).unwrap();
    let marker = format!(r#"class="filter-btn" {FILTER_ATTRIBUTE}=""#);
    let active_marker = format!(r#"class="filter-btn active" {FILTER_ATTRIBUTE}=""#);

    html.lines()
        .filter_map(|line| {
            let start = line
                .find(&marker)
                .map(|at| at + marker.len())
                .or_else(|| line.find(&active_marker).map(|at| at + active_marker.len()))?;
            let rest = &line[start..];
            Some(rest[..rest.find('"')?].to_string())
        })
        .collect()
}

#[test]
fn test_generated_buttons_select_their_own_category() {
    let values = generated_button_values();
    assert_eq!(values.len(), categories().count() + 1);
    assert_eq!(values[0], "all");

    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    let mut page = MenuPage::new(RecordingSurface::with_controls(&refs, true), LOGO);
    page.apply_load(Ok(MenuData::from_json(SAMPLE_MENU).unwrap()))
        .unwrap();

    for (index, (id, name)) in categories().enumerate() {
        page.select_filter_button(index + 1).unwrap();

        assert_eq!(page.context().filter.as_value(), id);
        assert_eq!(page.context().filter.category_name(), Some(name));
        assert_eq!(page.surface().active_buttons(), vec![id]);
        assert_eq!(page.surface().select.as_deref(), Some(id));
    }
}

#[test]
fn test_button_without_filter_value_shows_nothing() {
    let surface = RecordingSurface::with_controls(&["all", ""], true);
    let mut page = MenuPage::new(surface, LOGO);
    page.apply_load(Ok(MenuData::from_json(SAMPLE_MENU).unwrap()))
        .unwrap();

    page.select_filter_button(1).unwrap();

    assert_eq!(page.surface().card_count(), 0);
    assert_eq!(page.surface().empty_state_hidden, Some(false));
    assert_eq!(page.surface().active_buttons(), vec![""]);
}
