//! Declarative markup for the menu
//!
//! Menu data is first mapped into plain view structs (`MenuView`,
//! `MenuSection`, `MenuCard`) and then rendered through askama templates.
//! Nothing here touches the DOM.

use askama::Template;

use crate::category::categories;
use crate::filter::Filter;
use crate::model::{MenuData, MenuItem};
use crate::slug::category_slug;

pub const UNTITLED_ITEM: &str = "Untitled Item";
pub const DEFAULT_IMAGE_ALT: &str = "Food item";
pub const ALL_LABEL: &str = "All";

/// One rendered dish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCard {
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub fallback_src: String,
    pub price: Option<String>,
    pub description: Option<String>,
}

#[derive(Template)]
#[template(path = "card.html")]
struct CardTemplate<'a> {
    card: &'a MenuCard,
}

impl MenuCard {
    pub fn render(&self) -> askama::Result<String> {
        CardTemplate { card: self }.render()
    }
}

/// Build the card for one item
///
/// Empty title and image URL count as absent. Price and description are
/// kept verbatim, but only when they contain something besides whitespace.
pub fn create_menu_item_card(item: &MenuItem, fallback_image: &str) -> MenuCard {
    let title = non_empty(&item.title);

    MenuCard {
        title: title.unwrap_or(UNTITLED_ITEM).to_string(),
        image_src: non_empty(&item.image_url)
            .unwrap_or(fallback_image)
            .to_string(),
        image_alt: title.unwrap_or(DEFAULT_IMAGE_ALT).to_string(),
        fallback_src: fallback_image.to_string(),
        price: non_blank(&item.price),
        description: non_blank(&item.description),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub name: String,
    pub slug: String,
    pub cards: Vec<MenuCard>,
}

/// Everything visible in the menu container for one filter
#[derive(Debug, Clone, Default, Template)]
#[template(path = "sections.html")]
pub struct MenuView {
    pub sections: Vec<MenuSection>,
}

impl MenuView {
    pub fn build(menu: &MenuData, filter: &Filter, fallback_image: &str) -> Self {
        let names: Vec<&str> = match filter {
            Filter::All => menu.category_names().collect(),
            Filter::Category(_) => filter.category_name().into_iter().collect(),
        };

        let sections = names
            .into_iter()
            .filter_map(|name| {
                let items = menu.category(name)?.items();
                if items.is_empty() {
                    return None;
                }

                Some(MenuSection {
                    name: name.to_string(),
                    slug: category_slug(name),
                    cards: items
                        .iter()
                        .map(|item| create_menu_item_card(item, fallback_image))
                        .collect(),
                })
            })
            .collect();

        Self { sections }
    }

    pub fn has_items(&self) -> bool {
        !self.sections.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|section| section.cards.len()).sum()
    }
}

/// Replacement content for the menu container when loading fails
#[derive(Template)]
#[template(path = "load_error.html")]
pub struct LoadErrorPanel {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Filter buttons plus the compact dropdown, both drawn from the category map
#[derive(Template)]
#[template(path = "filter_controls.html")]
pub struct FilterControls {
    pub button_class: String,
    pub select_id: String,
    pub options: Vec<FilterOption>,
}

impl FilterControls {
    pub fn new(button_class: &str, select_id: &str, active: &Filter) -> Self {
        let options = std::iter::once((Filter::ALL, ALL_LABEL))
            .chain(categories())
            .map(|(value, label)| FilterOption {
                value,
                label,
                active: value == active.as_value(),
            })
            .collect();

        Self {
            button_class: button_class.to_string(),
            select_id: select_id.to_string(),
            options,
        }
    }
}

/// Markup for the filter controls with `active` preselected
pub fn render_filter_controls(
    button_class: &str,
    select_id: &str,
    active: &Filter,
) -> askama::Result<String> {
    FilterControls::new(button_class, select_id, active).render()
}
