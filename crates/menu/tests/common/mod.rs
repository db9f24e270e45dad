#![allow(dead_code)]

use async_trait::async_trait;
use menuboard_menu::{FetchedDocument, MenuError, MenuSource, MenuSurface};

pub const LOGO: &str = "images/logo.png";

/// In-memory page that records what the menu does to it
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub sections_html: String,
    pub empty_state_hidden: Option<bool>,
    pub buttons: Vec<(String, bool)>,
    pub select: Option<String>,
    pub scrolls: usize,
}

impl RecordingSurface {
    /// Buttons for `values` with the first one active, plus an optional dropdown
    pub fn with_controls(values: &[&str], with_select: bool) -> Self {
        Self {
            buttons: values
                .iter()
                .enumerate()
                .map(|(position, value)| (value.to_string(), position == 0))
                .collect(),
            select: with_select.then(|| values.first().copied().unwrap_or("all").to_string()),
            ..Default::default()
        }
    }

    pub fn active_buttons(&self) -> Vec<&str> {
        self.buttons
            .iter()
            .filter(|(_, active)| *active)
            .map(|(value, _)| value.as_str())
            .collect()
    }

    pub fn card_count(&self) -> usize {
        self.sections_html.matches(r#"<div class="menu-card">"#).count()
    }

    pub fn section_count(&self) -> usize {
        self.sections_html.matches("<section ").count()
    }
}

impl MenuSurface for RecordingSurface {
    fn replace_sections(&mut self, html: &str) {
        self.sections_html = html.to_string();
    }

    fn set_empty_state_hidden(&mut self, hidden: bool) {
        self.empty_state_hidden = Some(hidden);
    }

    fn filter_button_values(&self) -> Vec<String> {
        self.buttons.iter().map(|(value, _)| value.clone()).collect()
    }

    fn set_filter_button_active(&mut self, index: usize, active: bool) {
        if let Some(button) = self.buttons.get_mut(index) {
            button.1 = active;
        }
    }

    fn set_filter_select_value(&mut self, value: &str) {
        if let Some(select) = self.select.as_mut() {
            *select = value.to_string();
        }
    }

    fn scroll_sections_into_view(&mut self) {
        self.scrolls += 1;
    }
}

/// Source that answers every request with the same canned outcome
pub struct StaticSource {
    response: Result<FetchedDocument, String>,
}

impl StaticSource {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            response: Ok(FetchedDocument {
                status,
                body: body.to_string(),
            }),
        }
    }

    pub fn unreachable(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl MenuSource for StaticSource {
    async fn fetch(&self, _url: &str) -> Result<FetchedDocument, MenuError> {
        self.response.clone().map_err(MenuError::Network)
    }
}

pub const SAMPLE_MENU: &str = r#"{
    "Soups": {"items": [
        {"food-title": "Tomato Soup", "food-price": "$3"},
        {"food-title": "Rasam", "food-price": "$2", "description": "Peppery"}
    ]},
    "Chinese": {"items": [
        {"food-title": "Gobi Manchurian", "img-url": "images/gobi.jpg"}
    ]},
    "Desserts": {"items": []},
    "Breads & Parottas": {"items": [
        {"food-title": "Kothu Parotta", "food-price": "  "},
        {"description": "Chef's pick"}
    ]}
}"#;
