use anyhow::{Context, anyhow};
use menuboard_menu::image::{FALLBACK_APPLIED_ATTRIBUTE, FALLBACK_ATTRIBUTE, fallback_source};
use menuboard_menu::{FILTER_ATTRIBUTE, Filter, MenuSurface, render_filter_controls};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlImageElement, HtmlSelectElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::js_error;
use crate::config::DomConfig;

const ACTIVE_CLASS: &str = "active";

/// Menu mount points on the live page
pub struct DomSurface {
    sections: HtmlElement,
    empty_state: Option<HtmlElement>,
    buttons: Vec<Element>,
    select: Option<HtmlSelectElement>,
}

impl DomSurface {
    /// Find the mount points; only the menu container is mandatory
    pub fn locate(document: &Document, dom: &DomConfig) -> anyhow::Result<Self> {
        let sections = document
            .get_element_by_id(&dom.sections_id)
            .with_context(|| format!("Menu container #{} not found", dom.sections_id))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow!("#{} is not an HTML element", dom.sections_id))?;

        let empty_state = document
            .get_element_by_id(&dom.empty_state_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        if empty_state.is_none() {
            tracing::warn!(id = %dom.empty_state_id, "Empty state panel not found");
        }

        let buttons = query_all(document, &dom.button_selector())?;

        let select = document
            .get_element_by_id(&dom.select_id)
            .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok());

        tracing::debug!(
            buttons = buttons.len(),
            has_select = select.is_some(),
            "Menu mount points located"
        );

        Ok(Self {
            sections,
            empty_state,
            buttons,
            select,
        })
    }

    pub fn sections(&self) -> &HtmlElement {
        &self.sections
    }

    pub fn buttons(&self) -> &[Element] {
        &self.buttons
    }

    pub fn select(&self) -> Option<&HtmlSelectElement> {
        self.select.as_ref()
    }
}

impl MenuSurface for DomSurface {
    fn replace_sections(&mut self, html: &str) {
        self.sections.set_inner_html(html);
    }

    fn set_empty_state_hidden(&mut self, hidden: bool) {
        if let Some(empty_state) = &self.empty_state {
            empty_state.set_hidden(hidden);
        }
    }

    fn filter_button_values(&self) -> Vec<String> {
        self.buttons
            .iter()
            .map(|button| button.get_attribute(FILTER_ATTRIBUTE).unwrap_or_default())
            .collect()
    }

    fn set_filter_button_active(&mut self, index: usize, active: bool) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };

        if let Err(err) = button.class_list().toggle_with_force(ACTIVE_CLASS, active) {
            tracing::warn!(index, error = ?err, "Unable to toggle filter button");
        }
    }

    fn set_filter_select_value(&mut self, value: &str) {
        if let Some(select) = &self.select {
            select.set_value(value);
        }
    }

    fn scroll_sections_into_view(&mut self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);

        self.sections
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn query_all(document: &Document, selector: &str) -> anyhow::Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector).map_err(js_error)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Fill an empty filter mount with controls generated from the category map
///
/// Pages that ship their own buttons, or no mount at all, are left alone.
pub fn render_filter_mount(document: &Document, dom: &DomConfig) -> anyhow::Result<()> {
    let Some(mount) = document.get_element_by_id(&dom.filters_id) else {
        return Ok(());
    };
    if mount.child_element_count() > 0 {
        return Ok(());
    }

    let html = render_filter_controls(&dom.button_class, &dom.select_id, &Filter::All)?;
    mount.set_inner_html(&html);
    tracing::debug!(id = %dom.filters_id, "Filter controls rendered");

    Ok(())
}

/// Swap card images that fail to load for their fallback, once
///
/// `error` does not bubble, so a single capture listener on the menu
/// container covers every card rendered into it. A fallback that fails in
/// turn stays broken.
pub fn install_image_fallback(sections: &HtmlElement) -> anyhow::Result<()> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(image) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        let Some(fallback) = fallback_source(
            image.get_attribute("src").as_deref(),
            image.get_attribute(FALLBACK_ATTRIBUTE).as_deref(),
            image.has_attribute(FALLBACK_APPLIED_ATTRIBUTE),
        ) else {
            return;
        };

        tracing::debug!(src = %image.src(), "Image failed to load, using fallback");
        if let Err(err) = image.set_attribute(FALLBACK_APPLIED_ATTRIBUTE, "") {
            tracing::warn!(error = ?err, "Unable to mark image fallback");
        }
        image.set_src(&fallback);
    });

    sections
        .add_event_listener_with_callback_and_bool("error", handler.as_ref().unchecked_ref(), true)
        .map_err(js_error)?;
    handler.forget();

    Ok(())
}
