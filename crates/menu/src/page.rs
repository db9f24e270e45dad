use askama::Template;

use crate::error::{MenuError, Result};
use crate::filter::Filter;
use crate::model::MenuData;
use crate::source::{MenuSource, fetch_menu_data};
use crate::surface::MenuSurface;
use crate::view::{LoadErrorPanel, MenuView};

/// Menu state shared by the renderer and the filter controls
#[derive(Debug, Clone, Default)]
pub struct MenuContext {
    pub menu: MenuData,
    pub filter: Filter,
}

/// A menu bound to the page elements it renders into
pub struct MenuPage<S> {
    context: MenuContext,
    surface: S,
    fallback_image: String,
}

impl<S: MenuSurface> MenuPage<S> {
    pub fn new(surface: S, fallback_image: impl Into<String>) -> Self {
        Self {
            context: MenuContext::default(),
            surface,
            fallback_image: fallback_image.into(),
        }
    }

    pub fn context(&self) -> &MenuContext {
        &self.context
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Fetch the menu document and apply the outcome
    ///
    /// Returns `true` once the menu is rendered and filter controls can be
    /// wired up.
    pub async fn load<M>(&mut self, source: &M, url: &str) -> Result<bool>
    where
        M: MenuSource + ?Sized,
    {
        let fetched = fetch_menu_data(source, url).await;
        self.apply_load(fetched)
    }

    /// Install freshly fetched menu data, or show the error panel
    ///
    /// Load failures are handled here and reported as `Ok(false)`; only a
    /// template failure comes back as an error.
    pub fn apply_load(&mut self, fetched: Result<MenuData>) -> Result<bool> {
        match fetched {
            Ok(menu) => {
                tracing::info!(
                    categories = menu.category_names().count(),
                    items = menu.total_items(),
                    "Menu data loaded"
                );
                self.context.menu = menu;
                self.render_menu()?;
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, "Error loading menu data");
                self.show_load_error(&err)?;
                Ok(false)
            }
        }
    }

    fn show_load_error(&mut self, err: &MenuError) -> Result<()> {
        let panel = LoadErrorPanel {
            message: err.to_string(),
        };
        self.surface.replace_sections(&panel.render()?);
        Ok(())
    }

    /// Rebuild the menu container for the current filter
    pub fn render_menu(&mut self) -> Result<()> {
        let view = MenuView::build(
            &self.context.menu,
            &self.context.filter,
            &self.fallback_image,
        );

        tracing::debug!(
            filter = self.context.filter.as_value(),
            sections = view.sections.len(),
            cards = view.card_count(),
            "Rendering menu"
        );

        self.surface.replace_sections(&view.render()?);
        self.surface.set_empty_state_hidden(view.has_items());
        Ok(())
    }

    /// Handle activation of the filter button at `index`
    pub fn select_filter_button(&mut self, index: usize) -> Result<()> {
        let buttons = self.surface.filter_button_values();
        let Some(value) = buttons.get(index) else {
            tracing::warn!(index, "Filter button index out of range");
            return Ok(());
        };

        for position in 0..buttons.len() {
            self.surface.set_filter_button_active(position, position == index);
        }

        self.context.filter = Filter::from(value.as_str());
        self.surface.set_filter_select_value(value);
        tracing::debug!(filter = value.as_str(), "Filter button selected");

        self.render_menu()?;
        self.surface.scroll_sections_into_view();
        Ok(())
    }

    /// Handle a new value picked in the compact dropdown
    pub fn select_filter_option(&mut self, value: &str) -> Result<()> {
        self.context.filter = Filter::from(value);
        self.surface.set_filter_select_value(value);

        for (position, button_value) in self.surface.filter_button_values().iter().enumerate() {
            self.surface
                .set_filter_button_active(position, button_value == value);
        }
        tracing::debug!(filter = value, "Filter option selected");

        self.render_menu()?;
        self.surface.scroll_sections_into_view();
        Ok(())
    }
}
