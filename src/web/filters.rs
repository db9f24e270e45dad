use std::{cell::RefCell, rc::Rc};

use menuboard_menu::MenuPage;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Event;

use super::dom::DomSurface;
use super::js_error;

type SharedPage = Rc<RefCell<MenuPage<DomSurface>>>;

/// Wire the filter buttons and the optional dropdown to the menu
///
/// Called once, after the first successful render.
pub fn setup_filters(page: &SharedPage) -> anyhow::Result<()> {
    let (buttons, select) = {
        let page = page.borrow();
        let surface = page.surface();
        (surface.buttons().to_vec(), surface.select().cloned())
    };

    for (index, button) in buttons.iter().enumerate() {
        let page = Rc::clone(page);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let Ok(mut page) = page.try_borrow_mut() else {
                tracing::warn!(index, "Menu busy, filter click dropped");
                return;
            };
            if let Err(err) = page.select_filter_button(index) {
                tracing::error!(error = %err, "Unable to apply filter button");
            }
        });

        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_click.forget();
    }

    if let Some(select) = select {
        let page = Rc::clone(page);
        let target = select.clone();
        let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let value = target.value();
            let Ok(mut page) = page.try_borrow_mut() else {
                tracing::warn!(value = %value, "Menu busy, filter change dropped");
                return;
            };
            if let Err(err) = page.select_filter_option(&value) {
                tracing::error!(error = %err, "Unable to apply filter option");
            }
        });

        select
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(js_error)?;
        on_change.forget();
    }

    tracing::debug!(buttons = buttons.len(), "Filter controls wired");
    Ok(())
}
