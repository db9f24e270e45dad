//! Browser entry point
//!
//! Locates the mount points, fetches the menu document and wires the
//! filter controls once the first render succeeded.

mod dom;
mod filters;
mod source;

use std::{cell::RefCell, rc::Rc};

use anyhow::{Context, anyhow};
use menuboard_menu::{MenuPage, fetch_menu_data};
use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

pub use dom::DomSurface;
pub use source::HttpSource;

use crate::config::Config;

/// Id of an optional element whose text is TOML overriding the bundled config
pub const CONFIG_ELEMENT_ID: &str = "menu-config";

pub(crate) fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no global `document` exists"))?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot();
    }

    Ok(())
}

fn boot() {
    if let Err(err) = run() {
        web_sys::console::error_1(&JsValue::from_str(&format!("Menu failed to start: {err:#}")));
    }
}

fn run() -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .context("no global `document` exists")?;

    let config = Config::load(page_overrides(&document).as_deref())?;
    config.validate().map_err(|e| anyhow!(e))?;

    crate::observability::init_observability(
        "menuboard",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    dom::render_filter_mount(&document, &config.dom)?;
    let surface = DomSurface::locate(&document, &config.dom)?;
    dom::install_image_fallback(surface.sections())?;

    let page = Rc::new(RefCell::new(MenuPage::new(
        surface,
        config.data.fallback_image,
    )));

    spawn_local(load_menu_data(page, config.data.url));
    Ok(())
}

fn page_overrides(document: &Document) -> Option<String> {
    document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
}

async fn load_menu_data(page: Rc<RefCell<MenuPage<DomSurface>>>, url: String) {
    tracing::info!(url = %url, "Loading menu data");

    let fetched = fetch_menu_data(&HttpSource, &url).await;
    let loaded = page.borrow_mut().apply_load(fetched);

    match loaded {
        Ok(true) => {
            if let Err(err) = filters::setup_filters(&page) {
                tracing::error!(error = %err, "Unable to wire filter controls");
            }
        }
        Ok(false) => {}
        Err(err) => tracing::error!(error = %err, "Unable to render menu"),
    }
}
