//! Restaurant menu rendering
//!
//! Turns a menu document (category name -> items) into grouped card
//! sections and keeps the filter buttons, the compact dropdown and the
//! rendered sections in step. The page itself is reached only through
//! [`MenuSurface`] and the document through [`MenuSource`].

pub mod category;
mod error;
pub mod filter;
pub mod image;
pub mod model;
pub mod page;
pub mod slug;
pub mod source;
pub mod surface;
pub mod view;

pub use error::*;
pub use filter::Filter;
pub use image::fallback_source;
pub use model::{Category, MenuData, MenuItem};
pub use page::{MenuContext, MenuPage};
pub use source::{FetchedDocument, MenuSource, fetch_menu_data};
pub use surface::{FILTER_ATTRIBUTE, MenuSurface};
pub use view::{MenuCard, MenuView, create_menu_item_card, render_filter_controls};
