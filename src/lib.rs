pub mod config;
pub mod observability;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::Config;
pub use menuboard_menu as menu;
