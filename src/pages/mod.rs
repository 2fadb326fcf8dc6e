//! Generated HTML pages.

mod config_page;

pub use config_page::render_config_page;
