//! Tab content
//!
//! Содержит:
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг имени маршрута таба -> View

pub mod page;
pub mod registry;

pub use page::TabPage;
