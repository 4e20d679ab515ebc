//! Общие типы для табов: цель навигации, описание маршрута, сам таб.
//!
//! Crate не зависит ни от UI-фреймворка, ни от роутера, поэтому его
//! используют и ядро `tab-session`, и `frontend`.

pub mod meta;
pub mod route;
pub mod tab;

pub use meta::Meta;
pub use route::{NavigationMode, RouteLocation, RouteTarget};
pub use tab::Tab;
