//! Менеджер сессии табов.
//!
//! - `registry` - упорядоченный список табов и активный таб
//! - `title` - вычисление и перевод заголовков
//! - `keep_alive` - какие представления табов держать смонтированными
//! - `session` - политика создания табов, связывает реестр и кэш
//! - `bridge` - передача запросов навигации во внешний роутер

pub mod bridge;
pub mod config;
pub mod error;
pub mod identity;
pub mod keep_alive;
pub mod registry;
pub mod session;
pub mod title;

pub use bridge::{NavOutcome, NavigationBridge, Router};
pub use config::{load_config, TabsConfig};
pub use error::NavigationError;
pub use identity::{tab_id, IdStrategy};
pub use keep_alive::{KeepAliveTracker, Remount};
pub use registry::{AddOptions, NavRequest, TabRegistry, Upsert};
pub use session::TabSession;
pub use title::{resolve_title, retranslate, ResolvedTitle, Translator};
