//! Метаданные маршрута.
//!
//! `Meta` - открытая карта ключ/значение. Ниже перечислены ключи, которые
//! читает система табов; все остальные ключи передаются как есть.

use serde_json::{Map, Value};

pub type Meta = Map<String, Value>;

/// Литеральный заголовок или ключ локализации (если похож на ключ).
pub const TITLE: &str = "title";
/// Явный ключ локализации заголовка.
pub const TITLE_KEY: &str = "titleKey";
pub const ICON: &str = "icon";
/// `true` - маршрут никогда не открывает таб.
pub const NO_TAB: &str = "noTab";
pub const SKIP_TAB: &str = "skipTab";
/// `false` - маршрут не добавляется в табы.
pub const ADD_TO_TABS: &str = "addToTabs";
/// `true` - таб создаётся закреплённым (не закрываемым).
pub const PIN_TAB: &str = "pinTab";
/// `"blank"` - страницы без оболочки (логин, ошибки).
pub const LAYOUT: &str = "layout";
pub const MODIFIED: &str = "modified";

pub fn meta_str<'a>(meta: &'a Meta, key: &str) -> Option<&'a str> {
    meta.get(key).and_then(Value::as_str)
}

pub fn meta_flag(meta: &Meta, key: &str) -> Option<bool> {
    meta.get(key).and_then(Value::as_bool)
}

/// Непустая строка по ключу.
pub fn meta_non_empty<'a>(meta: &'a Meta, key: &str) -> Option<&'a str> {
    meta_str(meta, key).filter(|s| !s.is_empty())
}
