//! Вычисление id таба по цели навигации.

use contracts::RouteTarget;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Имя маршрута + параметры + query
    #[default]
    Logical,
    /// Полный путь с query string
    FullPath,
}

fn serialize_map(map: &BTreeMap<String, String>) -> String {
    if map.is_empty() {
        return String::new();
    }
    serde_json::to_string(map).unwrap_or_default()
}

/// Стабильный id для логической точки назначения.
///
/// Для безымянных маршрутов вместо имени используется путь.
pub fn tab_id(target: &RouteTarget, strategy: IdStrategy) -> String {
    match strategy {
        IdStrategy::Logical => {
            let name = target.name.as_deref().unwrap_or(&target.path);
            format!(
                "{}-{}-{}",
                name,
                serialize_map(&target.params),
                serialize_map(&target.query)
            )
        }
        IdStrategy::FullPath => target.full_path(),
    }
}
