use crate::meta::Meta;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Куда вести роутер: имя маршрута, путь, параметры и query.
///
/// Карты отсортированы, поэтому сериализация детерминирована и
/// пригодна для вычисления id таба.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteTarget {
    pub name: Option<String>,
    pub path: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    #[serde(default)]
    pub query: BTreeMap<String, String>,
}

impl RouteTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Путь вместе с query string.
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query_string = serde_qs::to_string(&self.query).unwrap_or_default();
        format!("{}?{}", self.path, query_string)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    Push,
    Replace,
}

/// Состояние маршрута после завершённой навигации.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteLocation {
    pub route: RouteTarget,
    #[serde(default)]
    pub meta: Meta,
    pub redirected_from: Option<String>,
}

impl RouteLocation {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            route: RouteTarget::new(path),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.route.name = Some(name.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route.params.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route.query.insert(key.into(), value.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn redirected_from(mut self, path: impl Into<String>) -> Self {
        self.redirected_from = Some(path.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.route.name.as_deref()
    }

    pub fn full_path(&self) -> String {
        self.route.full_path()
    }
}
