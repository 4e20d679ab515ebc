//! Таблица маршрутов: путь -> имя маршрута, параметры и метаданные.

use contracts::meta;
use contracts::{Meta, RouteLocation};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
pub enum MetaValue {
    Str(&'static str),
    Bool(bool),
}

#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub name: &'static str,
    /// Сегменты вида `:id` - параметры
    pub pattern: &'static str,
    pub meta: &'static [(&'static str, MetaValue)],
}

use MetaValue::{Bool, Str};

pub static ROUTES: &[RouteDef] = &[
    RouteDef {
        name: "dashboards-crm",
        pattern: "/dashboards/crm",
        meta: &[(meta::ICON, Str("layout-dashboard"))],
    },
    RouteDef {
        name: "apps-users",
        pattern: "/apps/users",
        meta: &[(meta::ICON, Str("users"))],
    },
    RouteDef {
        name: "apps-users-id",
        pattern: "/apps/users/:id",
        meta: &[(meta::TITLE, Str("pages.user_view")), (meta::ICON, Str("user"))],
    },
    RouteDef {
        name: "apps-roles",
        pattern: "/apps/roles",
        meta: &[(meta::ICON, Str("shield"))],
    },
    RouteDef {
        name: "apps-invoice-preview-id",
        pattern: "/apps/invoice/preview/:id",
        meta: &[(meta::ICON, Str("file-text"))],
    },
    RouteDef {
        name: "pages-account-settings",
        pattern: "/pages/account-settings",
        meta: &[(meta::TITLE_KEY, Str("pages.account_settings")), (meta::ICON, Str("settings"))],
    },
    RouteDef {
        name: "pages-faq",
        pattern: "/pages/faq",
        meta: &[(meta::TITLE, Str("FAQ")), (meta::ICON, Str("help-circle"))],
    },
    RouteDef {
        name: "pages-whats-new",
        pattern: "/pages/whats-new",
        meta: &[(meta::PIN_TAB, Bool(true))],
    },
    RouteDef {
        name: "pages-print",
        pattern: "/pages/print",
        meta: &[(meta::NO_TAB, Bool(true))],
    },
    RouteDef {
        name: "login",
        pattern: "/login",
        meta: &[(meta::LAYOUT, Str("blank"))],
    },
];

const NOT_FOUND: &str = "404";

fn build_meta(def: &RouteDef) -> Meta {
    def.meta
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Str(s) => Value::from(*s),
                Bool(b) => Value::from(*b),
            };
            (key.to_string(), value)
        })
        .collect()
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
    let expected = segments(pattern);
    let actual = segments(path);
    if expected.len() != actual.len() {
        return None;
    }
    let mut params = BTreeMap::new();
    for (want, got) in expected.iter().zip(actual.iter()) {
        if let Some(param) = want.strip_prefix(':') {
            let value = urlencoding::decode(got).ok()?.into_owned();
            params.insert(param.to_string(), value);
        } else if want != got {
            return None;
        }
    }
    Some(params)
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.clone())
}

/// Плоская query. Вложенные ключи (`filter[status]`) остаются как есть,
/// повторяющиеся значения склеиваются через `,`.
fn parse_query(search: &str) -> BTreeMap<String, String> {
    if search.is_empty() {
        return BTreeMap::new();
    }
    match serde_qs::from_str::<BTreeMap<String, String>>(search) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("query '{}' is not flat ({}), parsing pairs", search, err);
            let mut query: BTreeMap<String, String> = BTreeMap::new();
            for pair in search.split('&').filter(|p| !p.is_empty()) {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let value = decode_component(value);
                query
                    .entry(decode_component(key))
                    .and_modify(|existing| {
                        existing.push(',');
                        existing.push_str(&value);
                    })
                    .or_insert(value);
            }
            query
        }
    }
}

/// `path` без query, `search` как в `location.search` (с `?` или без).
pub fn resolve(path: &str, search: &str) -> RouteLocation {
    let query = parse_query(search.trim_start_matches('?'));

    let mut location = ROUTES
        .iter()
        .find_map(|def| {
            match_pattern(def.pattern, path).map(|params| RouteLocation {
                route: contracts::RouteTarget {
                    name: Some(def.name.to_string()),
                    path: path.to_string(),
                    params,
                    query: BTreeMap::new(),
                },
                meta: build_meta(def),
                redirected_from: None,
            })
        })
        .unwrap_or_else(|| RouteLocation::new(path).named(NOT_FOUND));
    location.route.query = query;
    location
}

/// Полный URL вида `/apps/users?page=2`.
pub fn resolve_url(url: &str) -> RouteLocation {
    let (path, search) = url.split_once('?').unwrap_or((url, ""));
    resolve(path, search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_route() {
        let location = resolve("/apps/users", "");
        assert_eq!(location.name(), Some("apps-users"));
        assert!(location.route.params.is_empty());
        assert_eq!(location.meta.get("icon"), Some(&Value::from("users")));
    }

    #[test]
    fn test_param_route() {
        let location = resolve("/apps/users/42", "?tab=security");
        assert_eq!(location.name(), Some("apps-users-id"));
        assert_eq!(location.route.params.get("id").map(String::as_str), Some("42"));
        assert_eq!(location.route.query.get("tab").map(String::as_str), Some("security"));
        assert_eq!(location.full_path(), "/apps/users/42?tab=security");
    }

    #[test]
    fn test_bracketed_query_keys_are_kept() {
        let paid = resolve("/apps/users", "?filter[status]=paid&page=2");
        let draft = resolve("/apps/users", "?filter[status]=draft&page=2");
        assert_eq!(paid.route.query.get("filter[status]").map(String::as_str), Some("paid"));
        assert_eq!(paid.route.query.get("page").map(String::as_str), Some("2"));
        assert_ne!(
            tab_session::tab_id(&paid.route, tab_session::IdStrategy::Logical),
            tab_session::tab_id(&draft.route, tab_session::IdStrategy::Logical)
        );
    }

    #[test]
    fn test_repeated_query_keys_are_joined() {
        let location = resolve("/apps/roles", "?a=1&a=2&q=john+smith");
        assert_eq!(location.route.query.get("a").map(String::as_str), Some("1,2"));
        assert_eq!(location.route.query.get("q").map(String::as_str), Some("john smith"));
    }

    #[test]
    fn test_param_is_decoded() {
        let location = resolve("/apps/invoice/preview/A%2017", "");
        assert_eq!(location.route.params.get("id").map(String::as_str), Some("A 17"));
    }

    #[test]
    fn test_unknown_route() {
        let location = resolve_url("/nowhere/at/all?x=1");
        assert_eq!(location.name(), Some("404"));
        assert_eq!(location.route.query.get("x").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(resolve("/pages/faq/", "").name(), Some("pages-faq"));
    }
}
