//! Заголовки табов.
//!
//! Порядок источников:
//! 1. `meta.titleKey` - ключ локализации, до перевода заголовком служит сам ключ
//! 2. `meta.title` - литерал как есть, либо ключ, если строка похожа на ключ
//! 3. `menu.<имя_маршрута>` - если переводчик знает такой ключ
//! 4. последний значимый сегмент пути, затем `"Untitled"`

use contracts::meta::{self, meta_non_empty};
use contracts::{RouteLocation, Tab};

pub const UNTITLED: &str = "Untitled";

pub trait Translator {
    /// Для неизвестного ключа возвращает сам ключ.
    fn translate(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    pub title: String,
    pub title_key: Option<String>,
}

impl ResolvedTitle {
    fn literal(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_key: None,
        }
    }

    fn keyed(key: &str, translator: Option<&dyn Translator>) -> Self {
        let title = translator
            .map(|t| t.translate(key))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| key.to_string());
        Self {
            title,
            title_key: Some(key.to_string()),
        }
    }
}

/// Строка выглядит как ключ локализации: `menu.users`, `pages.user-view`.
pub fn is_key_like(s: &str) -> bool {
    s.contains('.')
        && !s.starts_with('.')
        && !s.ends_with('.')
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

pub fn menu_key(route_name: &str) -> String {
    format!("menu.{}", route_name.replace('-', "_"))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_placeholder_segment(segment: &str) -> bool {
    segment.starts_with(':')
        || (segment.starts_with('[') && segment.ends_with(']'))
        || segment.chars().all(|c| c.is_ascii_digit())
}

/// `/apps/user-list/42` -> `User list`
pub fn humanize_path(path: &str) -> Option<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .filter(|s| !s.is_empty() && !is_placeholder_segment(s))
        .last()
        .map(|segment| capitalize(&segment.replace('-', " ")))
}

pub fn resolve_title(location: &RouteLocation, translator: Option<&dyn Translator>) -> ResolvedTitle {
    if let Some(key) = meta_non_empty(&location.meta, meta::TITLE_KEY) {
        return ResolvedTitle::keyed(key, translator);
    }

    if let Some(title) = meta_non_empty(&location.meta, meta::TITLE) {
        if is_key_like(title) {
            return ResolvedTitle::keyed(title, translator);
        }
        return ResolvedTitle::literal(title);
    }

    if let (Some(name), Some(t)) = (location.name(), translator) {
        let key = menu_key(name);
        let translated = t.translate(&key);
        if !translated.is_empty() && translated != key {
            return ResolvedTitle {
                title: translated,
                title_key: Some(key),
            };
        }
    }

    humanize_path(&location.route.path)
        .map(ResolvedTitle::literal)
        .unwrap_or_else(|| ResolvedTitle::literal(UNTITLED))
}

fn translate_into(title: &mut String, key: &str, translator: &dyn Translator) -> bool {
    let translated = translator.translate(key);
    // Нет перевода: оставляем прежний текст, если это не заглушка-ключ.
    if translated.is_empty() || (translated == key && title.as_str() != key) {
        return false;
    }
    if *title == translated {
        return false;
    }
    *title = translated;
    true
}

/// Пересчитывает заголовки из `title_key` и ключевого `meta.title`.
///
/// Возвращает число изменённых заголовков.
pub fn retranslate(tabs: &mut [Tab], translator: &dyn Translator) -> usize {
    let mut changed = 0;
    for tab in tabs.iter_mut() {
        let key = tab
            .title_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| {
                meta_non_empty(&tab.meta, meta::TITLE)
                    .filter(|t| is_key_like(t))
                    .map(String::from)
            });
        if let Some(key) = key {
            if translate_into(&mut tab.title, &key, translator) {
                changed += 1;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::RouteTarget;

    fn russian(key: &str) -> String {
        match key {
            "menu.apps_users" => "Пользователи".to_string(),
            "pages.profile" => "Профиль".to_string(),
            _ => key.to_string(),
        }
    }

    fn tab(title: &str, title_key: Option<&str>) -> Tab {
        Tab {
            id: title.to_string(),
            title: title.to_string(),
            title_key: title_key.map(String::from),
            route: RouteTarget::new("/x"),
            icon: None,
            closable: true,
            meta: Default::default(),
        }
    }

    #[test]
    fn test_key_like() {
        assert!(is_key_like("menu.users"));
        assert!(is_key_like("pages.user-view"));
        assert!(!is_key_like("Users"));
        assert!(!is_key_like("Mr. Smith"));
        assert!(!is_key_like("v1.2 release"));
        assert!(!is_key_like(".hidden"));
        assert!(!is_key_like("ends."));
    }

    #[test]
    fn test_title_key_is_placeholder_until_translated() {
        let location = RouteLocation::new("/profile").with_meta("titleKey", "pages.profile");
        let resolved = resolve_title(&location, None);
        assert_eq!(resolved.title, "pages.profile");
        assert_eq!(resolved.title_key.as_deref(), Some("pages.profile"));

        let resolved = resolve_title(&location, Some(&russian));
        assert_eq!(resolved.title, "Профиль");
    }

    #[test]
    fn test_literal_title_verbatim() {
        let location = RouteLocation::new("/apps/users")
            .named("apps-users")
            .with_meta("title", "User Management");
        let resolved = resolve_title(&location, Some(&russian));
        assert_eq!(resolved.title, "User Management");
        assert_eq!(resolved.title_key, None);
    }

    #[test]
    fn test_key_shaped_title_becomes_key() {
        let location = RouteLocation::new("/profile").with_meta("title", "pages.profile");
        let resolved = resolve_title(&location, None);
        assert_eq!(resolved.title_key.as_deref(), Some("pages.profile"));
    }

    #[test]
    fn test_synthesized_menu_key() {
        let location = RouteLocation::new("/apps/users").named("apps-users");
        let resolved = resolve_title(&location, Some(&russian));
        assert_eq!(resolved.title, "Пользователи");
        assert_eq!(resolved.title_key.as_deref(), Some("menu.apps_users"));
    }

    #[test]
    fn test_untranslated_menu_key_falls_back_to_path() {
        let location = RouteLocation::new("/apps/invoice-list/42").named("apps-invoice-list-id");
        let resolved = resolve_title(&location, Some(&russian));
        assert_eq!(resolved.title, "Invoice list");
        assert_eq!(resolved.title_key, None);
    }

    #[test]
    fn test_untitled() {
        assert_eq!(resolve_title(&RouteLocation::new("/"), None).title, UNTITLED);
        assert_eq!(resolve_title(&RouteLocation::new("/123/:id"), None).title, UNTITLED);
    }

    #[test]
    fn test_humanize_path() {
        assert_eq!(humanize_path("/apps/user-view/:id").as_deref(), Some("User view"));
        assert_eq!(humanize_path("/pages/faq?x=1").as_deref(), Some("Faq"));
        assert_eq!(humanize_path("/blog/[slug]").as_deref(), Some("Blog"));
        assert_eq!(humanize_path(""), None);
    }

    #[test]
    fn test_retranslate_only_keyed_tabs() {
        let mut tabs = vec![
            tab("menu.apps_users", Some("menu.apps_users")),
            tab("Literal", None),
        ];
        let changed = retranslate(&mut tabs, &russian);
        assert_eq!(changed, 1);
        assert_eq!(tabs[0].title, "Пользователи");
        assert_eq!(tabs[1].title, "Literal");
    }

    #[test]
    fn test_retranslate_key_shaped_meta_title() {
        let mut t = tab("old", None);
        t.meta.insert("title".into(), "pages.profile".into());
        let mut tabs = vec![t];
        retranslate(&mut tabs, &russian);
        assert_eq!(tabs[0].title, "Профиль");
    }

    #[test]
    fn test_missing_translation_keeps_previous_title() {
        let mut tabs = vec![tab("Пользователи", Some("menu.apps_users"))];
        let changed = retranslate(&mut tabs, &|key: &str| key.to_string());
        assert_eq!(changed, 0);
        assert_eq!(tabs[0].title, "Пользователи");
    }
}
