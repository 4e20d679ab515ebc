//! Минимальная локализация: статические словари и переводчик для активного языка.
//!
//! Неизвестный ключ переводится в сам ключ.

use web_sys::window;

const STORAGE_KEY: &str = "ui.locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Русский",
        }
    }
}

fn lookup_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "menu.dashboards_crm" => "CRM",
        "menu.apps_users" => "Users",
        "menu.apps_roles" => "Roles",
        "pages.user_view" => "User",
        "pages.account_settings" => "Account Settings",
        "sidebar.dashboards" => "Dashboards",
        "sidebar.apps" => "Apps",
        "sidebar.pages" => "Pages",
        "sidebar.invoice" => "Invoice #4987",
        "tabs.close_all" => "Close all",
        "tabs.close_others" => "Close others",
        "tabs.close_left" => "Close to the left",
        "tabs.refresh" => "Refresh",
        "tabs.refresh_all" => "Refresh all",
        "tabs.move_left" => "Move left",
        "tabs.move_right" => "Move right",
        "tabs.pin" => "Pin",
        "tabs.navigation_failed" => "Navigation failed",
        _ => return None,
    })
}

fn lookup_ru(key: &str) -> Option<&'static str> {
    Some(match key {
        "menu.dashboards_crm" => "CRM",
        "menu.apps_users" => "Пользователи",
        "menu.apps_roles" => "Роли",
        "pages.user_view" => "Пользователь",
        "pages.account_settings" => "Настройки аккаунта",
        "sidebar.dashboards" => "Дашборды",
        "sidebar.apps" => "Приложения",
        "sidebar.pages" => "Страницы",
        "sidebar.invoice" => "Счёт №4987",
        "tabs.close_all" => "Закрыть все",
        "tabs.close_others" => "Закрыть остальные",
        "tabs.close_left" => "Закрыть слева",
        "tabs.refresh" => "Обновить",
        "tabs.refresh_all" => "Обновить все",
        "tabs.move_left" => "Влево",
        "tabs.move_right" => "Вправо",
        "tabs.pin" => "Закрепить",
        "tabs.navigation_failed" => "Ошибка навигации",
        _ => return None,
    })
}

pub fn translate(locale: Locale, key: &str) -> String {
    let found = match locale {
        Locale::En => lookup_en(key),
        Locale::Ru => lookup_ru(key),
    };
    found.map(String::from).unwrap_or_else(|| key.to_string())
}

/// Переводчик для `tab_session`.
pub fn translator(locale: Locale) -> impl Fn(&str) -> String {
    move |key: &str| translate(locale, key)
}

pub fn saved_locale() -> Locale {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default()
}

pub fn save_locale(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, locale.code());
    }
}
