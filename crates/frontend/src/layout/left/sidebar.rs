//! Sidebar с группами ссылок. Клик ведёт роутер на страницу,
//! таб открывается уже по факту завершённой навигации.

use crate::i18n;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label_key: &'static str,
    items: Vec<(&'static str, &'static str)>, // (url, label key)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label_key: "sidebar.dashboards",
            items: vec![("/dashboards/crm", "menu.dashboards_crm")],
        },
        MenuGroup {
            label_key: "sidebar.apps",
            items: vec![
                ("/apps/users", "menu.apps_users"),
                ("/apps/roles", "menu.apps_roles"),
                ("/apps/invoice/preview/4987", "sidebar.invoice"),
            ],
        },
        MenuGroup {
            label_key: "sidebar.pages",
            items: vec![
                ("/pages/account-settings", "pages.account_settings"),
                ("/pages/faq", "FAQ"),
                ("/pages/whats-new", "What's new"),
                ("/pages/print", "Print"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let groups = get_menu_groups()
        .into_iter()
        .map(|group| {
            let items = group
                .items
                .into_iter()
                .map(|(url, label_key)| {
                    let label = move || i18n::translate(tabs_store.locale.get(), label_key);
                    view! {
                        <li class="sidebar__item" on:click=move |_| tabs_store.open(url)>
                            {label}
                        </li>
                    }
                })
                .collect_view();
            let title = move || i18n::translate(tabs_store.locale.get(), group.label_key);
            view! {
                <div class="sidebar__group">
                    <div class="sidebar__group-title">{title}</div>
                    <ul class="sidebar__items">{items}</ul>
                </div>
            }
        })
        .collect_view();

    view! { <nav class="sidebar">{groups}</nav> }
}
