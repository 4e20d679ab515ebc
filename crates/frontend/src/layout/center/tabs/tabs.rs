use crate::i18n;
use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabPage;
use contracts::Tab as TabData;
use leptos::ev;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
fn TabsToolbar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let t = move |key: &'static str| move || i18n::translate(tabs_store.locale.get(), key);

    let with_active = move |action: fn(&AppGlobalContext, &str)| {
        move |_: ev::MouseEvent| {
            if let Some(id) = tabs_store.active_id() {
                action(&tabs_store, &id);
            }
        }
    };

    let nav_error = move || {
        tabs_store.nav_error.get().map(|err| {
            view! {
                <span class="tabs-toolbar__error">
                    {move || i18n::translate(tabs_store.locale.get(), "tabs.navigation_failed")}
                    ": "
                    {err.to_string()}
                </span>
            }
        })
    };

    view! {
        <div class="tabs-toolbar">
            <button on:click=with_active(|ctx, id| ctx.move_tab(id, -1))>{t("tabs.move_left")}</button>
            <button on:click=with_active(|ctx, id| ctx.move_tab(id, 1))>{t("tabs.move_right")}</button>
            <button on:click=with_active(AppGlobalContext::refresh_tab)>{t("tabs.refresh")}</button>
            <button on:click=move |_| tabs_store.refresh_all()>{t("tabs.refresh_all")}</button>
            <button on:click=with_active(AppGlobalContext::close_to_left)>{t("tabs.close_left")}</button>
            <button on:click=with_active(AppGlobalContext::close_others)>{t("tabs.close_others")}</button>
            <button on:click=move |_| tabs_store.close_all()>{t("tabs.close_all")}</button>
            {nav_error}
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.session.with(|s| s.registry().tabs().to_vec())
                    key=|tab: &TabData| tab.id.clone()
                    children=move |tab: TabData| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <TabsToolbar />
            <div class="tab-content">
                <For
                    each=move || {
                        tabs_store.session.with(|s| {
                            s.registry()
                                .tabs()
                                .iter()
                                .map(|tab| (tab.clone(), s.keep_alive().generation(&tab.id)))
                                .collect::<Vec<_>>()
                        })
                    }
                    key=|item: &(TabData, u64)| (item.0.id.clone(), item.1)
                    children=move |(tab, generation): (TabData, u64)| {
                        log!("👶 <For> children function called for: '{}'", tab.id);
                        view! {
                            <TabPage tab=tab generation=generation tabs_store=tabs_store />
                        }
                    }
                />
            </div>
        </div>
    }
}
