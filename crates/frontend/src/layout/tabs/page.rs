//! TabPage component - wrapper для отображения контента таба
//!
//! Закэшированный таб остаётся смонтированным и только скрывается, пока
//! не активен. Незакэшированный монтируется заново при каждой активации.
//! Смена поколения таба (refresh) пересоздаёт компонент, т.к. поколение
//! входит в ключ `<For>`.

use super::registry::render_tab_content;
use crate::layout::global_context::AppGlobalContext;
use contracts::Tab;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: Tab, generation: u64, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_id = tab.id.clone();

    let is_active = {
        let tab_id = tab_id.clone();
        move || {
            tabs_store
                .session
                .with(|s| s.registry().active_id() == Some(tab_id.as_str()))
        }
    };
    let is_cached = {
        let tab_id = tab_id.clone();
        move || tabs_store.session.with(|s| s.keep_alive().is_cached(&tab_id))
    };

    log!("🔨 TabPage CREATED for: '{}' (generation {})", tab_id, generation);

    let tab_id_for_cleanup = tab_id.clone();
    on_cleanup(move || {
        log!("💥 TabPage DESTROYED for: '{}'", tab_id_for_cleanup);
    });

    let is_hidden = {
        let is_active = is_active.clone();
        move || !is_active()
    };
    let is_mounted = move || is_active() || is_cached();

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=is_hidden
            data-tab-id=tab_id
        >
            <Show when=is_mounted>
                {render_tab_content(&tab, tabs_store)}
            </Show>
        </div>
    }
}
