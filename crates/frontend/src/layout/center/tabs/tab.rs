use crate::i18n;
use crate::layout::global_context::AppGlobalContext;
use contracts::meta;
use contracts::Tab as TabData;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Заголовок и флаги читаются из реестра: <For> не пересоздаёт компонент
    // при их изменении.
    let current = {
        let id = tab.id.clone();
        move || tabs_store.session.with(|s| s.registry().get(&id).cloned())
    };

    let id_for_active = tab.id.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active_id().as_deref() == Some(id_for_active.as_str()));

    let title = {
        let current = current.clone();
        move || current().map(|t| t.title).unwrap_or_default()
    };
    let closable = {
        let current = current.clone();
        move || current().is_some_and(|t| t.closable)
    };
    let modified = {
        let current = current.clone();
        move || {
            current()
                .and_then(|t| t.meta.get(meta::MODIFIED).and_then(|v| v.as_bool()))
                .unwrap_or(false)
        }
    };
    let is_pinned = {
        let current = current.clone();
        move || current().is_some_and(|t| t.pinned())
    };
    let icon = move || current().and_then(|t| t.icon);

    let id_for_click = tab.id.clone();
    let on_click = move |_| tabs_store.activate_tab(&id_for_click);

    let id_for_close = tab.id.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&id_for_close);
    };

    let id_for_pin = tab.id.clone();
    let on_pin = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.toggle_pin(&id_for_pin);
    };
    let pin_title = move || i18n::translate(tabs_store.locale.get(), "tabs.pin");

    let is_pinned_class = is_pinned.clone();
    view! {
        <div class="tab" class:active=is_active class:tab--pinned=is_pinned_class on:click=on_click>
            {move || icon().map(|name| view! { <i class=format!("icon icon-{}", name)></i> })}
            <span>{title}</span>
            {move || if modified() { " (*)" } else { "" }}
            <button class="tab-pin" title=pin_title on:click=on_pin>
                {move || if is_pinned() { "📌" } else { "📍" }}
            </button>
            <Show when=closable.clone()>
                <button class="tab-close" on:click=on_close.clone()>"×"</button>
            </Show>
        </div>
    }
}
