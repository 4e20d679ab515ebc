//! Демонстрационные страницы для маршрутов из `routes::table`.
//!
//! Локальное состояние страниц (счётчики, поля ввода) показывает, какие
//! табы сохраняются keep-alive кэшем при переключении.

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

fn use_tabs_store() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[component]
pub fn CrmDashboard() -> impl IntoView {
    let (visits, set_visits) = signal(0u32);
    view! {
        <section class="page">
            <h2>"CRM"</h2>
            <button on:click=move |_| set_visits.update(|v| *v += 1)>
                "Clicks: " {move || visits.get()}
            </button>
        </section>
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let tabs_store = use_tabs_store();
    let (filter, set_filter) = signal(String::new());
    let users = [("1", "Galasasen Slixby"), ("2", "Halsey Redmore"), ("3", "Marjory Sicely")];

    let rows = users
        .into_iter()
        .map(|(id, name)| {
            let visible = move || filter.with(|f| name.to_lowercase().contains(&f.to_lowercase()));
            let url = format!("/apps/users/{}", id);
            view! {
                <li class:hidden=move || !visible() on:click=move |_| tabs_store.open(&url)>
                    {name}
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="page">
            <input
                placeholder="Search"
                prop:value=move || filter.get()
                on:input=move |ev| set_filter.set(event_target_value(&ev))
            />
            <ul>{rows}</ul>
        </section>
    }
}

#[component]
pub fn UserView(id: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <section class="page">
            <h2>"User #" {id}</h2>
            <button on:click=move |_| on_close.run(())>"Close"</button>
        </section>
    }
}

#[component]
pub fn RoleList() -> impl IntoView {
    view! {
        <section class="page">
            <ul>
                <li>"Administrator"</li>
                <li>"Manager"</li>
                <li>"Support"</li>
            </ul>
        </section>
    }
}

#[component]
pub fn InvoicePreview(id: String) -> impl IntoView {
    let (zoom, set_zoom) = signal(100u32);
    view! {
        <section class="page">
            <h2>"Invoice #" {id}</h2>
            <button on:click=move |_| set_zoom.update(|z| *z += 10)>
                "Zoom " {move || zoom.get()} "%"
            </button>
        </section>
    }
}

#[component]
pub fn AccountSettings(tab_id: String) -> impl IntoView {
    let tabs_store = use_tabs_store();
    let (name, set_name) = signal(String::from("John Doe"));

    let id_for_input = tab_id.clone();
    let on_input = move |ev: web_sys::Event| {
        set_name.set(event_target_value(&ev));
        tabs_store.mark_modified(&id_for_input, true);
    };
    let on_save = move |_| tabs_store.mark_modified(&tab_id, false);

    view! {
        <section class="page">
            <input prop:value=move || name.get() on:input=on_input />
            <button on:click=on_save>"Save"</button>
        </section>
    }
}

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section class="page">
            <h2>"FAQ"</h2>
            <p>"Tabs stay open until closed. Pinned tabs survive bulk closing."</p>
        </section>
    }
}

#[component]
pub fn WhatsNew() -> impl IntoView {
    view! {
        <section class="page">
            <p>"This tab opens pinned."</p>
        </section>
    }
}

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class="page">
            <p>"Not found: " {path}</p>
        </section>
    }
}
