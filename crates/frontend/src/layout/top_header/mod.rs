use crate::i18n::Locale;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let on_locale_change = move |ev: web_sys::Event| {
        if let Some(locale) = Locale::from_code(&event_target_value(&ev)) {
            tabs_store.set_locale(locale);
        }
    };

    view! {
        <header class="top-header">
            <button class="top-header__toggle" on:click=move |_| tabs_store.toggle_left()>"☰"</button>
            <span class="top-header__brand">"Admin"</span>
            <select class="top-header__locale" on:change=on_locale_change>
                {Locale::ALL
                    .into_iter()
                    .map(|locale| {
                        let selected = move || tabs_store.locale.get() == locale;
                        view! {
                            <option value=locale.code() selected=selected>
                                {locale.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </header>
    }
}
