use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;
use tab_session::TabsConfig;

/// Конфигурация табов, встроенная в сборку.
const TABS_CONFIG: &str = include_str!("../tabs.toml");

fn tabs_config() -> TabsConfig {
    match TabsConfig::from_toml(TABS_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("tabs.toml is invalid, using defaults: {}", err);
            TabsConfig::default()
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(&tabs_config()));

    view! {
        <MainLayout />
    }
}
