//! Tab content registry - маппинг имени маршрута таба -> View.

use crate::layout::global_context::AppGlobalContext;
use crate::pages::{
    AccountSettings, CrmDashboard, Faq, InvoicePreview, NotFound, RoleList, UserList, UserView,
    WhatsNew,
};
use contracts::Tab;
use leptos::logging::log;
use leptos::prelude::*;

fn param(tab: &Tab, name: &str) -> String {
    tab.route.params.get(name).cloned().unwrap_or_default()
}

/// Рендерит контент таба по имени его маршрута.
pub fn render_tab_content(tab: &Tab, tabs_store: AppGlobalContext) -> AnyView {
    let tab_id = tab.id.clone();

    match tab.route_name().unwrap_or_default() {
        "dashboards-crm" => view! { <CrmDashboard /> }.into_any(),
        "apps-users" => view! { <UserList /> }.into_any(),
        "apps-users-id" => {
            let id = param(tab, "id");
            log!("✅ Creating UserView with id: {}", id);
            view! {
                <UserView
                    id=id
                    on_close=Callback::new(move |_| {
                        tabs_store.close_tab(&tab_id);
                    })
                />
            }
            .into_any()
        }
        "apps-roles" => view! { <RoleList /> }.into_any(),
        "apps-invoice-preview-id" => view! { <InvoicePreview id=param(tab, "id") /> }.into_any(),
        "pages-account-settings" => view! { <AccountSettings tab_id=tab_id /> }.into_any(),
        "pages-faq" => view! { <Faq /> }.into_any(),
        "pages-whats-new" => view! { <WhatsNew /> }.into_any(),
        other => {
            log!("⚠️ Unknown tab route: {}", other);
            view! { <NotFound path=tab.path() /> }.into_any()
        }
    }
}
