use crate::i18n::{self, Locale};
use crate::layout::history_router::HistoryRouter;
use crate::routes;
use contracts::NavigationMode;
use leptos::prelude::Effect;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use tab_session::{NavOutcome, NavRequest, NavigationBridge, NavigationError, Router, TabSession, TabsConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub session: RwSignal<TabSession>,
    pub locale: RwSignal<Locale>,
    /// Последняя ошибка навигации (кроме дублирующей навигации)
    pub nav_error: RwSignal<Option<NavigationError>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(config: &TabsConfig) -> Self {
        Self {
            session: RwSignal::new(TabSession::new(config)),
            locale: RwSignal::new(i18n::saved_locale()),
            nav_error: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    fn bridge() -> NavigationBridge<HistoryRouter> {
        NavigationBridge::new(HistoryRouter)
    }

    pub fn init_router_integration(&self) {
        // Табы живут только в памяти: после перезагрузки остаётся текущий маршрут.
        self.session.update(|s| s.clear());
        self.on_route_changed();

        let this = *self;
        let on_popstate = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            this.on_route_changed();
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        on_popstate.forget(); // Keep the closure alive

        Effect::new(move |_| {
            let locale = this.locale.get();
            let translate = i18n::translator(locale);
            let changed = this.session.try_update(|s| s.retranslate(&translate));
            leptos::logging::log!("🌐 locale '{}': {:?} titles updated", locale.code(), changed);
        });
    }

    /// After-navigation hook: текущий URL -> реестр табов.
    pub fn on_route_changed(&self) {
        let location = HistoryRouter.current_route();
        let translate = i18n::translator(self.locale.get_untracked());
        self.session.update(|s| {
            s.handle_navigation(&location, Some(&translate));
        });
    }

    fn run(&self, request: Option<NavRequest>) {
        let Some(request) = request else {
            return;
        };
        let bridge = Self::bridge();
        let fresh = self
            .session
            .with_untracked(|s| bridge.is_fresh(s.registry(), &request));
        if !fresh {
            return;
        }
        let this = *self;
        spawn_local(async move {
            match bridge.navigate(&request).await {
                // AlreadyThere тоже: текущий URL мог остаться без таба
                // после неудачной навигации.
                Ok(NavOutcome::Navigated | NavOutcome::AlreadyThere) => {
                    this.nav_error.set(None);
                    this.on_route_changed();
                }
                Ok(NavOutcome::Skipped) => this.nav_error.set(None),
                Err(err) => this.nav_error.set(Some(err)),
            }
        });
    }

    /// Открыть страницу по URL (ссылки меню).
    pub fn open(&self, url: &str) {
        let location = routes::resolve_url(url);
        self.run(Some(NavRequest {
            tab_id: None,
            target: location.route,
            mode: NavigationMode::Push,
        }));
    }

    pub fn activate_tab(&self, id: &str) {
        leptos::logging::log!("🔶 activate_tab: id='{}'", id);
        let request = self.session.try_update(|s| s.activate(id)).flatten();
        self.run(request);
    }

    pub fn close_tab(&self, id: &str) {
        leptos::logging::log!("🔴 close_tab: id='{}'", id);
        let request = self.session.try_update(|s| s.close(id)).flatten();
        self.run(request);
    }

    pub fn close_all(&self) {
        let request = self.session.try_update(|s| s.close_all()).flatten();
        self.run(request);
    }

    pub fn close_others(&self, keep_id: &str) {
        let request = self.session.try_update(|s| s.close_others(keep_id)).flatten();
        self.run(request);
    }

    pub fn close_to_left(&self, id: &str) {
        let request = self.session.try_update(|s| s.close_to_left(id)).flatten();
        self.run(request);
    }

    pub fn toggle_pin(&self, id: &str) {
        self.session.update(|s| {
            s.toggle_pin(id);
        });
    }

    /// Сдвинуть таб на `offset` позиций.
    pub fn move_tab(&self, id: &str, offset: isize) {
        self.session.update(|s| {
            let Some(index) = s.registry().position(id) else {
                return;
            };
            if let Some(target) = index.checked_add_signed(offset) {
                s.reorder(index, target);
            }
        });
    }

    pub fn mark_modified(&self, id: &str, modified: bool) {
        let already = self.session.with_untracked(|s| {
            s.registry()
                .get(id)
                .and_then(|t| t.meta.get(contracts::meta::MODIFIED))
                .and_then(|v| v.as_bool())
                == Some(modified)
        });
        if !already {
            self.session.update(|s| {
                s.mark_modified(id, modified);
            });
        }
    }

    pub fn refresh_tab(&self, id: &str) {
        self.session.update(|s| {
            s.refresh(id);
        });
    }

    pub fn refresh_all(&self) {
        self.session.update(|s| {
            s.refresh_all();
        });
    }

    pub fn active_id(&self) -> Option<String> {
        self.session
            .with(|s| s.registry().active_id().map(String::from))
    }

    pub fn set_locale(&self, locale: Locale) {
        i18n::save_locale(locale);
        self.locale.set(locale);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
