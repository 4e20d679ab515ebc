//! Сессия табов: реестр + keep-alive кэш + политика создания табов.
//!
//! Экземпляр создаётся явно и принадлежит корню приложения. После каждой
//! мутации реестра кэш синхронизируется, а активный таб отмечается
//! как последний использованный.

use crate::config::TabsConfig;
use crate::keep_alive::{KeepAliveTracker, Remount};
use crate::registry::{AddOptions, NavRequest, TabRegistry, Upsert};
use crate::title::Translator;
use contracts::meta::{self, meta_flag, meta_str};
use contracts::{NavigationMode, RouteLocation, RouteTarget};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct TabSession {
    registry: TabRegistry,
    keep_alive: KeepAliveTracker,
    excluded_routes: HashSet<String>,
    non_closable_routes: HashSet<String>,
    home_path: String,
}

impl Default for TabSession {
    fn default() -> Self {
        Self::new(&TabsConfig::default())
    }
}

impl TabSession {
    pub fn new(config: &TabsConfig) -> Self {
        Self {
            registry: TabRegistry::new(config.tabs.max_tabs, config.tabs.id_strategy),
            keep_alive: KeepAliveTracker::new(
                config.keep_alive.excluded_routes.iter().cloned(),
                config.keep_alive.max_cached,
            ),
            excluded_routes: config.tabs.excluded_routes.iter().cloned().collect(),
            non_closable_routes: config.tabs.non_closable_routes.iter().cloned().collect(),
            home_path: config.tabs.home_path.clone(),
        }
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn keep_alive(&self) -> &KeepAliveTracker {
        &self.keep_alive
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    pub fn should_create_tab(&self, location: &RouteLocation) -> bool {
        if location
            .name()
            .is_some_and(|name| self.excluded_routes.contains(name))
        {
            return false;
        }
        if meta_flag(&location.meta, meta::NO_TAB) == Some(true)
            || meta_flag(&location.meta, meta::SKIP_TAB) == Some(true)
            || meta_flag(&location.meta, meta::ADD_TO_TABS) == Some(false)
            || meta_str(&location.meta, meta::LAYOUT) == Some("blank")
        {
            return false;
        }
        location.redirected_from.is_none()
    }

    pub fn options_for(&self, location: &RouteLocation) -> AddOptions {
        let pinned = meta_flag(&location.meta, meta::PIN_TAB) == Some(true)
            || location
                .name()
                .is_some_and(|name| self.non_closable_routes.contains(name));
        AddOptions { closable: !pinned }
    }

    fn after_mutation(&mut self) {
        self.keep_alive.sync(self.registry.tabs());
        if let Some(active) = self.registry.active_id() {
            self.keep_alive.touch(active);
        }
    }

    /// Обработчик завершённой навигации.
    pub fn handle_navigation(
        &mut self,
        location: &RouteLocation,
        translator: Option<&dyn Translator>,
    ) -> Option<Upsert> {
        if !self.should_create_tab(location) {
            log::debug!("tabs: skip '{}'", location.full_path());
            return None;
        }
        let options = self.options_for(location);
        let upsert = self.registry.add_or_activate(location, options, translator);
        self.after_mutation();
        Some(upsert)
    }

    pub fn activate(&mut self, id: &str) -> Option<NavRequest> {
        let request = self.registry.activate(id);
        self.after_mutation();
        request
    }

    fn home_request(&self) -> NavRequest {
        NavRequest {
            tab_id: None,
            target: RouteTarget::new(self.home_path.clone()),
            mode: NavigationMode::Replace,
        }
    }

    /// Если после закрытия не осталось табов - уходим на домашнюю страницу.
    fn or_home(&self, request: Option<NavRequest>, was_active: bool) -> Option<NavRequest> {
        match request {
            Some(request) => Some(request),
            None if was_active && self.registry.is_empty() => Some(self.home_request()),
            None => None,
        }
    }

    fn active_is_closable(&self) -> bool {
        self.registry.active_tab().is_some_and(|t| t.closable)
    }

    pub fn close(&mut self, id: &str) -> Option<NavRequest> {
        let was_active = self.registry.active_id() == Some(id)
            && self.registry.get(id).is_some_and(|t| t.closable);
        let request = self.registry.close(id);
        self.after_mutation();
        self.or_home(request, was_active)
    }

    pub fn close_all(&mut self) -> Option<NavRequest> {
        let was_active = self.active_is_closable();
        let request = self.registry.close_all();
        self.after_mutation();
        self.or_home(request, was_active)
    }

    pub fn close_others(&mut self, keep_id: &str) -> Option<NavRequest> {
        let request = self.registry.close_others(keep_id);
        self.after_mutation();
        request
    }

    pub fn close_to_left(&mut self, id: &str) -> Option<NavRequest> {
        let request = self.registry.close_to_left(id);
        self.after_mutation();
        request
    }

    pub fn toggle_pin(&mut self, id: &str) -> Option<bool> {
        self.registry.toggle_pin(id)
    }

    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> bool {
        let moved = self.registry.reorder(old_index, new_index);
        if moved {
            self.after_mutation();
        }
        moved
    }

    pub fn set_max_tabs(&mut self, max_tabs: usize) {
        self.registry.set_max_tabs(max_tabs);
        self.after_mutation();
    }

    pub fn retranslate(&mut self, translator: &dyn Translator) -> usize {
        self.registry.retranslate(translator)
    }

    pub fn mark_modified(&mut self, id: &str, modified: bool) -> bool {
        self.registry.mark_modified(id, modified)
    }

    pub fn set_icon(&mut self, id: &str, icon: &str) -> bool {
        self.registry.set_icon(id, icon)
    }

    pub fn update_title(&mut self, id: &str, title: &str) -> bool {
        self.registry.update_title(id, title)
    }

    /// Пересоздать представление таба.
    pub fn refresh(&mut self, id: &str) -> Option<Remount> {
        self.keep_alive.invalidate(id)
    }

    pub fn refresh_active(&mut self) -> Option<Remount> {
        let active = self.registry.active_id()?.to_string();
        self.refresh(&active)
    }

    pub fn refresh_all(&mut self) -> Vec<Remount> {
        self.keep_alive.invalidate_all()
    }

    /// Сброс при перезагрузке страницы.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.after_mutation();
    }
}
