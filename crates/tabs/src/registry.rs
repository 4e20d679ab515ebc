//! Реестр табов - единственный источник правды об открытых табах и активном табе.
//!
//! Операции с неизвестным id ничего не делают. Операции, после которых нужна
//! навигация, возвращают `NavRequest`; выполняет его `NavigationBridge`.

use crate::identity::{tab_id, IdStrategy};
use crate::title::{self, resolve_title, Translator};
use contracts::meta::{self, meta_non_empty};
use contracts::{Meta, NavigationMode, RouteLocation, RouteTarget, Tab};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOptions {
    pub closable: bool,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self { closable: true }
    }
}

/// Запрос навигации к цели таба.
///
/// `tab_id == None` - цель не связана с табом (домашняя страница).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRequest {
    pub tab_id: Option<String>,
    pub target: RouteTarget,
    pub mode: NavigationMode,
}

impl NavRequest {
    fn to_tab(tab: &Tab, mode: NavigationMode) -> Self {
        Self {
            tab_id: Some(tab.id.clone()),
            target: tab.route.clone(),
            mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Upsert {
    Created { id: String, evicted: Option<Tab> },
    Activated { id: String, meta_changed: bool },
}

impl Upsert {
    pub fn id(&self) -> &str {
        match self {
            Upsert::Created { id, .. } | Upsert::Activated { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: Option<String>,
    /// Метаданные маршрута, пришедшие от роутера при последней навигации на таб.
    /// `Tab::meta` дополнительно хранит патчи времени выполнения.
    route_meta: HashMap<String, Meta>,
    /// 0 - без ограничения
    max_tabs: usize,
    id_strategy: IdStrategy,
}

impl TabRegistry {
    pub fn new(max_tabs: usize, id_strategy: IdStrategy) -> Self {
        Self {
            max_tabs,
            id_strategy,
            ..Self::default()
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn max_tabs(&self) -> usize {
        self.max_tabs
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn id_for(&self, target: &RouteTarget) -> String {
        tab_id(target, self.id_strategy)
    }

    pub fn add_or_activate(
        &mut self,
        location: &RouteLocation,
        options: AddOptions,
        translator: Option<&dyn Translator>,
    ) -> Upsert {
        let id = self.id_for(&location.route);

        if self.position(&id).is_some() {
            let meta_changed = self.route_meta.get(&id) != Some(&location.meta);
            if meta_changed {
                self.route_meta.insert(id.clone(), location.meta.clone());
                if let Some(existing) = self.get_mut(&id) {
                    // ключи маршрута поверх патчей (`modified`, `set_icon`, ...)
                    for (key, value) in &location.meta {
                        existing.meta.insert(key.clone(), value.clone());
                    }
                    let merged = RouteLocation {
                        meta: existing.meta.clone(),
                        ..location.clone()
                    };
                    let resolved = resolve_title(&merged, translator);
                    existing.title = resolved.title;
                    existing.title_key = resolved.title_key;
                    existing.icon = meta_non_empty(&existing.meta, meta::ICON).map(String::from);
                }
            }
            self.active = Some(id.clone());
            log::debug!("tabs: activated '{}' (meta changed: {})", id, meta_changed);
            return Upsert::Activated { id, meta_changed };
        }

        let resolved = resolve_title(location, translator);
        let tab = Tab {
            id: id.clone(),
            title: resolved.title,
            title_key: resolved.title_key,
            route: location.route.clone(),
            icon: meta_non_empty(&location.meta, meta::ICON).map(String::from),
            closable: options.closable,
            meta: location.meta.clone(),
        };
        self.tabs.push(tab);
        self.active = Some(id.clone());
        log::debug!("tabs: created '{}'. Total tabs: {}", id, self.tabs.len());

        let evicted = self.evict_over_limit(Some(&id)).into_iter().next();
        let tabs = &self.tabs;
        self.route_meta.retain(|known, _| tabs.iter().any(|t| &t.id == known));
        self.route_meta.insert(id.clone(), location.meta.clone());
        Upsert::Created { id, evicted }
    }

    /// Убирает самые старые закрываемые табы сверх лимита, кроме `keep`.
    fn evict_over_limit(&mut self, keep: Option<&str>) -> Vec<Tab> {
        let mut evicted = Vec::new();
        if self.max_tabs == 0 {
            return evicted;
        }
        while self.tabs.len() > self.max_tabs {
            let Some(pos) = self
                .tabs
                .iter()
                .position(|t| t.closable && Some(t.id.as_str()) != keep)
            else {
                break;
            };
            let tab = self.tabs.remove(pos);
            log::debug!("tabs: evicted '{}' (limit {})", tab.id, self.max_tabs);
            evicted.push(tab);
        }
        let active_evicted = self
            .active
            .as_deref()
            .is_some_and(|active| evicted.iter().any(|t| t.id == active));
        if active_evicted {
            self.active = self.tabs.last().map(|t| t.id.clone());
        }
        evicted
    }

    pub fn set_max_tabs(&mut self, max_tabs: usize) -> Vec<Tab> {
        self.max_tabs = max_tabs;
        let active = self.active.clone();
        self.evict_over_limit(active.as_deref())
    }

    pub fn close(&mut self, id: &str) -> Option<NavRequest> {
        let index = self.position(id)?;
        if !self.tabs[index].closable {
            return None;
        }
        self.tabs.remove(index);
        log::debug!("tabs: closed '{}'. Total tabs: {}", id, self.tabs.len());

        if self.active.as_deref() != Some(id) {
            return None;
        }
        // сначала таб, сдвинувшийся на место закрытого, затем предыдущий
        let request = self
            .tabs
            .get(index)
            .or_else(|| index.checked_sub(1).and_then(|i| self.tabs.get(i)))
            .map(|tab| NavRequest::to_tab(tab, NavigationMode::Replace));
        self.active = request.as_ref().and_then(|r| r.tab_id.clone());
        request
    }

    pub fn activate(&mut self, id: &str) -> Option<NavRequest> {
        let tab = self.get(id)?;
        let request = NavRequest::to_tab(tab, NavigationMode::Push);
        self.active = Some(id.to_string());
        Some(request)
    }

    /// Если активный таб удалён, активирует `fallback` (или первый оставшийся).
    fn repair_active(&mut self, fallback: Option<&str>) -> Option<NavRequest> {
        if self.active_tab().is_some() {
            return None;
        }
        let request = fallback
            .and_then(|id| self.get(id))
            .or_else(|| self.tabs.first())
            .map(|tab| NavRequest::to_tab(tab, NavigationMode::Replace));
        self.active = request.as_ref().and_then(|r| r.tab_id.clone());
        request
    }

    pub fn close_all(&mut self) -> Option<NavRequest> {
        self.tabs.retain(|t| !t.closable);
        log::debug!("tabs: close all. Remaining pinned: {}", self.tabs.len());
        self.repair_active(None)
    }

    pub fn close_others(&mut self, keep_id: &str) -> Option<NavRequest> {
        self.position(keep_id)?;
        self.tabs.retain(|t| t.id == keep_id || !t.closable);
        self.repair_active(Some(keep_id))
    }

    pub fn close_to_left(&mut self, id: &str) -> Option<NavRequest> {
        let index = self.position(id)?;
        let mut position = 0;
        self.tabs.retain(|t| {
            let keep = !t.closable || position >= index;
            position += 1;
            keep
        });
        self.repair_active(Some(id))
    }

    /// Закрепить/открепить таб. Возвращает новое значение `closable`.
    pub fn toggle_pin(&mut self, id: &str) -> Option<bool> {
        let tab = self.get_mut(id)?;
        tab.closable = !tab.closable;
        Some(tab.closable)
    }

    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> bool {
        let len = self.tabs.len();
        if old_index == new_index || old_index >= len || new_index >= len {
            return false;
        }
        let tab = self.tabs.remove(old_index);
        self.tabs.insert(new_index, tab);
        true
    }

    pub fn update_title(&mut self, id: &str, title: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(tab) => {
                tab.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Поверхностное слияние метаданных.
    pub fn update_meta(&mut self, id: &str, patch: Meta) -> bool {
        let Some(tab) = self.get_mut(id) else {
            return false;
        };
        for (key, value) in patch {
            tab.meta.insert(key, value);
        }
        tab.icon = meta_non_empty(&tab.meta, meta::ICON).map(String::from);
        true
    }

    pub fn set_icon(&mut self, id: &str, icon: &str) -> bool {
        let mut patch = Meta::new();
        patch.insert(meta::ICON.to_string(), Value::from(icon));
        self.update_meta(id, patch)
    }

    pub fn mark_modified(&mut self, id: &str, modified: bool) -> bool {
        let mut patch = Meta::new();
        patch.insert(meta::MODIFIED.to_string(), Value::from(modified));
        self.update_meta(id, patch)
    }

    pub fn retranslate(&mut self, translator: &dyn Translator) -> usize {
        title::retranslate(&mut self.tabs, translator)
    }

    pub fn clear(&mut self) {
        self.tabs.clear();
        self.route_meta.clear();
        self.active = None;
    }
}
