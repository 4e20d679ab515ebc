//! Кэш представлений табов (keep-alive).
//!
//! Закэшированный таб остаётся смонтированным, пока он не активен.
//! Сброс кэша таба - это увеличение его поколения: UI использует пару
//! `(id, generation)` как ключ представления, поэтому смена поколения
//! пересоздаёт представление сразу, без повторной навигации и таймеров.

use contracts::Tab;
use std::collections::{HashMap, HashSet};

/// Сигнал UI: пересоздать представление таба.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remount {
    pub tab_id: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct KeepAliveTracker {
    excluded_routes: HashSet<String>,
    /// 0 - без ограничения
    max_cached: usize,
    /// Порядок LRU: первый - давно не использовавшийся
    cached: Vec<String>,
    /// Табы последней синхронизации, в порядке реестра
    seen: Vec<(String, Option<String>)>,
    known: HashSet<String>,
    generations: HashMap<String, u64>,
}

impl KeepAliveTracker {
    pub fn new<I, S>(excluded_routes: I, max_cached: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_routes: excluded_routes.into_iter().map(Into::into).collect(),
            max_cached,
            ..Self::default()
        }
    }

    pub fn is_excluded(&self, route_name: Option<&str>) -> bool {
        route_name.is_some_and(|name| self.excluded_routes.contains(name))
    }

    pub fn is_cached(&self, id: &str) -> bool {
        self.cached.iter().any(|c| c == id)
    }

    pub fn cached_ids(&self) -> &[String] {
        &self.cached
    }

    pub fn generation(&self, id: &str) -> u64 {
        self.generations.get(id).copied().unwrap_or_default()
    }

    /// Добавляет новые табы, убирает закрытые.
    pub fn sync(&mut self, tabs: &[Tab]) {
        let open: HashSet<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
        self.cached.retain(|id| open.contains(id.as_str()));
        self.known.retain(|id| open.contains(id.as_str()));
        self.generations.retain(|id, _| open.contains(id.as_str()));

        for tab in tabs {
            if self.known.insert(tab.id.clone()) && !self.is_excluded(tab.route_name()) {
                self.cached.push(tab.id.clone());
            }
        }
        self.seen = tabs
            .iter()
            .map(|t| (t.id.clone(), t.route.name.clone()))
            .collect();
        self.enforce_limit(None);
    }

    /// Отмечает таб как последний использованный.
    pub fn touch(&mut self, id: &str) {
        let Some((_, name)) = self.seen.iter().find(|(seen_id, _)| seen_id == id) else {
            return;
        };
        if self.is_excluded(name.as_deref()) {
            return;
        }
        self.cached.retain(|c| c != id);
        self.cached.push(id.to_string());
        self.enforce_limit(Some(id));
    }

    fn enforce_limit(&mut self, keep: Option<&str>) {
        if self.max_cached == 0 {
            return;
        }
        while self.cached.len() > self.max_cached {
            let Some(pos) = self.cached.iter().position(|c| Some(c.as_str()) != keep) else {
                break;
            };
            let evicted = self.cached.remove(pos);
            log::debug!("keep-alive: evicted '{}'", evicted);
        }
    }

    fn bump(&mut self, id: &str) -> Remount {
        let generation = self.generations.entry(id.to_string()).or_default();
        *generation += 1;
        Remount {
            tab_id: id.to_string(),
            generation: *generation,
        }
    }

    /// Сбрасывает состояние представления таба. `None`, если таб не в кэше.
    pub fn invalidate(&mut self, id: &str) -> Option<Remount> {
        if !self.is_cached(id) {
            return None;
        }
        let remount = self.bump(id);
        log::debug!("keep-alive: remount '{}' gen {}", id, remount.generation);
        Some(remount)
    }

    /// Сбрасывает весь кэш и сразу заполняет его заново.
    pub fn invalidate_all(&mut self) -> Vec<Remount> {
        self.cached.clear();
        let seen = std::mem::take(&mut self.seen);
        let remounts = seen.iter().map(|(id, _)| self.bump(id)).collect();
        for (id, name) in &seen {
            if !self.is_excluded(name.as_deref()) {
                self.cached.push(id.clone());
            }
        }
        self.seen = seen;
        self.enforce_limit(None);
        remounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::RouteTarget;

    fn tab(id: &str, name: &str) -> Tab {
        Tab {
            id: id.to_string(),
            title: id.to_string(),
            title_key: None,
            route: RouteTarget {
                name: Some(name.to_string()),
                ..RouteTarget::new(format!("/{}", name))
            },
            icon: None,
            closable: true,
            meta: Default::default(),
        }
    }

    #[test]
    fn test_sync_skips_excluded_routes() {
        let mut tracker = KeepAliveTracker::new(["login"], 0);
        tracker.sync(&[tab("a", "users"), tab("l", "login")]);
        assert!(tracker.is_cached("a"));
        assert!(!tracker.is_cached("l"));
    }

    #[test]
    fn test_sync_removes_closed_tabs() {
        let mut tracker = KeepAliveTracker::new(Vec::<String>::new(), 0);
        tracker.sync(&[tab("a", "users"), tab("b", "roles")]);
        tracker.sync(&[tab("b", "roles")]);
        assert_eq!(tracker.cached_ids(), ["b".to_string()]);
    }

    #[test]
    fn test_invalidate_bumps_generation_and_stays_cached() {
        let mut tracker = KeepAliveTracker::new(Vec::<String>::new(), 0);
        tracker.sync(&[tab("a", "users")]);
        assert_eq!(tracker.generation("a"), 0);
        let remount = tracker.invalidate("a").unwrap();
        assert_eq!(remount.generation, 1);
        assert_eq!(tracker.generation("a"), 1);
        assert!(tracker.is_cached("a"));
        assert_eq!(tracker.invalidate("missing"), None);
    }

    #[test]
    fn test_invalidate_all_reseeds() {
        let mut tracker = KeepAliveTracker::new(["login"], 0);
        tracker.sync(&[tab("a", "users"), tab("l", "login"), tab("b", "roles")]);
        let remounts = tracker.invalidate_all();
        assert_eq!(remounts.len(), 3);
        assert_eq!(tracker.cached_ids(), ["a".to_string(), "b".to_string()]);
        assert_eq!(tracker.generation("b"), 1);
    }

    #[test]
    fn test_lru_limit() {
        let mut tracker = KeepAliveTracker::new(Vec::<String>::new(), 2);
        let tabs = [tab("a", "a"), tab("b", "b"), tab("c", "c")];
        tracker.sync(&tabs);
        assert_eq!(tracker.cached_ids(), ["b".to_string(), "c".to_string()]);

        // повторная активация возвращает таб в кэш
        tracker.touch("a");
        assert_eq!(tracker.cached_ids(), ["c".to_string(), "a".to_string()]);
        tracker.sync(&tabs);
        assert_eq!(tracker.cached_ids(), ["c".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_closed_and_reopened_is_fresh() {
        let mut tracker = KeepAliveTracker::new(Vec::<String>::new(), 0);
        tracker.sync(&[tab("a", "users")]);
        tracker.invalidate("a");
        tracker.sync(&[]);
        tracker.sync(&[tab("a", "users")]);
        assert!(tracker.is_cached("a"));
        assert_eq!(tracker.generation("a"), 0);
    }
}
