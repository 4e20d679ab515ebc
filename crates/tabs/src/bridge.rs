//! Мост между запросами реестра и внешним роутером.

use crate::error::NavigationError;
use crate::registry::{NavRequest, TabRegistry};
use async_trait::async_trait;
use contracts::{NavigationMode, RouteLocation, RouteTarget};

/// Внешний роутер.
#[async_trait(?Send)]
pub trait Router {
    fn current_route(&self) -> RouteLocation;

    async fn navigate(&self, target: &RouteTarget, mode: NavigationMode) -> Result<(), NavigationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Navigated,
    /// Роутер уже был в этой точке
    AlreadyThere,
    /// Запроса не было или он устарел
    Skipped,
}

pub struct NavigationBridge<R> {
    router: R,
}

impl<R: Router> NavigationBridge<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Запрос к табу устарел, если таба нет, его цель изменилась
    /// или он больше не активен.
    pub fn is_fresh(&self, registry: &TabRegistry, request: &NavRequest) -> bool {
        let Some(tab_id) = request.tab_id.as_deref() else {
            return true;
        };
        registry.active_id() == Some(tab_id)
            && registry.get(tab_id).is_some_and(|tab| tab.route == request.target)
    }

    pub async fn navigate(&self, request: &NavRequest) -> Result<NavOutcome, NavigationError> {
        let path = request.target.full_path();
        if self.router.current_route().full_path() == path {
            log::debug!("navigation: already at '{}'", path);
            return Ok(NavOutcome::AlreadyThere);
        }
        match self.router.navigate(&request.target, request.mode).await {
            Ok(()) => Ok(NavOutcome::Navigated),
            Err(err) if err.is_duplicate() => Ok(NavOutcome::AlreadyThere),
            Err(err) => {
                log::warn!("navigation to '{}' failed: {}", path, err);
                Err(err)
            }
        }
    }

    pub async fn dispatch(
        &self,
        registry: &TabRegistry,
        request: Option<NavRequest>,
    ) -> Result<NavOutcome, NavigationError> {
        let Some(request) = request else {
            return Ok(NavOutcome::Skipped);
        };
        if !self.is_fresh(registry, &request) {
            log::debug!("navigation: stale request to '{}'", request.target.full_path());
            return Ok(NavOutcome::Skipped);
        }
        self.navigate(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabsConfig;
    use crate::registry::Upsert;
    use crate::session::TabSession;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockRouter {
        current: RefCell<RouteLocation>,
        calls: RefCell<Vec<(String, NavigationMode)>>,
        reject_with: RefCell<Option<NavigationError>>,
    }

    impl MockRouter {
        fn at(path: &str) -> Self {
            let router = Self::default();
            *router.current.borrow_mut() = RouteLocation::new(path);
            router
        }
    }

    #[async_trait(?Send)]
    impl Router for MockRouter {
        fn current_route(&self) -> RouteLocation {
            self.current.borrow().clone()
        }

        async fn navigate(&self, target: &RouteTarget, mode: NavigationMode) -> Result<(), NavigationError> {
            self.calls.borrow_mut().push((target.full_path(), mode));
            if let Some(err) = self.reject_with.borrow().clone() {
                return Err(err);
            }
            *self.current.borrow_mut() = RouteLocation {
                route: target.clone(),
                ..RouteLocation::default()
            };
            Ok(())
        }
    }

    fn location(name: &str) -> RouteLocation {
        RouteLocation::new(format!("/{}", name)).named(name)
    }

    fn session_with(names: &[&str]) -> TabSession {
        let mut session = TabSession::new(&TabsConfig::default());
        for name in names {
            session.handle_navigation(&location(name), None);
        }
        session
    }

    fn id_of(session: &TabSession, name: &str) -> String {
        session.registry().id_for(&location(name).route)
    }

    #[tokio::test]
    async fn test_activate_navigates() {
        let bridge = NavigationBridge::new(MockRouter::at("/b"));
        let mut session = session_with(&["a", "b"]);
        let request = session.activate(&id_of(&session, "a"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Ok(NavOutcome::Navigated));
        assert_eq!(*bridge.router().calls.borrow(), [("/a".to_string(), NavigationMode::Push)]);
        assert_eq!(bridge.router().current_route().full_path(), "/a");
    }

    #[tokio::test]
    async fn test_close_navigates_with_replace() {
        let bridge = NavigationBridge::new(MockRouter::at("/b"));
        let mut session = session_with(&["a", "b"]);
        let request = session.close(&id_of(&session, "b"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Ok(NavOutcome::Navigated));
        assert_eq!(*bridge.router().calls.borrow(), [("/a".to_string(), NavigationMode::Replace)]);
    }

    #[tokio::test]
    async fn test_already_at_target_is_noop() {
        let bridge = NavigationBridge::new(MockRouter::at("/a"));
        let mut session = session_with(&["a", "b"]);
        let request = session.activate(&id_of(&session, "a"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Ok(NavOutcome::AlreadyThere));
        assert!(bridge.router().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_rejection_is_success() {
        let router = MockRouter::at("/b");
        *router.reject_with.borrow_mut() = Some(NavigationError::Duplicated { path: "/a".into() });
        let bridge = NavigationBridge::new(router);
        let mut session = session_with(&["a", "b"]);
        let request = session.activate(&id_of(&session, "a"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Ok(NavOutcome::AlreadyThere));
    }

    #[tokio::test]
    async fn test_other_rejection_propagates() {
        let router = MockRouter::at("/b");
        *router.reject_with.borrow_mut() = Some(NavigationError::Aborted { path: "/a".into() });
        let bridge = NavigationBridge::new(router);
        let mut session = session_with(&["a", "b"]);
        let request = session.activate(&id_of(&session, "a"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Err(NavigationError::Aborted { path: "/a".into() }));
    }

    #[tokio::test]
    async fn test_stale_request_is_skipped() {
        let bridge = NavigationBridge::new(MockRouter::at("/c"));
        let mut session = session_with(&["a", "b", "c"]);
        let request = session.activate(&id_of(&session, "a"));
        // пользователь успел переключиться до выполнения запроса
        session.activate(&id_of(&session, "b"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Ok(NavOutcome::Skipped));

        let request = session.activate(&id_of(&session, "a"));
        session.close(&id_of(&session, "a"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Ok(NavOutcome::Skipped));
        assert!(bridge.router().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_request_with_changed_target_is_skipped() {
        let bridge = NavigationBridge::new(MockRouter::at("/b"));
        let mut session = session_with(&["a", "b"]);
        let mut request = session.activate(&id_of(&session, "a")).unwrap();
        request.target.query.insert("page".to_string(), "2".to_string());
        assert!(!bridge.is_fresh(session.registry(), &request));

        let outcome = bridge.dispatch(session.registry(), Some(request)).await;
        assert_eq!(outcome, Ok(NavOutcome::Skipped));
        assert!(bridge.router().calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_menu_link_recreates_tab_after_failed_close() {
        let bridge = NavigationBridge::new(MockRouter::at("/b"));
        let mut session = session_with(&["a", "b"]);
        *bridge.router().reject_with.borrow_mut() = Some(NavigationError::Failed("blocked".into()));
        let request = session.close(&id_of(&session, "b"));
        assert!(bridge.dispatch(session.registry(), request).await.is_err());
        assert!(session.registry().get(&id_of(&session, "b")).is_none());

        // URL остался на "/b": ссылка меню на ту же страницу
        *bridge.router().reject_with.borrow_mut() = None;
        let open = NavRequest {
            tab_id: None,
            target: location("b").route,
            mode: NavigationMode::Push,
        };
        let outcome = bridge.dispatch(session.registry(), Some(open)).await;
        assert_eq!(outcome, Ok(NavOutcome::AlreadyThere));

        let upsert = session.handle_navigation(&location("b"), None);
        assert!(matches!(upsert, Some(Upsert::Created { .. })));
        assert_eq!(session.registry().active_id(), Some(id_of(&session, "b").as_str()));
    }

    #[tokio::test]
    async fn test_no_request_is_skipped() {
        let bridge = NavigationBridge::new(MockRouter::at("/a"));
        let session = session_with(&["a"]);
        let outcome = bridge.dispatch(session.registry(), None).await;
        assert_eq!(outcome, Ok(NavOutcome::Skipped));
    }

    #[tokio::test]
    async fn test_home_request_after_last_close() {
        let bridge = NavigationBridge::new(MockRouter::at("/a"));
        let mut session = session_with(&["a"]);
        let request = session.close(&id_of(&session, "a"));
        let outcome = bridge.dispatch(session.registry(), request).await;
        assert_eq!(outcome, Ok(NavOutcome::Navigated));
        assert_eq!(bridge.router().current_route().full_path(), "/dashboards/crm");
    }

    #[tokio::test]
    async fn test_after_navigation_round_trip() {
        let bridge = NavigationBridge::new(MockRouter::at("/a"));
        let mut session = session_with(&["a"]);
        let request = session.close(&id_of(&session, "a"));
        bridge.dispatch(session.registry(), request).await.unwrap();

        // роутер сообщает о завершённой навигации
        let landed = bridge.router().current_route().named("dashboards-crm");
        session.handle_navigation(&landed, None);
        let home = session.registry().active_tab().unwrap();
        assert!(!home.closable);
        assert_eq!(home.path(), "/dashboards/crm");
    }
}
