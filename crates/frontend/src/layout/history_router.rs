//! `Router` поверх браузерного History API.

use crate::routes;
use async_trait::async_trait;
use contracts::{NavigationMode, RouteLocation, RouteTarget};
use tab_session::{NavigationError, Router};
use wasm_bindgen::JsValue;
use web_sys::window;

#[derive(Debug, Clone, Copy, Default)]
pub struct HistoryRouter;

fn js_error(err: JsValue) -> NavigationError {
    NavigationError::Failed(format!("{:?}", err))
}

#[async_trait(?Send)]
impl Router for HistoryRouter {
    fn current_route(&self) -> RouteLocation {
        let Some(location) = window().map(|w| w.location()) else {
            return routes::resolve("/", "");
        };
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        routes::resolve(&path, &search)
    }

    async fn navigate(&self, target: &RouteTarget, mode: NavigationMode) -> Result<(), NavigationError> {
        let url = target.full_path();
        if self.current_route().full_path() == url {
            return Err(NavigationError::Duplicated { path: url });
        }
        let history = window()
            .ok_or_else(|| NavigationError::Failed("window is not available".to_string()))?
            .history()
            .map_err(js_error)?;
        let result = match mode {
            NavigationMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(&url)),
            NavigationMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(&url)),
        };
        result.map_err(js_error)
    }
}
