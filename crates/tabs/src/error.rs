use thiserror::Error;

/// Ошибки навигации, полученные от роутера.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Роутер уже находится в этой точке; для табов это успешный no-op.
    #[error("Navigation duplicated: {path}")]
    Duplicated { path: String },

    #[error("Navigation aborted: {path}")]
    Aborted { path: String },

    #[error("Navigation cancelled: {path}")]
    Cancelled { path: String },

    #[error("Navigation failed: {0}")]
    Failed(String),
}

impl NavigationError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, NavigationError::Duplicated { .. })
    }
}
