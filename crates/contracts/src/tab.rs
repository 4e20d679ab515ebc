use crate::meta::Meta;
use crate::route::RouteTarget;
use serde::{Deserialize, Serialize};

/// Открытый таб: одна логическая страница рабочего пространства.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    /// Текущий текст заголовка (может быть ключом локализации до перевода).
    pub title: String,
    /// Ключ локализации; заголовок пересчитывается из него при смене языка.
    pub title_key: Option<String>,
    pub route: RouteTarget,
    pub icon: Option<String>,
    /// `false` для закреплённых табов.
    pub closable: bool,
    #[serde(default)]
    pub meta: Meta,
}

impl Tab {
    pub fn path(&self) -> String {
        self.route.full_path()
    }

    pub fn route_name(&self) -> Option<&str> {
        self.route.name.as_deref()
    }

    pub fn pinned(&self) -> bool {
        !self.closable
    }
}
