pub mod table;

pub use table::{resolve, resolve_url, RouteDef, ROUTES};
