//! Logical admin routes and their paths.

use serde::Serialize;
use sr_core::TargetId;
use urlencoding::encode;

pub const ADMIN_BASE: &str = "/admin/config/user-interface/scrollreveal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    List {
        search: Option<String>,
        /// Raw status parameter: `1`, `0` or blank.
        status: Option<String>,
    },
    Add,
    Edit(TargetId),
    Delete(TargetId),
    Duplicate(TargetId),
    Settings,
}

impl Route {
    /// The unfiltered list.
    pub fn list() -> Self {
        Route::List {
            search: None,
            status: None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List { search, status } => {
                let mut params = Vec::new();
                if let Some(search) = search {
                    params.push(format!("search={}", encode(search)));
                }
                if let Some(status) = status {
                    params.push(format!("status={}", encode(status)));
                }
                if params.is_empty() {
                    ADMIN_BASE.to_string()
                } else {
                    format!("{ADMIN_BASE}?{}", params.join("&"))
                }
            }
            Route::Add => format!("{ADMIN_BASE}/add"),
            Route::Edit(id) => format!("{ADMIN_BASE}/edit/{id}"),
            Route::Delete(id) => format!("{ADMIN_BASE}/delete/{id}"),
            Route::Duplicate(id) => format!("{ADMIN_BASE}/duplicate/{id}"),
            Route::Settings => format!("{ADMIN_BASE}/settings"),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_list_has_no_query() {
        assert_eq!(Route::list().path(), ADMIN_BASE);
    }

    #[test]
    fn list_query_is_encoded() {
        let route = Route::List {
            search: Some("hero banner".into()),
            status: Some("1".into()),
        };
        assert_eq!(
            route.path(),
            "/admin/config/user-interface/scrollreveal?search=hero%20banner&status=1"
        );
    }

    #[test]
    fn id_routes() {
        let id = TargetId::new(5);
        assert_eq!(Route::Edit(id).path(), format!("{ADMIN_BASE}/edit/5"));
        assert_eq!(Route::Delete(id).path(), format!("{ADMIN_BASE}/delete/5"));
        assert_eq!(Route::Duplicate(id).path(), format!("{ADMIN_BASE}/duplicate/5"));
    }
}
