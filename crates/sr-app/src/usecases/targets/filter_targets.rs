//! Filter sub-form of the admin list.

use crate::routes::Route;

/// Longest search text the filter accepts.
pub const SEARCH_MAX_LEN: usize = 128;

pub struct FilterTargets;

impl FilterTargets {
    /// Redirects to the list with the trimmed search text and raw status.
    pub fn submit(search: &str, status: &str) -> Route {
        let search: String = search.trim().chars().take(SEARCH_MAX_LEN).collect();
        Route::List {
            search: Some(search),
            status: Some(status.trim().to_string()),
        }
    }

    /// Clears both filters.
    pub fn reset() -> Route {
        Route::list()
    }
}
