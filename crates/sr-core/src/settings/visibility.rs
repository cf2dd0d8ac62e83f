use super::model::{VisibilityMode, VisibilitySettings};

/// Sentinel pattern that stands for the site front page.
pub const FRONT_PAGE: &str = "<front>";

/// Splits a one-path-per-line textarea value into patterns.
pub fn pages_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn pages_to_text(pages: &[String]) -> String {
    pages.join("\n")
}

/// Glob match where `*` matches any run of characters, including `/`.
fn glob_matches(pattern: &str, path: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == path;
    }

    let (first, rest) = (parts[0], &parts[1..]);
    let Some(mut remaining) = path.strip_prefix(first) else {
        return false;
    };

    let last = rest[rest.len() - 1];
    for part in &rest[..rest.len() - 1] {
        match remaining.find(part) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }
    remaining.len() >= last.len() && remaining.ends_with(last)
}

impl VisibilitySettings {
    /// Whether `path` matches any configured page pattern.
    pub fn matches(&self, path: &str, front_path: &str) -> bool {
        let path = path.trim();
        self.pages.iter().any(|pattern| {
            if pattern == FRONT_PAGE {
                path == front_path || path == "/" || path.is_empty()
            } else {
                glob_matches(pattern, path)
            }
        })
    }

    /// Whether the client library should be attached on `path`.
    pub fn is_visible(&self, path: &str, front_path: &str) -> bool {
        let listed = self.matches(path, front_path);
        match self.mode {
            VisibilityMode::AllExcept => !listed,
            VisibilityMode::OnlyListed => listed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(mode: VisibilityMode, pages: &[&str]) -> VisibilitySettings {
        VisibilitySettings {
            mode,
            pages: pages.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn empty_deny_list_shows_everywhere() {
        let vis = settings(VisibilityMode::AllExcept, &[]);
        assert!(vis.is_visible("/node/1", "/node/1"));
    }

    #[test]
    fn empty_allow_list_shows_nowhere() {
        let vis = settings(VisibilityMode::OnlyListed, &[]);
        assert!(!vis.is_visible("/node/1", "/home"));
    }

    #[test]
    fn wildcard_covers_sub_paths() {
        let vis = settings(VisibilityMode::AllExcept, &["/admin/*"]);
        assert!(!vis.is_visible("/admin/config/user-interface", "/home"));
        assert!(vis.is_visible("/administrator", "/home"));
        assert!(vis.is_visible("/user/1", "/home"));
    }

    #[test]
    fn inner_wildcard() {
        let vis = settings(VisibilityMode::OnlyListed, &["/user/*/edit"]);
        assert!(vis.is_visible("/user/12/edit", "/home"));
        assert!(!vis.is_visible("/user/12/view", "/home"));
    }

    #[test]
    fn front_sentinel_matches_front_path() {
        let vis = settings(VisibilityMode::OnlyListed, &["<front>"]);
        assert!(vis.is_visible("/home", "/home"));
        assert!(vis.is_visible("/", "/home"));
        assert!(!vis.is_visible("/about", "/home"));
    }

    #[test]
    fn textarea_round_trip_skips_blank_lines() {
        let pages = pages_from_text("/admin/*\n\n  <front>  \n");
        assert_eq!(pages, vec!["/admin/*".to_string(), "<front>".to_string()]);
        assert_eq!(pages_to_text(&pages), "/admin/*\n<front>");
    }
}
