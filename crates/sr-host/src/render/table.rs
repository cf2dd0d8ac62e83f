//! Plain-text rendering of the admin list and the library status.

use std::fmt::Write;

use sr_app::usecases::settings::LibraryStatus;
use sr_app::usecases::targets::TargetListView;

const HEADERS: [&str; 5] = ["Selector", "Label", "Status", "Updated", "Operations"];

pub fn render_target_table(view: &TargetListView) -> String {
    let mut out = String::new();

    if view.rows.is_empty() {
        let _ = writeln!(out, "{} Add target: {}", view.empty_text, view.add_route);
    } else {
        let rows: Vec<[String; 5]> = view
            .rows
            .iter()
            .map(|row| {
                let ops: Vec<String> = row
                    .operations
                    .iter()
                    .map(|op| format!("{} {}", op.title, op.route))
                    .collect();
                [
                    row.selector.clone(),
                    row.label.clone(),
                    row.status.to_string(),
                    row.changed.clone(),
                    ops.join(" | "),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let line = |cells: &[String]| {
            cells
                .iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let headers = HEADERS.map(String::from);
        let _ = writeln!(out, "{}", line(&headers[..]));
        for row in &rows {
            let _ = writeln!(out, "{}", line(&row[..]));
        }
    }

    let _ = writeln!(
        out,
        "Page {} of {} ({} targets)",
        view.pager.page + 1,
        view.pager.total_pages.max(1),
        view.pager.total
    );
    if view.filter.show_reset {
        let _ = writeln!(
            out,
            "Filtered by search \"{}\" status \"{}\"",
            view.filter.search, view.filter.status
        );
    }
    out
}

pub fn render_library_status(status: &LibraryStatus) -> String {
    let mut out = format!(
        "installed: {}\nmethod: {:?}\nurl: {}\n",
        status.installed, status.method, status.url
    );
    if let Some(warning) = &status.warning {
        let _ = writeln!(out, "warning: {}", warning.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_app::usecases::targets::list_targets::{FilterState, Pager};
    use sr_app::Route;

    fn empty_view() -> TargetListView {
        TargetListView {
            rows: vec![],
            pager: Pager {
                page: 0,
                total_pages: 0,
                total: 0,
            },
            filter: FilterState {
                search: String::new(),
                status: String::new(),
                show_reset: false,
            },
            empty_text: "No ScrollReveal targets available.".into(),
            add_route: Route::Add,
        }
    }

    #[test]
    fn empty_list_prints_placeholder() {
        let out = render_target_table(&empty_view());
        assert!(out.starts_with(
            "No ScrollReveal targets available. Add target: /admin/config/user-interface/scrollreveal/add\n"
        ));
        assert!(out.contains("Page 1 of 1 (0 targets)"));
    }
}
