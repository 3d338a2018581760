use campus_console::view::{TableBody, TableView};

/// Row limit with precedence: `--limit` flag, then configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> usize {
    usize::try_from(flag.unwrap_or(configured)).unwrap_or(usize::MAX)
}

/// A copy of `view` with at most `limit` rows. Placeholders pass through.
#[must_use]
pub fn limit_rows(view: &TableView, limit: usize) -> TableView {
    let mut limited = view.clone();
    if let TableBody::Rows { rows } = &mut limited.body {
        rows.truncate(limit);
    }
    limited
}

#[cfg(test)]
mod tests {
    use campus_console::view::{Cell, RowViewModel};

    use super::*;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 50), 5);
        assert_eq!(effective_limit(None, 50), 50);
    }

    #[test]
    fn truncates_rows_but_not_placeholders() {
        let rows = (1..=4)
            .map(|id| RowViewModel {
                id,
                cells: vec![Cell::text(Some("x"))],
            })
            .collect();
        let view = TableView::from_rows(&["Name"], rows, "none");
        assert_eq!(limit_rows(&view, 2).rows().len(), 2);

        let empty = TableView::from_rows(&["Name"], Vec::new(), "none");
        assert_eq!(limit_rows(&empty, 0), empty);
    }
}
