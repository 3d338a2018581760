//! Declarative view models consumed by table renderers.
//!
//! Nothing here knows about HTML or terminals: a [`TableView`] is a list of
//! column headers plus either rows of [`Cell`]s or a single placeholder row.

use serde::Serialize;

/// Visual weight of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// Per-row buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Text { text: String },
    Badge { text: String, tone: Tone },
    Actions { actions: Vec<RowAction> },
}

impl Cell {
    /// Text cell; blank or missing values render as `-`.
    #[must_use]
    pub fn text(value: Option<&str>) -> Self {
        let text = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or("-")
            .to_string();
        Self::Text { text }
    }

    #[must_use]
    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            text: text.into(),
            tone,
        }
    }

    /// Count badge; a missing counter shows 0.
    #[must_use]
    pub fn count(value: Option<u64>) -> Self {
        Self::badge(value.unwrap_or(0).to_string(), Tone::Info)
    }

    /// Active/Inactive status badge; a missing flag counts as inactive.
    #[must_use]
    pub fn active(flag: Option<bool>) -> Self {
        if flag.unwrap_or(false) {
            Self::badge("Active", Tone::Success)
        } else {
            Self::badge("Inactive", Tone::Danger)
        }
    }

    #[must_use]
    pub fn actions(actions: &[RowAction]) -> Self {
        Self::Actions {
            actions: actions.to_vec(),
        }
    }

    /// Plain-text rendering used by terminal tables.
    #[must_use]
    pub fn plain(&self) -> String {
        match self {
            Self::Text { text } | Self::Badge { text, .. } => text.clone(),
            Self::Actions { actions } => actions
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

/// One rendered record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowViewModel {
    pub id: i64,
    pub cells: Vec<Cell>,
}

/// Body of a table: rows, or one placeholder row spanning every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
    Rows { rows: Vec<RowViewModel> },
    Placeholder { message: String, colspan: usize },
}

/// A rendered entity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub body: TableBody,
}

impl TableView {
    /// Build a table from rendered rows, falling back to a placeholder row
    /// when there are none.
    #[must_use]
    pub fn from_rows(columns: &[&'static str], rows: Vec<RowViewModel>, empty_message: &str) -> Self {
        let body = if rows.is_empty() {
            TableBody::Placeholder {
                message: empty_message.to_string(),
                colspan: columns.len(),
            }
        } else {
            TableBody::Rows { rows }
        };
        Self {
            columns: columns.to_vec(),
            body,
        }
    }

    /// Table shown before the first load completes.
    #[must_use]
    pub fn loading(columns: &[&'static str]) -> Self {
        Self {
            columns: columns.to_vec(),
            body: TableBody::Placeholder {
                message: "Loading...".to_string(),
                colspan: columns.len(),
            },
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[RowViewModel] {
        match &self.body {
            TableBody::Rows { rows } => rows,
            TableBody::Placeholder { .. } => &[],
        }
    }

    /// Number of `<tr>` elements the body would contain.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows { rows } => rows.len(),
            TableBody::Placeholder { .. } => 1,
        }
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self.body, TableBody::Placeholder { .. })
    }
}

/// One `<option>` of a select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Empty for the "all" option.
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn all(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// A dashboard statistics card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_become_one_placeholder_spanning_all_columns() {
        let table = TableView::from_rows(&["a", "b", "c"], Vec::new(), "Nothing here");
        assert_eq!(table.row_count(), 1);
        assert_eq!(
            table.body,
            TableBody::Placeholder {
                message: "Nothing here".into(),
                colspan: 3
            }
        );
        assert!(table.rows().is_empty());
    }

    #[test]
    fn blank_text_renders_dash() {
        assert_eq!(Cell::text(None).plain(), "-");
        assert_eq!(Cell::text(Some("  ")).plain(), "-");
        assert_eq!(Cell::text(Some("Batna")).plain(), "Batna");
    }

    #[test]
    fn missing_count_is_zero_and_missing_flag_inactive() {
        assert_eq!(Cell::count(None).plain(), "0");
        assert_eq!(Cell::active(None), Cell::badge("Inactive", Tone::Danger));
    }

    #[test]
    fn actions_render_joined() {
        let cell = Cell::actions(&[RowAction::Edit, RowAction::Delete]);
        assert_eq!(cell.plain(), "edit/delete");
    }
}
