use campus_console::view::{Cell, TableBody, TableView, Tone};

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_WIDTH: usize = 4;

/// Render a dashboard table: header, divider, one line per row. A
/// placeholder body prints its message under the header.
#[must_use]
pub fn render_view(view: &TableView, options: TableOptions) -> String {
    match &view.body {
        TableBody::Rows { rows } => {
            let cells: Vec<&[Cell]> = rows.iter().map(|row| row.cells.as_slice()).collect();
            render_cells(&view.columns, &cells, options)
        }
        TableBody::Placeholder { message, .. } => {
            let header = render_cells(&view.columns, &[], options);
            format!("{header}\n{message}")
        }
    }
}

/// Render plain string rows under `headers`.
#[must_use]
pub fn render_plain(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| row.iter().map(|text| Cell::text(Some(text))).collect())
        .collect();
    let refs: Vec<&[Cell]> = cells.iter().map(Vec::as_slice).collect();
    render_cells(headers, &refs, options)
}

fn render_cells(headers: &[&str], rows: &[&[Cell]], options: TableOptions) -> String {
    let texts: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(Cell::plain).collect())
        .collect();

    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            texts
                .iter()
                .filter_map(|row| row.get(index))
                .map(|text| text.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_WIDTH)
        })
        .collect();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.trim_end().chars().count());

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    for (row, text) in rows.iter().zip(&texts) {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let value = truncate(text.get(index).map_or("-", String::as_str), width);
                let cell = row.get(index);
                let numeric = matches!(cell, Some(Cell::Badge { tone: Tone::Info, .. }))
                    && value.chars().all(|ch| ch.is_ascii_digit());
                let padded = pad(&value, width, numeric);
                match cell {
                    Some(Cell::Badge { tone, .. }) if options.color => paint(&padded, *tone),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest column one character at a time until the line fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn paint(value: &str, tone: Tone) -> String {
    let code = match tone {
        Tone::Success => "32",
        Tone::Warning => "33",
        Tone::Danger => "31",
        Tone::Info => "36",
        Tone::Neutral => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use campus_console::view::{RowViewModel, TableView};
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn view() -> TableView {
        TableView::from_rows(
            &["Name", "Users", "Status"],
            vec![RowViewModel {
                id: 1,
                cells: vec![
                    Cell::text(Some("Université de Batna 2")),
                    Cell::count(Some(1200)),
                    Cell::active(Some(true)),
                ],
            }],
            "No universities found",
        )
    }

    #[test]
    fn rows_align_under_headers() {
        let out = render_view(&view(), PLAIN);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("Université de Batna 2   1200"));
        assert!(lines[2].ends_with("Active"));
    }

    #[test]
    fn placeholder_prints_message() {
        let empty = TableView::from_rows(&["Name", "Code"], Vec::new(), "No faculties found");
        let out = render_view(&empty, PLAIN);
        assert_eq!(out.lines().last(), Some("No faculties found"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let out = render_view(&view(), options);
        assert!(out.contains('…'));
        assert!(out.lines().all(|line| line.chars().count() <= 30));
    }

    #[test]
    fn color_wraps_badges_only() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let out = render_view(&view(), options);
        assert!(out.contains("\u{1b}[32mActive"));
        assert!(!out.lines().next().unwrap_or_default().contains('\u{1b}'));
    }

    #[test]
    fn plain_rows_render_dash_for_blank() {
        let out = render_plain(&["key", "value"], &[vec!["name".into(), String::new()]], PLAIN);
        assert!(out.lines().nth(2).is_some_and(|line| line.ends_with('-')));
    }
}
