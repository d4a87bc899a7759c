const GAP: &str = "  ";
const MIN_COLUMN: usize = 6;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned plain-text table. Widths count characters, not bytes.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&clip(header, *width), *width)
    }));
    let mut lines = vec![
        header_line.trim_end().to_string(),
        "-".repeat(header_line.trim_end().chars().count()),
    ];

    for row in rows {
        let line = join_cells(widths.iter().enumerate().map(|(index, width)| {
            let cell = clip(row.get(index).map_or("-", String::as_str), *width);
            let padded = pad(&cell, *width);
            if options.color {
                paint(&cell, padded)
            } else {
                padded
            }
        }));
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Narrow the widest column one step at a time until the table fits or
/// every column is at its minimum.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join(GAP)
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped = value.chars().take(width.saturating_sub(1)).collect::<String>();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

/// Colour direction words: green for bullish, red for bearish, yellow for neutral.
fn paint(cell: &str, padded: String) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "bullish" | "true" => "32",
        "bearish" | "false" => "31",
        "neutral" => "33",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["scan-1".into(), "Bull Flag".into(), "Bullish".into()],
            vec![
                "scan-22".into(),
                "Inverse Head and Shoulders".into(),
                "Neutral".into(),
            ],
        ]
    }

    #[test]
    fn columns_line_up() {
        let table = render_table(&["id", "pattern", "trend"], &rows(), PLAIN);
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let trend_at = lines[0].find("trend").unwrap();
        assert_eq!(lines[2].find("Bullish"), Some(trend_at));
        assert_eq!(lines[3].find("Neutral"), Some(trend_at));
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let options = TableOptions {
            max_width: Some(30),
            color: false,
        };
        let table = render_table(&["id", "pattern", "trend"], &rows(), options);
        assert!(table.lines().all(|line| line.chars().count() <= 30));
        assert!(table.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_table(&["a", "b"], &[vec!["x".into()]], PLAIN);
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn color_wraps_direction_words_only() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["id", "pattern", "trend"], &rows(), options);
        assert!(table.contains("\u{1b}[32mBullish"));
        assert!(!table.contains("\u{1b}[32mscan-1"));
    }
}
