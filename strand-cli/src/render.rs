//! Terminal rendering: colored bases and a text frequency chart.

use strand_seq::FrequencyTable;

const RESET: &str = "\x1b[0m";

/// ANSI color for a base: A red, T green, G yellow, C blue.
fn base_color(base: u8) -> Option<&'static str> {
    match base {
        b'A' => Some("\x1b[31m"),
        b'T' => Some("\x1b[32m"),
        b'G' => Some("\x1b[33m"),
        b'C' => Some("\x1b[34m"),
        _ => None,
    }
}

/// Render bases, each wrapped in its color when `color` is set.
pub fn colored_sequence(bases: &[u8], color: bool) -> String {
    let mut out = String::with_capacity(bases.len() * 6 + RESET.len());
    for &b in bases {
        match base_color(b).filter(|_| color) {
            Some(code) => {
                out.push_str(code);
                out.push(b as char);
            }
            None => out.push(b as char),
        }
    }
    if color {
        out.push_str(RESET);
    }
    out
}

/// Horizontal bar chart of base counts, one line per base.
///
/// The largest count spans `width` cells; others scale proportionally, and a
/// non-zero count always gets at least one cell.
pub fn frequency_chart(table: &FrequencyTable, width: usize, color: bool) -> String {
    let max = table.iter().map(|(_, c)| c).max().unwrap_or(0);
    let count_width = max.to_string().len();
    let mut out = String::new();
    for (base, count) in table.iter() {
        let cells = bar_cells(count, max, width);
        let bar = "█".repeat(cells);
        let bar = match base_color(base.to_byte()).filter(|_| color) {
            Some(code) => format!("{code}{bar}{RESET}"),
            None => bar,
        };
        out.push_str(&format!(
            "{base} │ {count:>count_width$} {bar}\n",
        ));
    }
    out
}

fn bar_cells(count: usize, max: usize, width: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * width / max).max(1)
}

/// Quote and bracket a list the way it is echoed back to the user.
pub fn bracketed<S: AsRef<str>>(items: &[S]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{}'", s.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}
