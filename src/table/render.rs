//! Plain-text rendering of a [`TableView`].

use super::{TableView, Tone};

/// Render `view` as left-aligned, space-padded columns. Good cells get a
/// trailing `+`, bad cells a trailing `-`.
pub fn render_table(view: &TableView) -> String {
    let texts: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.tone {
                    Tone::Good => format!("{}+", cell.text),
                    Tone::Bad => format!("{}-", cell.text),
                    Tone::Plain => cell.text.clone(),
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = view.headers.iter().map(|h| h.chars().count()).collect();
    for row in &texts {
        for (i, text) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(text.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, view.headers.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &texts {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(text, w)| {
            let pad = w.saturating_sub(text.chars().count());
            format!("{}{}", text, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
