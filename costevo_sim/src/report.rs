//! Plain-text views of a DSM.

use costevo_core::{ComponentLabels, Dsm};
use std::fmt::Write;

/// Renders the DSM as a labelled grid, `1` marking "row depends on column".
///
/// ```text
///   |A|B|C|
/// A |0|1|0|
/// B |0|0|1|
/// C |0|0|0|
/// ```
pub fn render_dsm(dsm: &Dsm, labels: &ComponentLabels) -> String {
    let n = dsm.size();
    let width = labels.as_slice().iter().map(String::len).max().unwrap_or(1);

    let mut out = String::new();
    let _ = write!(out, "{:w$} |", "", w = width);
    for j in 0..n {
        let _ = write!(out, "{:>w$}|", labels.get(j).unwrap_or("?"), w = width);
    }
    out.push('\n');

    for i in 0..n {
        let _ = write!(out, "{:w$} |", labels.get(i).unwrap_or("?"), w = width);
        for j in 0..n {
            let cell = if dsm.depends_on(i, j) { "1" } else { "0" };
            let _ = write!(out, "{:>w$}|", cell, w = width);
        }
        out.push('\n');
    }
    out
}

/// Describes every dependency in words, one line each.
pub fn describe_dependencies(dsm: &Dsm, labels: &ComponentLabels) -> Vec<String> {
    let lines: Vec<String> = dsm
        .edges()
        .map(|(i, j)| {
            format!(
                "Changing {} requires changing {}.",
                labels.get(i).unwrap_or("?"),
                labels.get(j).unwrap_or("?")
            )
        })
        .collect();

    if lines.is_empty() {
        vec!["No dependencies were generated.".to_string()]
    } else {
        lines
    }
}

/// One line per component with its outgoing dependency count.
pub fn outgoing_summary(dsm: &Dsm, labels: &ComponentLabels) -> Vec<String> {
    dsm.outgoing_counts()
        .into_iter()
        .enumerate()
        .map(|(i, count)| format!("{}: {} outgoing", labels.get(i).unwrap_or("?"), count))
        .collect()
}
