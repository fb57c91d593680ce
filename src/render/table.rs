use crate::core::LabelSet;
use crate::engine::report::{ConstraintSummary, SimReport};

#[inline]
fn count_to_f64(count: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Right-align `columns` of pre-rendered cells under a header row.
fn aligned(header: &[String], rows: &[Vec<String>]) -> String {
    let cols = header.len();
    let widths: Vec<usize> = (0..cols)
        .map(|c| {
            rows.iter()
                .map(|r| r[c].len())
                .chain(std::iter::once(header[c].len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in std::iter::once(header).chain(rows.iter().map(Vec::as_slice)) {
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                out.push_str("  ");
            }
            // first column (labels) left-aligned, the rest right-aligned
            if c == 0 {
                out.push_str(&format!("{cell:<width$}", width = widths[c]));
            } else {
                out.push_str(&format!("{cell:>width$}", width = widths[c]));
            }
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }
    out
}

/// Render an n×m percentage table with its `N left -> B bits left` footer.
#[must_use]
pub fn percent_table(
    set_a: &LabelSet,
    set_b: &LabelSet,
    values: &[f64],
    remaining: u64,
) -> String {
    let m = set_b.len();
    let header: Vec<String> = std::iter::once(String::new())
        .chain(set_b.labels().iter().cloned())
        .collect();
    let rows: Vec<Vec<String>> = set_a
        .labels()
        .iter()
        .enumerate()
        .map(|(a, label)| {
            std::iter::once(label.clone())
                .chain((0..m).map(|b| format!("{:.2}", values[a * m + b])))
                .collect()
        })
        .collect();

    let mut out = aligned(&header, &rows);
    out.push_str(&format!(
        "{remaining} left -> {} bits left\n",
        count_to_f64(remaining).log2()
    ));
    out
}

/// Render one constraint's block: the observation header, its proposal,
/// the information gained, and the remaining-table after it.
#[must_use]
pub fn constraint_block(summary: &ConstraintSummary, set_a: &LabelSet, set_b: &LabelSet) -> String {
    let mut out = format!(
        "{} {} {}\n",
        summary.lights,
        summary.title(),
        summary.comment
    );
    for (a, b) in &summary.map {
        out.push_str(&format!("{a} -> {b}\n"));
    }
    out.push_str(&format!("-> I = {}\n", summary.entropy));
    out.push_str(&percent_table(
        set_a,
        set_b,
        &summary.percentages,
        summary.remaining,
    ));
    out
}

/// One row per constraint: identifier, lights, the proposed B label under
/// each A column, and the information gained.
#[must_use]
pub fn overview_table(report: &SimReport) -> String {
    let header: Vec<String> = std::iter::once(String::new())
        .chain(std::iter::once("R".to_string()))
        .chain(report.set_a.labels().iter().cloned())
        .chain(std::iter::once("I".to_string()))
        .collect();

    let rows: Vec<Vec<String>> = report
        .constraints
        .iter()
        .map(|c| {
            std::iter::once(c.title())
                .chain(std::iter::once(c.lights.to_string()))
                .chain(
                    report
                        .set_a
                        .labels()
                        .iter()
                        .map(|a| c.proposed(a).unwrap_or_default().to_string()),
                )
                .chain(std::iter::once(c.entropy.to_string()))
                .collect()
        })
        .collect();

    aligned(&header, &rows)
}
