use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::warn;

use crate::core::LabelSet;

/// Graphviz source for the final percentage table: a `digraph` wrapping a
/// plaintext HTML table node.
///
/// Cell coloring highlights settled pairs: darkgreen for shares in
/// (79, 101) — effectively certain — and red for shares in (−1, 1) —
/// effectively excluded.
#[must_use]
pub fn dot_table(set_a: &LabelSet, set_b: &LabelSet, values: &[f64], color: bool) -> String {
    let m = set_b.len();
    let mut out = String::from("digraph structs { node[shape=plaintext] struct[label=<\n");
    out.push_str("<table cellspacing=\"2\" border=\"0\" rows=\"*\" columns=\"*\">\n");

    out.push_str("<tr><td></td>");
    for b in set_b.labels() {
        out.push_str(&format!("<td><B>{b}</B></td>"));
    }
    out.push_str("</tr>\n");

    for (a, label) in set_a.labels().iter().enumerate() {
        out.push_str(&format!("<tr><td><B>{label}</B></td>"));
        for b in 0..m {
            let value = values[a * m + b];
            let font = if color && value > 79.0 && value < 101.0 {
                "darkgreen"
            } else if color && value > -1.0 && value < 1.0 {
                "red"
            } else {
                "black"
            };
            out.push_str(&format!(
                "<td><font color=\"{font}\">{value:.2}</font></td>"
            ));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n>];}\n");
    out
}

/// Write the dot source to `<stem>_tab.dot` and return its path.
///
/// # Errors
///
/// Propagates the underlying file I/O failure.
pub fn write_dot(stem: &Path, source: &str) -> std::io::Result<PathBuf> {
    let path = stem_with(stem, "_tab.dot");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(source.as_bytes())?;
    Ok(path)
}

/// Render `<stem>_tab.pdf` and `<stem>_tab.png` from the dot file by
/// spawning the external `dot` tool. A missing or failing Graphviz
/// installation is reported as a warning; the run's results do not depend
/// on it.
pub fn render_graphviz(stem: &Path, dot_path: &Path) {
    for format in ["pdf", "png"] {
        let out = stem_with(stem, &format!("_tab.{format}"));
        match Command::new("dot")
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(&out)
            .arg(dot_path)
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("dot exited with {status} rendering {}", out.display()),
            Err(err) => warn!("Failed to spawn dot for {}: {err}", out.display()),
        }
    }
}

/// `stem_with("out/run3", "_tab.dot")` → `out/run3_tab.dot`.
pub(crate) fn stem_with(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = stem.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
