use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::GameDocument;
use crate::core::ConstraintKind;
use crate::engine::game::RunOptions;
use crate::engine::report::SimReport;
use crate::render::{dot, table};

#[derive(Args)]
pub struct SolveArgs {
    /// Input game description (YAML)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write <STEM>_tab.dot (plus PDF/PNG via Graphviz) and the
    /// <STEM>_stat*.out series files
    #[arg(short = 'o', long)]
    pub output_stem: Option<PathBuf>,

    /// Dump every accepted matching, in generation order, to this file
    #[arg(short, long)]
    pub matchings: Option<PathBuf>,
}

/// Execute the solve subcommand.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the constraint list
/// is contradictory, or an output file cannot be written.
pub fn run(args: SolveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let game = GameDocument::load(&args.input)?;

    if verbose {
        eprintln!(
            "Loaded {} x {} labels and {} constraints from {}",
            game.set_a().len(),
            game.set_b().len(),
            game.constraints().len(),
            args.input.display()
        );
    }

    let report = game.run(RunOptions {
        collect_matchings: args.matchings.is_some(),
    })?;

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    if let Some(path) = &args.matchings {
        write_matchings(path, &report)?;
        if verbose {
            eprintln!("Wrote accepted matchings to {}", path.display());
        }
    }

    if let Some(stem) = &args.output_stem {
        write_outputs(stem, &report)?;
        if verbose {
            eprintln!("Wrote dot and statistics files with stem {}", stem.display());
        }
    }

    Ok(())
}

fn print_text(report: &SimReport) {
    // pre-filter table, then one block per constraint in evaluation order
    println!(
        "{}",
        table::percent_table(&report.set_a, &report.set_b, &report.prefilter, report.total)
    );
    for summary in &report.constraints {
        println!(
            "{}",
            table::constraint_block(summary, &report.set_a, &report.set_b)
        );
    }
    println!("{}", table::overview_table(report));
    println!(
        "Total matchings: {}  Remaining: {}",
        report.total, report.remaining
    );
}

fn print_json(report: &SimReport) -> anyhow::Result<()> {
    let payload = serde_json::json!({
        "report": report,
        "series": {
            "mb": report.kind_series(ConstraintKind::Mb),
            "mn": report.kind_series(ConstraintKind::Mn),
            "information": report.information_series(),
        }
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn write_matchings(path: &Path, report: &SimReport) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for matching in report.accepted.as_deref().unwrap_or_default() {
        writeln!(file, "{}", matching.display_line(&report.set_a, &report.set_b))?;
    }
    Ok(())
}

fn write_outputs(stem: &Path, report: &SimReport) -> anyhow::Result<()> {
    // the dot export shows the table after the terminal constraint, or the
    // pre-filter table for a constraint-free game
    let final_values = report
        .constraints
        .last()
        .map_or(&report.prefilter, |c| &c.percentages);
    let source = dot::dot_table(&report.set_a, &report.set_b, final_values, true);
    let dot_path = dot::write_dot(stem, &source)?;
    dot::render_graphviz(stem, &dot_path);

    write_stats(stem, report)?;
    Ok(())
}

/// Write the three plottable series: one file per constraint kind pairing
/// identifier with entropy, and the combined bits-remaining series on the
/// interleaved identifier axis.
fn write_stats(stem: &Path, report: &SimReport) -> std::io::Result<()> {
    for (kind, suffix) in [(ConstraintKind::Mb, "_statMB.out"), (ConstraintKind::Mn, "_statMN.out")]
    {
        let mut file = std::fs::File::create(dot::stem_with(stem, suffix))?;
        for point in report.kind_series(kind) {
            writeln!(file, "{} {}", point.id, point.entropy)?;
        }
    }

    let mut info = std::fs::File::create(dot::stem_with(stem, "_statInfo.out"))?;
    for (id, bits) in report.information_series() {
        writeln!(info, "{id} {bits}")?;
    }
    Ok(())
}
