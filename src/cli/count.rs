use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::GameDocument;
use crate::engine::generator::MatchingGenerator;

#[derive(Args)]
pub struct CountArgs {
    /// Input game description (YAML)
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute the count subcommand: enumerate the unconstrained space of the
/// game's label sets, ignoring its instructions.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run(args: CountArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let game = GameDocument::load(&args.input)?;

    if verbose {
        eprintln!(
            "Counting the candidate space for {} x {} labels",
            game.set_a().len(),
            game.set_b().len()
        );
    }

    let generator = MatchingGenerator::new(game.set_b().len());
    let mut total = 0u64;
    let mut baseline = 0u64;
    for matching in generator.iter() {
        total += 1;
        if matching.contains(0, 0) {
            baseline += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let bits = (total as f64).log2();

    match format {
        OutputFormat::Text => {
            println!("Total matchings: {total} ({bits} bits)");
            println!("Matchings per pair: {baseline}");
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "total": total,
                "bits": bits,
                "baseline": baseline,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
