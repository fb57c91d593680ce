use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::config::GameDocument;

#[derive(Args)]
pub struct CheckArgs {
    /// Input game description (YAML)
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute the check subcommand: load and validate, report, run nothing.
///
/// # Errors
///
/// Returns the first [`ConfigError`](crate::ConfigError) the document
/// triggers.
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let game = GameDocument::load(&args.input)?;

    match format {
        OutputFormat::Text => {
            println!(
                "Configuration OK: {} x {} labels, {} constraints",
                game.set_a().len(),
                game.set_b().len(),
                game.constraints().len()
            );
            if verbose {
                for constraint in game.constraints() {
                    println!(
                        "  {} lights={} proposals={}",
                        constraint.title(),
                        constraint.lights(),
                        constraint.map_len()
                    );
                }
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "ok": true,
                "set_a": game.set_a(),
                "set_b": game.set_b(),
                "constraints": game
                    .constraints()
                    .iter()
                    .map(|c| serde_json::json!({
                        "title": c.title(),
                        "kind": c.kind(),
                        "num": c.num(),
                        "lights": c.lights(),
                        "comment": c.comment(),
                        "proposals": c.map_len(),
                    }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
