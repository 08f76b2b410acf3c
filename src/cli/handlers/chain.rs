use std::path::Path;

use tracing::info;

use crate::cli::commands::ChainArgs;
use crate::io::data_io;
use crate::model::config::ScorecardConfig;
use crate::ops::chain;

/// Print the `cleos push action` line for a producer JSON file.
/// A missing or malformed file is a hard error.
pub fn cmd_chain(
    args: ChainArgs,
    config: &ScorecardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(&args.file);
    let bp = data_io::read_bp_json(path)?;
    let command = chain::build_command(&bp, &config.chain)?;
    info!(owner = %command.owner, file = %path.display(), "built chain command");
    println!("{}", command.line);
    Ok(())
}
