mod chain;
pub use chain::cmd_chain;

use std::path::Path;

use tracing::warn;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, data_io};
use crate::model::config::ScorecardConfig;
use crate::nav::Navigator;
use crate::ops::filter_ops::compute_visibility;
use crate::parse::decode_tokens;
use crate::view::page::Page;
use crate::view::read_selection;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref().map(Path::new), &cwd)?;

    match cli.command {
        Commands::Chain(args) => cmd_chain(args, &config),
        Commands::Filter(args) => cmd_filter(args, &config, json),
        Commands::Query(args) => cmd_query(args, json),
    }
}

// ---------------------------------------------------------------------------
// Filter simulation
// ---------------------------------------------------------------------------

fn cmd_filter(
    args: FilterArgs,
    config: &ScorecardConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = data_io::read_filter_data(Path::new(&args.data))?;
    let navigator = Navigator::new(data.producers.clone(), config.dom.clone());
    let mut page = Page::render(&data, config, "");
    page.attach(navigator.sender());

    // Arriving through a link leaves the bare page one step back in history
    if args.query.is_empty() {
        page.loaded();
    } else {
        page.navigate(&args.query);
    }
    let mut visibility = navigator.drain(&mut page);

    for value in &args.toggle {
        if !page.click(value) {
            warn!(%value, "no filter checkbox with this value");
            continue;
        }
        visibility = navigator.drain(&mut page).or(visibility);
    }

    if args.back {
        if page.back() {
            visibility = navigator.drain(&mut page).or(visibility);
        } else {
            warn!("already at the start of history");
        }
    }

    let visibility = visibility
        .unwrap_or_else(|| compute_visibility(&read_selection(&page), navigator.producers()));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&filter_to_json(&page, &visibility))?
        );
    } else {
        println!("{}", format_filter(&page, &visibility));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Query inspection
// ---------------------------------------------------------------------------

fn cmd_query(args: QueryArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tokens: Vec<String> = decode_tokens(&args.query).into_keys().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&QueryJson { tokens })?);
    } else {
        for token in tokens {
            println!("{}", token);
        }
    }
    Ok(())
}
