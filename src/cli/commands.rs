use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scorecard", about = concat!("scorecard v", env!("CARGO_PKG_VERSION"), " - producer filters that live in the URL"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./scorecard.toml if present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the cleos command that publishes a producer JSON file
    Chain(ChainArgs),
    /// Load a scorecard page, replay a query, apply toggles, show what is visible
    Filter(FilterArgs),
    /// Show the tokens a query string decodes to
    Query(QueryArgs),
}

#[derive(Args)]
pub struct ChainArgs {
    /// Producer JSON file
    #[arg(default_value = "bp.json")]
    pub file: String,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Dataset with producers (and optionally the filter panel)
    pub data: String,
    /// Address bar query the page is loaded with (e.g. "?api;ssl")
    #[arg(long, short, default_value = "")]
    pub query: String,
    /// Click a filter checkbox after loading (repeatable, applied in order)
    #[arg(long, short)]
    pub toggle: Vec<String>,
    /// Press the back button after the toggles
    #[arg(long)]
    pub back: bool,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Raw query string, with or without the leading `?`
    pub query: String,
}
