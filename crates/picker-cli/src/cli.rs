use clap::{Args, Parser, Subcommand, ValueEnum};
use picker_domain::ListId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "picker")]
#[command(about = "Pick widgets from a catalog into an ordered selection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE", env = "PICKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the available list's page size
    #[arg(long, global = true)]
    pub available_page_size: Option<usize>,

    /// Override the selected list's page size
    #[arg(long, global = true)]
    pub selected_page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the available and selected lists
    Adapt {
        #[command(flatten)]
        input: InputArgs,
        /// Case-insensitive name filter for the available list
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one page of a list
    Page(PageArgs),
    /// Apply a JSON array of events and print the resulting state
    Replay {
        #[command(flatten)]
        input: InputArgs,
        /// Path to the events file
        #[arg(long, value_name = "FILE")]
        events: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Path to the catalog JSON file
    #[arg(long, value_name = "FILE")]
    pub catalog: PathBuf,
    /// Path to the selection JSON file (empty selection if omitted)
    #[arg(long, value_name = "FILE")]
    pub selection: Option<PathBuf>,
    /// Path to the workspaces JSON file used in descriptions
    #[arg(long, value_name = "FILE")]
    pub workspaces: Option<PathBuf>,
}

#[derive(Args)]
pub struct PageArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(long, value_enum)]
    pub list: ListArg,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListArg {
    Available,
    Selected,
}

impl From<ListArg> for ListId {
    fn from(arg: ListArg) -> Self {
        match arg {
            ListArg::Available => ListId::Available,
            ListArg::Selected => ListId::Selected,
        }
    }
}
