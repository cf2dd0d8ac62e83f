//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use sr_core::reveal::PreviewSource;
use sr_core::TargetId;

#[derive(Debug, Parser)]
#[command(version, about = "Manage scroll-reveal animation targets")]
pub struct Cli {
    /// Host config file (TOML). Defaults to the per-user config if present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List targets, newest change first
    List {
        /// Selector or label text; `*` matches anything
        #[arg(short, long)]
        search: Option<String>,
        /// `1` enabled, `0` disabled
        #[arg(long)]
        status: Option<String>,
        /// e.g. `label,-changed`
        #[arg(long)]
        sort: Option<String>,
        /// Zero-based page
        #[arg(long)]
        page: Option<u32>,
    },
    /// Show one target with its resolved options
    Show { id: TargetId },
    Add(TargetArgs),
    Edit {
        id: TargetId,
        #[command(flatten)]
        fields: TargetArgs,
    },
    Delete {
        id: TargetId,
        /// Skip the confirmation step
        #[arg(short, long)]
        yes: bool,
    },
    /// Copy a target's comment and options under a new selector
    Duplicate { id: TargetId, selector: String },
    #[command(subcommand)]
    Settings(SettingsCommand),
    #[command(subcommand)]
    Widget(WidgetCommand),
    /// Print the script attachments for a page path
    Page { path: String },
    /// Print the preview payload for the sample block
    Preview {
        #[arg(long, value_enum, default_value_t = PreviewArg::Editor)]
        source: PreviewArg,
        /// JSON option overrides
        #[arg(long)]
        options: Option<String>,
        /// JSON engine config (settings preview only)
        #[arg(long)]
        configs: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    #[arg(long)]
    pub selector: Option<String>,
    #[arg(long)]
    pub label: Option<String>,
    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long, action = clap::ArgAction::Set)]
    pub enabled: Option<bool>,
    /// JSON option overrides, e.g. `{"opacity":0.5}`
    #[arg(long)]
    pub options: Option<String>,
    /// Go back to the list after saving
    #[arg(long)]
    pub return_to_list: bool,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the settings, or one dotted path
    Get { path: Option<String> },
    /// Set one dotted path; the value is parsed as JSON when possible
    Set { path: String, value: String },
    /// Replace all settings from a JSON file
    Import { file: PathBuf },
    /// Local library install status
    Library,
}

#[derive(Debug, Subcommand)]
pub enum WidgetCommand {
    /// Print the widget embed tag
    Render,
    /// Set the key store entry name holding the widget key
    SetKey { name: String },
    ClearKey,
    /// Print a chat deep link
    DeepLink { phone: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewArg {
    Editor,
    Settings,
}

impl From<PreviewArg> for PreviewSource {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Editor => PreviewSource::Editor,
            PreviewArg::Settings => PreviewSource::Settings,
        }
    }
}
