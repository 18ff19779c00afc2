use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::registry::CategoryRegistry;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Convert(ConvertArgs),
    Publish(PublishArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Input path to the layout records JSON (array of article records).
    #[arg(long)]
    pub input: String,

    /// Output file path for the dataset JSON.
    #[arg(long)]
    pub out: String,

    /// Category label set used to resolve bounding-box labels.
    #[arg(long, value_enum, default_value = "content")]
    pub labels: LabelSet,
}

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Input path to the layout records JSON (array of article records).
    #[arg(long)]
    pub input: String,

    /// Name the dataset document is stored under.
    #[arg(long)]
    pub name: String,

    /// Category label set used to resolve bounding-box labels.
    #[arg(long, value_enum, default_value = "content")]
    pub labels: LabelSet,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LabelSet {
    /// content / author / column / content_title
    Content,
    /// article / author / column / title
    Article,
}

impl LabelSet {
    pub fn registry(self) -> CategoryRegistry {
        match self {
            Self::Content => CategoryRegistry::content_labels(),
            Self::Article => CategoryRegistry::article_labels(),
        }
    }
}
