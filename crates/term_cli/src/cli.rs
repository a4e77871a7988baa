//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

/// term - find where a word or phrase occurs throughout a project
#[derive(Parser)]
#[command(name = "term")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the occurrences of a word or phrase throughout a directory tree
    #[command(
        long_about = "Given a word or phrase, find where in the project it is located. \
                      Prints every file in which a match was found together with the line number.\n\n\
                      Example:\n\n  term find --path /home/user/todo --word \"debugger\" --ext \".jsx\""
    )]
    Find(FindArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Directory to search
    #[arg(long, value_name = "DIR", default_value = "")]
    pub path: String,

    /// Word or phrase to search for
    #[arg(long, value_name = "TERM", default_value = "")]
    pub word: String,

    /// Match upper and lower case alike
    #[arg(short, long)]
    pub icase: bool,

    /// Only search files with this extension, including the dot (e.g. ".json")
    #[arg(long, value_name = ".EXT", default_value = "")]
    pub ext: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat lines longer than this many bytes as unreadable
    #[arg(long, value_name = "BYTES")]
    pub max_line_length: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<path>  ln: <line>`
    #[default]
    Text,
    /// One JSON object per match
    Json,
}
