use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cheerbot")]
#[command(author, version, about = "Telegram entertainment bot — quotes, jokes, trivia and reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run {
        /// Log file path override (defaults to LOG_FILE_PATH or app.log)
        #[arg(long)]
        log_file: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
