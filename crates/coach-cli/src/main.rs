mod cmd;

use clap::{Parser, Subcommand};
use cmd::serve::ServeArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "coach-peter",
    about = "Pass a Slack user-group role to a random teammate",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the slash-command HTTP server
    Serve(ServeArgs),

    /// Print the line to paste into a channel description
    ConfigLine {
        /// User group to pass from, e.g. '<!subteam^S0123|@team>'
        from: String,
        /// Users, groups or channels to pass to
        #[arg(required = true)]
        to: Vec<String>,
    },

    /// Render every template in a phrase file and report failures
    CheckPhrases {
        /// Newline-separated template file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve(_) => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => cmd::serve::run(args),
        Commands::ConfigLine { from, to } => cmd::config_line::run(&from, to),
        Commands::CheckPhrases { path } => cmd::check_phrases::run(&path),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
