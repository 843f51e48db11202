//! quizdeck CLI: take multiple-choice exams from plain-text files.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod output;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Multiple-choice exam practice from .txt files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an exam file, answer its questions, and get a score
    Take {
        /// Path to the .txt exam file (UTF-8, at most 5 MB)
        #[arg(long)]
        file: PathBuf,

        /// Submit without credentials; the attempt is not saved to history
        #[arg(long)]
        guest: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Log in (or register) and store the credential
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// Create the account first
        #[arg(long)]
        register: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Forget the stored credential
    Logout {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show aggregate statistics for the logged-in user
    Stats {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show past attempts for the logged-in user
    History {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List registered users (administrators only)
    Users {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdeck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            file,
            guest,
            config,
        } => commands::take::execute(file, guest, config).await,
        Commands::Login {
            username,
            password,
            register,
            config,
        } => commands::login::execute(username, password, register, config).await,
        Commands::Logout { config } => commands::login::logout(config),
        Commands::Stats { config } => commands::stats::execute(config).await,
        Commands::History { config } => commands::stats::history(config).await,
        Commands::Users { config } => commands::stats::users(config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
