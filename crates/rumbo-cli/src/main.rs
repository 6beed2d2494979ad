//! rumbo CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rumbo", version, about = "Learning-path assessment for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive assessment
    Run {
        /// Custom question bank TOML (defaults to the built-in bank)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Custom roadmap catalog TOML (defaults to the built-in catalog)
        #[arg(long)]
        roadmaps: Option<PathBuf>,

        /// Directory for saved progress and completions
        #[arg(long, default_value = ".rumbo")]
        store_dir: PathBuf,

        /// Also write the results page into this directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format(s): markdown, html, json, all (comma-separated)
        #[arg(long, default_value = "markdown")]
        format: String,

        /// Skip the cosmetic analysis pause
        #[arg(long)]
        no_pause: bool,
    },

    /// Score a saved answers file without the interactive flow
    Score {
        /// JSON file mapping question ids to answers
        #[arg(long)]
        answers: PathBuf,

        /// Custom question bank TOML (defaults to the built-in bank)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Custom roadmap catalog TOML (defaults to the built-in catalog)
        #[arg(long)]
        roadmaps: Option<PathBuf>,

        /// Write the results page into this directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format(s): markdown, html, json, all (comma-separated)
        #[arg(long, default_value = "markdown")]
        format: String,
    },

    /// Validate question bank and roadmap catalog files
    Validate {
        /// Question bank TOML to validate (defaults to the built-in bank)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Roadmap catalog TOML to validate (defaults to the built-in catalog)
        #[arg(long)]
        roadmaps: Option<PathBuf>,
    },

    /// Scaffold editable copies of the built-in catalogs
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rumbo_core=info".parse().unwrap())
                .add_directive("rumbo_store=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            questions,
            roadmaps,
            store_dir,
            output,
            format,
            no_pause,
        } => commands::run::execute(questions, roadmaps, store_dir, output, format, no_pause),
        Commands::Score {
            answers,
            questions,
            roadmaps,
            output,
            format,
        } => commands::score::execute(answers, questions, roadmaps, output, format),
        Commands::Validate { questions, roadmaps } => {
            commands::validate::execute(questions, roadmaps)
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
