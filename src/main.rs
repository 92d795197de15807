#![forbid(unsafe_code)]
//! Questions Up & Down command line interface

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qud::commands::{
    execute_answer, execute_clear, execute_export, execute_import, execute_init, execute_progress,
    execute_questions, execute_set, execute_show, execute_toggle, execute_validate, AnswerOptions,
    ClearOptions, ExportOptions, ExportTarget, ImportOptions, InitOptions, QuestionsOptions,
    SetOptions, ShowOptions, ToggleOptions,
};
use qud::registry::industry::Industry;
use qud::registry::{FieldId, Topic};
use qud::Config;

#[derive(Parser)]
#[command(name = "qud")]
#[command(about = "Questions Up & Down - answer, save and export a business-planning questionnaire")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".qud.config.json")]
    config: PathBuf,

    /// Directory holding the saved answers
    #[arg(long, global = true, env = "QUD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a .qud.config.json
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,

        /// Prompt template (software, biotech, hardware, fintech)
        #[arg(long)]
        industry: Option<Industry>,
    },

    /// Fill in the questionnaire interactively
    Answer {
        /// Only this topic (e.g. problem, pain-scale)
        #[arg(short, long)]
        topic: Option<String>,

        /// Answer how-fields with canned options
        #[arg(long)]
        options: bool,
    },

    /// Set one field, e.g. `qud set problem-what "Users waste time"`
    Set {
        /// Field id (<topic>-what or <topic>-how)
        field: FieldId,

        /// New value
        value: Option<String>,

        /// Read the value from stdin
        #[arg(long)]
        stdin: bool,
    },

    /// Flip a canned option on a how-field
    Toggle {
        /// Field id (<topic>-how)
        field: FieldId,

        /// Option value or label, e.g. "customer interviews"
        option: String,
    },

    /// Print saved answers
    Show {
        /// Only this field
        field: Option<FieldId>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the questionnaire prompts
    Questions {
        /// Prompt template; the configured one when unset
        #[arg(long)]
        industry: Option<Industry>,
    },

    /// Show how much of the questionnaire is answered
    Progress,

    /// Check the configured required fields
    Validate,

    /// Export answers to markdown, text, pdf or all
    Export {
        /// markdown | text | pdf | all
        #[arg(default_value = "all")]
        format: ExportTarget,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge answers from a .json or .txt file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Erase all answers
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "qud=debug" } else { "qud=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load config
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    match cli.command {
        Commands::Init { force, yes, industry } => {
            let options = InitOptions {
                config_path: cli.config,
                force,
                yes,
                industry,
            };
            execute_init(options)?;
        }

        Commands::Answer { topic, options } => {
            let topic = topic
                .map(|slug| {
                    Topic::from_slug(&slug).ok_or_else(|| anyhow!("Unknown topic: {}", slug))
                })
                .transpose()?;
            execute_answer(AnswerOptions { topic, options }, config)?;
        }

        Commands::Set { field, value, stdin } => {
            execute_set(SetOptions { field, value, stdin }, config)?;
        }

        Commands::Toggle { field, option } => {
            execute_toggle(ToggleOptions { field, option }, config)?;
        }

        Commands::Show { field, json } => {
            execute_show(ShowOptions { field, json }, config)?;
        }

        Commands::Questions { industry } => {
            let options = QuestionsOptions {
                industry: industry.unwrap_or(config.industry),
            };
            execute_questions(options)?;
        }

        Commands::Progress => execute_progress(config)?,

        Commands::Validate => execute_validate(config)?,

        Commands::Export { format, output } => {
            execute_export(ExportOptions { target: format, output }, config)?;
        }

        Commands::Import { file } => {
            execute_import(ImportOptions { file }, config)?;
        }

        Commands::Clear { yes } => {
            execute_clear(ClearOptions { yes }, config)?;
        }
    }

    Ok(())
}
