//! Administrative maintenance commands.
//!
//! Every command goes through the same services and Supabase repositories as
//! the HTTP API.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use content_admin_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::dto::request::CreateQuestionTypeRequest,
};

#[derive(Parser, Debug)]
#[command(name = "content-admin")]
#[command(author, version, about = "Maintenance commands for the content admin database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Delete duplicate generated questions, keeping the newest of each group
    DedupeQuestions {
        /// Report duplicates without deleting them
        #[arg(long)]
        dry_run: bool,
    },

    /// Report which prompt templates reference the passage placeholder
    LintPrompts,

    /// Create a question type bound to an existing prompt
    CreateQuestionType {
        #[arg(long)]
        name: String,

        #[arg(long)]
        prompt_id: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a question type and its generated questions
    DeleteQuestionType {
        #[arg(long)]
        id: String,
    },

    /// Renumber each sibling group of a textbook's units to 1..=n
    NormalizeUnitOrder {
        #[arg(long)]
        textbook_id: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(command: Commands, state: &AppState) -> AppResult<()> {
    match command {
        Commands::DedupeQuestions { dry_run } => {
            let report = state.generated_question_service.dedupe(dry_run).await?;
            print_json(&report)
        }
        Commands::LintPrompts => {
            let entries = state.prompt_service.lint().await?;
            let missing = entries.iter().filter(|e| !e.has_passage_placeholder).count();
            print_json(&entries)?;
            if missing > 0 {
                log::warn!(
                    "{} of {} prompts do not reference [[{}]]",
                    missing,
                    entries.len(),
                    state.prompt_service.passage_placeholder()
                );
            }
            Ok(())
        }
        Commands::CreateQuestionType {
            name,
            prompt_id,
            description,
        } => {
            let created = state
                .question_type_service
                .create_question_type(CreateQuestionTypeRequest {
                    name,
                    prompt_id,
                    description,
                })
                .await?;
            print_json(&created)
        }
        Commands::DeleteQuestionType { id } => {
            let removed = state.question_type_service.delete_question_type(&id).await?;
            println!("Deleted question type {} and {} generated questions", id, removed);
            Ok(())
        }
        Commands::NormalizeUnitOrder { textbook_id } => {
            state.textbook_service.get_textbook(&textbook_id).await?;
            let changed = state.unit_service.normalize_order(&textbook_id).await?;
            println!("Updated order_index on {} units", changed);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = Config::from_env();

    let result: Result<(), AppError> = async {
        let state = AppState::new(config).await?;
        run(cli.command, &state).await
    }
    .await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
