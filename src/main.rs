use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meeplestats::score_sheet::{EntryValue, ParticipantScoreMatrix};
use meeplestats::{
    compute_totals, AppError, MatchRecord, MatchResult, MatchSubmission, ScoreSheetDefinition,
};

#[derive(Debug, Parser)]
#[command(
    name = "meeplestats",
    version,
    about = "Resolve logged board game matches and total score sheets"
)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decide the winners of a match submission
    Resolve {
        /// Match submission JSON file
        match_json: PathBuf,
    },
    /// Total a filled-in score sheet
    Tally {
        /// Score sheet definition JSON file
        sheet_json: PathBuf,
        /// JSON object of participant name to entered values
        scores_json: PathBuf,
    },
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    result: &'a MatchResult,
    record: &'a MatchRecord,
}

#[derive(Serialize)]
struct TallyOutput<'a> {
    game_name: &'a str,
    totals: BTreeMap<String, f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "meeplestats=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Command failed");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<String, AppError> {
    match &cli.command {
        Command::Resolve { match_json } => {
            let submission: MatchSubmission = read_json(match_json)?;
            let record = MatchRecord::new(&submission)?;
            info!(mode = %record.mode(), "Resolved match");

            render(
                &ResolveOutput {
                    result: record.result(),
                    record: &record,
                },
                cli.pretty,
            )
        }
        Command::Tally {
            sheet_json,
            scores_json,
        } => {
            let definition: ScoreSheetDefinition = read_json(sheet_json)?;
            let rows: BTreeMap<String, Vec<Option<EntryValue>>> = read_json(scores_json)?;
            let matrix = ParticipantScoreMatrix::from_entered_slots(rows);
            info!(
                fields = definition.fields.len(),
                participants = matrix.len(),
                "Tallying score sheet"
            );

            let totals = compute_totals(&definition, &matrix).into_iter().collect();
            render(
                &TallyOutput {
                    game_name: &definition.game_name,
                    totals,
                },
                cli.pretty,
            )
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
