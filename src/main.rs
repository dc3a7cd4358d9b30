use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dealcoach::{
    coaching_advice, compute_coaching_metrics, improve_draft, AdviceContext, AnalysisRequest,
    Analyzer, AnthropicClient, AnthropicConfig, CoachingConfig, DraftKind, MemoryStore,
};

#[derive(Parser)]
#[command(name = "dealcoach")]
#[command(author, version, about = "Sales call transcript coaching and intent analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a call transcript (model-backed, with deterministic fallback)
    Analyze {
        /// Input transcript file (plain text, "Speaker: text" lines)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the analysis record (JSON); stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seller name hint for speaker role classification
        #[arg(long)]
        seller: Option<String>,

        /// Account name for the meeting metadata
        #[arg(long)]
        account: Option<String>,

        /// Meeting date
        #[arg(long)]
        date: Option<String>,

        /// Comma-separated participant names
        #[arg(long)]
        participants: Option<String>,

        /// Free-form notes to pass along to the analyst
        #[arg(long)]
        notes: Option<String>,

        /// Skip the external model even if a credential is configured
        #[arg(long)]
        fallback_only: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute deterministic coaching metrics without calling the model
    Coach {
        /// Input transcript file
        #[arg(short, long)]
        input: PathBuf,

        /// Seller name hint for speaker role classification
        #[arg(long)]
        seller: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Improve a follow-up email or call script draft
    Improve {
        /// Input draft file (plain text)
        #[arg(short, long)]
        input: PathBuf,

        /// Kind of draft being improved
        #[arg(long, value_enum)]
        kind: DraftArg,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Get coaching advice for a single observation
    Advise {
        /// The coaching observation to expand on
        #[arg(long)]
        observation: String,

        /// Seller name for context
        #[arg(long)]
        seller: Option<String>,

        /// Current seller talk ratio percentage
        #[arg(long)]
        talk_ratio: Option<u32>,

        /// Current question quality score percentage
        #[arg(long)]
        question_score: Option<u32>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DraftArg {
    Email,
    CallScript,
}

impl From<DraftArg> for DraftKind {
    fn from(arg: DraftArg) -> Self {
        match arg {
            DraftArg::Email => DraftKind::Email,
            DraftArg::CallScript => DraftKind::CallScript,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            seller,
            account,
            date,
            participants,
            notes,
            fallback_only,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(
                input,
                output,
                seller,
                account,
                date,
                participants,
                notes,
                fallback_only,
            )
            .await
        }
        Commands::Coach {
            input,
            seller,
            verbose,
        } => {
            setup_logging(verbose);
            coach(input, seller)
        }
        Commands::Improve {
            input,
            kind,
            verbose,
        } => {
            setup_logging(verbose);
            improve(input, kind.into()).await
        }
        Commands::Advise {
            observation,
            seller,
            talk_ratio,
            question_score,
            verbose,
        } => {
            setup_logging(verbose);
            advise(observation, seller, talk_ratio, question_score).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

#[allow(clippy::too_many_arguments)]
async fn analyze(
    input: PathBuf,
    output: Option<PathBuf>,
    seller: Option<String>,
    account: Option<String>,
    date: Option<String>,
    participants: Option<String>,
    notes: Option<String>,
    fallback_only: bool,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let transcript = read_text_file(&input).context("Failed to read input transcript")?;

    let request = AnalysisRequest {
        transcript,
        meeting_date: date,
        account_name: account,
        participants: participants.as_deref().map(parse_participants),
        seller_name: seller,
        notes,
    };

    let client = if fallback_only {
        info!("Skipping model call (--fallback-only)");
        None
    } else {
        match AnthropicConfig::from_env() {
            Ok(config) => Some(AnthropicClient::new(config)),
            Err(e) => {
                info!("Model unavailable ({}); using fallback analysis", e);
                None
            }
        }
    };

    let store = Arc::new(MemoryStore::new());
    let analyzer = Analyzer::new(client).with_store(store.clone());
    let record = analyzer.analyze_to_record(&request).await;
    info!("Analysis {} recorded ({} stored this session)", record.id, store.len());

    info!(
        "Intent: {:?} ({}% / {}% / {}% / {}%), talk ratio {}% seller, question score {}",
        record.outcome.intent.primary,
        record.outcome.intent.buy_now,
        record.outcome.intent.buy_soon,
        record.outcome.intent.later,
        record.outcome.intent.no_fit,
        record.outcome.coaching.talk_ratio.seller_pct,
        record.outcome.coaching.question_score.score,
    );

    let json = serde_json::to_string_pretty(&record).context("Failed to serialize analysis")?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            info!("Analysis written to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn coach(input: PathBuf, seller: Option<String>) -> Result<()> {
    let transcript = read_text_file(&input).context("Failed to read input transcript")?;
    let metrics =
        compute_coaching_metrics(&transcript, seller.as_deref(), &CoachingConfig::default());

    println!("Coaching Metrics");
    println!("================");
    println!(
        "Talk ratio: {}% seller / {}% customer",
        metrics.talk_ratio.seller_pct, metrics.talk_ratio.customer_pct
    );
    println!(
        "Words: {} seller, {} customer",
        metrics.talk_ratio.seller_words, metrics.talk_ratio.customer_words
    );
    println!(
        "Questions: {} total, {} open, score {}",
        metrics.question_score.seller_questions,
        metrics.question_score.open_questions,
        metrics.question_score.score
    );

    if !metrics.observations.is_empty() {
        println!();
        println!("Observations");
        println!("------------");
        for observation in &metrics.observations {
            println!("- {}", observation);
        }
    }

    Ok(())
}

async fn improve(input: PathBuf, kind: DraftKind) -> Result<()> {
    let content = read_text_file(&input).context("Failed to read input draft")?;

    let config = AnthropicConfig::from_env().context("Improving a draft requires a model credential")?;
    let client = AnthropicClient::new(config);

    let improved = improve_draft(&client, &content, kind)
        .await
        .context("Failed to improve draft")?;

    println!("{}", improved);
    Ok(())
}

async fn advise(
    observation: String,
    seller: Option<String>,
    talk_ratio: Option<u32>,
    question_score: Option<u32>,
) -> Result<()> {
    let client = AnthropicConfig::from_env().ok().map(AnthropicClient::new);
    let context = AdviceContext {
        talk_ratio,
        question_score,
        avg_buy_likelihood: None,
    };

    let advice = coaching_advice(
        client.as_ref(),
        &observation,
        seller.as_deref(),
        &context,
    )
    .await;

    let json = serde_json::to_string_pretty(&advice).context("Failed to serialize advice")?;
    println!("{}", json);
    Ok(())
}

fn read_text_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Parse a comma-separated participants list, dropping empty entries
fn parse_participants(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_participants() {
        let result = parse_participants("Alex Rivera, Jordan Lee , ,Sam");
        assert_eq!(result, vec!["Alex Rivera", "Jordan Lee", "Sam"]);
    }

    #[test]
    fn test_parse_participants_empty() {
        assert!(parse_participants("").is_empty());
        assert!(parse_participants(" , ,").is_empty());
    }

    #[test]
    fn test_read_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Alex: What challenges are you facing?").unwrap();

        let content = read_text_file(file.path()).unwrap();
        assert!(content.contains("Alex: What"));
    }

    #[test]
    fn test_read_text_file_missing() {
        let err = read_text_file(Path::new("/nonexistent/transcript.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
