//! Versecritic - Command-line entry point
//!
//! Drives the full critique flow: resolve configuration from the environment,
//! wire the services, submit the song, and render the resulting report.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use versecritic::models::analysis::AnalysisResult;
use versecritic::models::settings::AppConfig;
use versecritic::services::analysis::provider::{CritiqueModel, ModelError, ModelResult};
use versecritic::services::analysis::{AnalysisRequest, AnalysisService, GeminiModel};
use versecritic::services::export;
use versecritic::services::export::ReportFormat;
use versecritic::services::history::{FirestoreStore, HistoryStore};
use versecritic::services::identity::{Identity, IdentityService};
use versecritic::state::App;
use versecritic::view::View;

/// Command-line arguments for versecritic
#[derive(Parser, Debug)]
#[command(name = "versecritic")]
#[command(about = "AI song critique: structured lyric analysis and report export")]
#[command(version)]
struct Args {
    /// Song title
    #[arg(short, long, required_unless_present_any = ["example", "list"])]
    title: Option<String>,

    /// Path to a file containing the lyrics
    #[arg(required_unless_present_any = ["example", "list"])]
    lyrics: Option<PathBuf>,

    /// Genre to use as the primary evaluative lens
    #[arg(short, long, default_value = "")]
    genre: String,

    /// Short description of the music, for context
    #[arg(short = 'd', long = "description", default_value = "")]
    music_description: String,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Owner id to sign in as; enables saving and listing history
    #[arg(long, env = "VERSECRITIC_OWNER")]
    owner: Option<String>,

    /// Render the built-in example report without calling the analysis service
    #[arg(long)]
    example: bool,

    /// List saved analyses for the signed-in owner and exit
    #[arg(long)]
    list: bool,
}

/// Stand-in model used when the analysis credential is absent: the app still
/// runs (example and history remain usable) and a submission fails with the
/// configuration message.
struct DisabledModel;

#[async_trait]
impl CritiqueModel for DisabledModel {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn model(&self) -> &str {
        "disabled"
    }

    async fn generate(&self, _request: &AnalysisRequest) -> ModelResult<AnalysisResult> {
        Err(ModelError::AuthenticationFailed {
            message: "API Key is not available.".to_string(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "versecritic=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env();

    let model: Arc<dyn CritiqueModel> = if config.analysis_enabled() {
        Arc::new(GeminiModel::from_config(&config)?)
    } else {
        info!("analysis credential not set; submissions will fail until configured");
        Arc::new(DisabledModel)
    };

    let history: Option<Arc<dyn HistoryStore>> = config
        .persistence
        .as_ref()
        .map(|persistence| Arc::new(FirestoreStore::new(persistence)) as Arc<dyn HistoryStore>);
    if history.is_none() {
        info!("persistence credentials not set; login and history features are disabled");
    }

    let identity = IdentityService::new();
    if let Some(owner) = &args.owner {
        identity.sign_in(Identity::new(owner.clone(), owner.clone()));
    }

    let mut app = App::new(AnalysisService::new(model), history, identity);

    if args.list {
        return list_history(&app).await;
    }

    if args.example {
        app.show_example();
    } else {
        let (Some(title), Some(lyrics_path)) = (args.title.as_deref(), args.lyrics.as_ref())
        else {
            bail!("a title and a lyrics file are required");
        };
        let lyrics = std::fs::read_to_string(lyrics_path)
            .with_context(|| format!("failed to read lyrics from {}", lyrics_path.display()))?;
        let request = AnalysisRequest::new(
            title,
            lyrics,
            args.music_description.clone(),
            args.genre.clone(),
        )?;

        if app.submit(request).await.is_err() {
            let message = app
                .view()
                .error()
                .unwrap_or("The analysis failed.")
                .to_string();
            bail!(message);
        }
    }

    render_current_view(&app, args.format, args.out.as_deref())
}

/// Print the signed-in owner's saved analyses, newest first.
async fn list_history(app: &App) -> Result<()> {
    if !app.history_enabled() {
        bail!("Login and history features are not configured for this instance.");
    }
    if app.identity().current().is_none() {
        bail!("Pass --owner to list saved analyses.");
    }

    let history = app.load_history().await?;
    if history.is_empty() {
        println!("No saved analyses yet.");
        return Ok(());
    }
    for item in &history {
        let when = item
            .created_at
            .map(|at| at.format("%b %e, %Y").to_string())
            .unwrap_or_else(|| "just now".to_string());
        println!(
            "{}  {:.1}/10.0  {}  [{}]",
            when,
            item.overall_score,
            item.title,
            item.id.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Render whatever the view machine currently displays.
fn render_current_view(app: &App, format: ReportFormat, out: Option<&std::path::Path>) -> Result<()> {
    let result = match app.view().view() {
        View::SingleReport(result) => result,
        View::Input | View::ComparisonReport(_, _) => return Ok(()),
    };

    let report = export::render(result, format)?;
    match out {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!(
                file = %path.display(),
                suggested_name = %export::export_file_name(result, format),
                "report written"
            );
        }
        None => println!("{}", report),
    }
    Ok(())
}
