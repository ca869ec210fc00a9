use anyhow::Context;
use chrono::Local;
use clap::Parser;
use portfolio_sync::app::export;
use portfolio_sync::config::cli::{Command, OutputFormat, ThemeAction};
use portfolio_sync::utils::error::ErrorSeverity;
use portfolio_sync::utils::{logger, validation::Validate};
use portfolio_sync::{
    AppContext, CliArgs, ContentDomain, FilePreferenceStore, Language, Portfolio, PortfolioConfig,
    SheetsClient, SyncError, Theme,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting portfolio-sync");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = run(args).await {
        let Some(sync_error) = e.downcast_ref::<SyncError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ {:#} (Category: {:?}, Severity: {:?})",
            e,
            sync_error.category(),
            sync_error.severity()
        );
        eprintln!("❌ {}", sync_error.user_friendly_message());
        eprintln!("💡 {}", sync_error.recovery_suggestion());

        let exit_code = match sync_error.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = args.load_config().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    let store = Arc::new(FilePreferenceStore::new(&config.preferences.path));
    let mut context = AppContext::load(Arc::clone(&store), &config.preferences);

    let language = match args.lang.as_deref() {
        Some(code) => code.parse::<Language>()?,
        None => context.language.language(),
    };
    let t = language.translations();

    match args.command {
        Command::Language { code: None } => println!("{}", context.language.language()),
        Command::Language { code: Some(code) } => {
            let chosen: Language = code.parse()?;
            context.language.set_language(chosen)?;
            println!("{}", chosen);
        }
        Command::Theme { action } => {
            let theme = match action {
                None => context.theme.theme(),
                Some(ThemeAction::Toggle) => context.theme.toggle()?,
                Some(ThemeAction::Light) => {
                    context.theme.set_theme(Theme::Light)?;
                    Theme::Light
                }
                Some(ThemeAction::Dark) => {
                    context.theme.set_theme(Theme::Dark)?;
                    Theme::Dark
                }
            };
            println!("{}", theme);
        }
        Command::Fetch { domain, format } => {
            let portfolio = portfolio(&config);
            let output = fetch(&portfolio, &domain, format).await?;
            println!("{}", output);
        }
        Command::Project { id } => {
            let portfolio = portfolio(&config);
            let project = portfolio.project(&id).await.ok_or_else(|| SyncError::NotFoundError {
                kind: "project".to_string(),
                id: id.clone(),
            })?;
            print!("{}", export::render_project(&project, Local::now().date_naive(), t));
        }
        Command::Post { id } => {
            let portfolio = portfolio(&config);
            let posts = portfolio.blog_posts().await;
            let post = posts
                .iter()
                .find(|post| post.id == id)
                .ok_or_else(|| SyncError::NotFoundError {
                    kind: "post".to_string(),
                    id: id.to_string(),
                })?;
            print!("{}", export::render_post(&posts, post, t));
        }
    }

    Ok(())
}

fn portfolio(config: &PortfolioConfig) -> Portfolio<SheetsClient> {
    Portfolio::new(SheetsClient::from_config(config), config)
}

async fn fetch(
    portfolio: &Portfolio<SheetsClient>,
    domain: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if domain.trim() == "all" {
        if format == OutputFormat::Csv {
            return Err(SyncError::InvalidConfigValueError {
                field: "format".to_string(),
                value: "csv".to_string(),
                reason: "CSV output needs a single domain".to_string(),
            }
            .into());
        }

        let snapshot = portfolio.refresh_all().await;
        tracing::info!(
            "✅ Loaded {} projects, {} skill categories, {} posts",
            snapshot.projects.len(),
            snapshot.skills.len(),
            snapshot.blog_posts.len()
        );
        let body = serde_json::json!({
            "projects": &*snapshot.projects,
            "skills": &*snapshot.skills,
            "blogPosts": &*snapshot.blog_posts,
        });
        return Ok(serde_json::to_string_pretty(&body)?);
    }

    let output = match (domain.parse::<ContentDomain>()?, format) {
        (ContentDomain::Projects, OutputFormat::Json) => {
            serde_json::to_string_pretty(&*portfolio.timeline().await)?
        }
        (ContentDomain::Projects, OutputFormat::Csv) => {
            export::projects_csv(&portfolio.timeline().await)?
        }
        (ContentDomain::Skills, OutputFormat::Json) => {
            serde_json::to_string_pretty(&*portfolio.skills().await)?
        }
        (ContentDomain::Skills, OutputFormat::Csv) => export::skills_csv(&portfolio.skills().await)?,
        (ContentDomain::BlogPosts, OutputFormat::Json) => {
            serde_json::to_string_pretty(&*portfolio.blog_posts().await)?
        }
        (ContentDomain::BlogPosts, OutputFormat::Csv) => {
            export::blog_posts_csv(&portfolio.blog_posts().await)?
        }
    };
    Ok(output)
}
