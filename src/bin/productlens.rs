use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use productlens::{
    logging::LoggingConfig, run_server, AnalysisRequest, AnalysisService, CredentialSource,
    GeminiClientFactory, PromptBuilder, ServiceConfig,
};

#[derive(Parser)]
#[command(name = "productlens", version, about = "Product market-viability analysis service", author)]
struct Cli {
    /// JSON config file (defaults to $PRODUCTLENS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run one analysis and print the JSON result
    Analyze(ProductArgs),
    /// Print the prompt that would be sent
    Prompt(ProductArgs),
}

#[derive(Args)]
struct ProductArgs {
    product: String,
    #[arg(long)]
    market: Option<String>,
    #[arg(long)]
    business_model: Option<String>,
}

impl ProductArgs {
    fn into_request(self) -> AnalysisRequest {
        AnalysisRequest {
            product_name: Some(self.product),
            target_market: self.market,
            business_model: self.business_model,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingConfig::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { bind } => handle_serve(cli.config, bind).await?,
        Command::Analyze(args) => handle_analyze(cli.config, args).await?,
        Command::Prompt(args) => handle_prompt(args)?,
    }
    Ok(())
}

async fn handle_serve(config: Option<PathBuf>, bind: Option<String>) -> anyhow::Result<()> {
    let mut config = ServiceConfig::load(config.as_deref())?;
    if let Some(bind) = bind {
        config.bind = bind;
        config.validate()?;
    }
    run_server(config).await
}

async fn handle_analyze(config: Option<PathBuf>, args: ProductArgs) -> anyhow::Result<()> {
    let config = ServiceConfig::load(config.as_deref())?;
    let api_key = CredentialSource::from_env(config.provider.api_key_env.clone())
        .resolve()
        .with_context(|| {
            format!(
                "environment variable `{}` must hold the provider API key",
                config.provider.api_key_env
            )
        })?;

    let factory = GeminiClientFactory::new(config.provider.base_url.clone())?;
    let service = AnalysisService::from_config(Arc::new(factory), &config);
    let run = service.run(&api_key, &args.into_request()).await?;

    for attempt in run.failures() {
        eprintln!(
            "[{}] failed after {} ms: {}",
            attempt.model,
            attempt.latency.as_millis(),
            attempt.error.as_deref().unwrap_or("unknown error")
        );
    }

    let result = run.into_result()?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn handle_prompt(args: ProductArgs) -> anyhow::Result<()> {
    let normalized = args.into_request().normalize()?;
    println!("{}", PromptBuilder::build(&normalized));
    Ok(())
}
