use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::warn;

use redmine_refs::config::Config;
use redmine_refs::pipeline::{Pipeline, PipelineError};
use redmine_refs::publish::WikiPublisher;
use redmine_refs::render::render_report;
use redmine_refs::sources::{DoajSource, OpenAlexSource, Source};

/// Update the academic references wiki page from OpenAlex and DOAJ searches
#[derive(Parser, Debug)]
#[command(name = "redmine-refs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search open-access paper APIs and publish the results to a Redmine wiki page", long_about = None)]
struct Cli {
    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Override the configured search query
    #[arg(long)]
    query: Option<String>,

    /// Override the per-source result limits
    #[arg(long)]
    max_results: Option<usize>,

    /// Render the document to stdout instead of publishing
    #[arg(long)]
    dry_run: bool,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let publisher = WikiPublisher::new(&config.redmine, config.timeout())?;
    let mut pipeline = Pipeline::new(&config.search.query, publisher);

    for id in &config.search.sources {
        let source: Box<dyn Source> = match id.as_str() {
            "openalex" => Box::new(OpenAlexSource::new(config.timeout())?),
            "doaj" => Box::new(DoajSource::new(config.timeout())?),
            other => {
                warn!(source = other, "unknown source id in configuration, skipping");
                continue;
            }
        };
        pipeline = pipeline.with_source(source, config.search.limit_for(id));
    }

    Ok(pipeline)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    if let Some(query) = cli.query {
        config.search.query = query;
    }
    if let Some(max) = cli.max_results {
        config.search.openalex_limit = max;
        config.search.doaj_limit = max;
    }

    println!("🚀 Iniciando actualización de referencias científicas...\n");

    let pipeline = build_pipeline(&config)?;

    if cli.dry_run {
        let papers = pipeline.collect().await;
        if papers.is_empty() {
            println!("❌ No se encontraron artículos en ninguna fuente.");
            std::process::exit(1);
        }
        print!("{}", render_report(&papers, Local::now()));
        return Ok(());
    }

    match pipeline.run().await {
        Ok(report) => {
            println!("🎉 ¡Éxito! Wiki actualizado con {} artículos.", report.found);
            Ok(())
        }
        Err(PipelineError::NoResults) => {
            println!("❌ No se encontraron artículos en ninguna fuente.");
            std::process::exit(1);
        }
        Err(PipelineError::Publish(err)) => {
            println!("⚠️ Falló la actualización en Redmine: {}", err);
            std::process::exit(1);
        }
    }
}
