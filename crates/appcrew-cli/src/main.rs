use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Result};
use appcrew_client::AnthropicBackend;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{error, info};

use appcrew_cli::config::Config;
use appcrew_cli::examples::{self, QUICK_EXAMPLES};
use appcrew_cli::pipeline::BuildPipeline;
use appcrew_cli::report;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();

    if config.list_examples {
        println!("Quick examples:");
        for (i, example) in QUICK_EXAMPLES.iter().enumerate() {
            println!("  {}. {example}", i + 1);
        }
        return Ok(());
    }

    let request = resolve_request(&config)?;

    // Key resolution halts before any stage runs.
    let api_key = config.resolve_api_key()?;

    let backend = Arc::new(AnthropicBackend::new(api_key, config.model.clone()));
    info!("building \"{request}\" with model {}", config.model);

    let pipeline = BuildPipeline::new(backend);
    match pipeline.run(&request).await {
        Ok(session) => {
            let saved = if config.no_save {
                None
            } else {
                let path = config.output_dir.join(&session.document.filename);
                std::fs::write(&path, &session.document.content)?;
                Some(path)
            };
            report::print_session(&session, saved.as_deref());
            Ok(())
        }
        Err(err) => {
            // Completed stages stay visible; no document is published.
            if let Some(partial) = err.partial() {
                report::print_partial(partial);
            }
            error!("build failed: {err}");
            eprintln!("{} {err}", "build failed:".red().bold());
            Err(err.into())
        }
    }
}

/// The app request: positional argument, quick example, or interactive ask.
fn resolve_request(config: &Config) -> Result<String> {
    if let Some(ref request) = config.request {
        let request = request.trim();
        if !request.is_empty() {
            return Ok(request.to_string());
        }
    }

    if let Some(n) = config.example {
        return match examples::by_number(n) {
            Some(example) => Ok(example.to_string()),
            None => bail!("no quick example #{n} (valid: 1-{})", QUICK_EXAMPLES.len()),
        };
    }

    eprint!("What do you want to build? ");
    io::stderr().flush()?;
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let input = input.trim();
    if input.is_empty() {
        bail!("please describe what you want to build");
    }
    Ok(input.to_string())
}
