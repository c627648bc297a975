use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use revstore_provider::{ProviderError, Request, ResourceProvider, Response};
use revstore_store::{InMemoryVersionedStore, StoreConfig};
use revstore_types::{Resource, RESOURCE_TYPE};

use crate::cli::*;

type Provider = ResourceProvider<InMemoryVersionedStore>;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let provider = open_provider(cli.config.as_deref())?;
    match cli.command {
        Command::Read(args) => {
            let request = Request::read(&args.id)?;
            run_single(&provider, &request, &cli.format)
        }
        Command::Search(args) => run_single(&provider, &Request::search(args.name), &cli.format),
        Command::List => run_single(&provider, &Request::ListAll, &cli.format),
        Command::History(args) => {
            let request = Request::history(&args.id)?;
            run_single(&provider, &request, &cli.format)
        }
        Command::Batch(args) => cmd_batch(&provider, &args, &cli.format),
    }
}

fn open_provider(config: Option<&Path>) -> anyhow::Result<Provider> {
    let config = match config {
        Some(path) => StoreConfig::load(path)
            .with_context(|| format!("loading store config {}", path.display()))?,
        None => StoreConfig::default(),
    };
    Ok(ResourceProvider::new(InMemoryVersionedStore::with_config(&config)))
}

fn run_single(provider: &Provider, request: &Request, format: &OutputFormat) -> anyhow::Result<()> {
    let response = provider.handle(request)?;
    print_response(&response, format)
}

fn cmd_batch(provider: &Provider, args: &BatchArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let requests: Vec<Request> = serde_json::from_str(&text)
        .with_context(|| format!("parsing requests in {}", args.file.display()))?;

    let mut failures = 0usize;
    for (index, request) in requests.iter().enumerate() {
        match provider.handle(request) {
            Ok(response) => print_response(&response, format)?,
            Err(err) => {
                failures += 1;
                print_failure(index, request, &err, format)?;
                if !args.keep_going {
                    anyhow::bail!("request {index} ({}) failed", request.name());
                }
            }
        }
    }
    tracing::debug!(total = requests.len(), failures, "batch complete");
    if failures > 0 {
        anyhow::bail!("{failures} of {} requests failed", requests.len());
    }
    Ok(())
}

fn print_response(response: &Response, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Text => match response {
            Response::Resource(resource) => println!("{}", render(resource)),
            Response::Bundle(resources) if resources.is_empty() => {
                println!("{}", "No matching resources.".dimmed())
            }
            Response::Bundle(resources) => {
                for resource in resources {
                    println!("{}", render(resource));
                }
                println!("{} {}", resources.len().to_string().bold(), "total".dimmed());
            }
        },
    }
    Ok(())
}

fn print_failure(
    index: usize,
    request: &Request,
    err: &ProviderError,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let outcome = err.outcome();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text => println!(
            "{} request {} ({}): {} [{}]",
            "✗".red().bold(),
            index,
            request.name().yellow(),
            outcome.diagnostics,
            outcome.code.red(),
        ),
    }
    Ok(())
}

fn render(resource: &Resource) -> String {
    let id = resource
        .id
        .as_ref()
        .map(|id| id.qualified(RESOURCE_TYPE))
        .unwrap_or_else(|| RESOURCE_TYPE.to_string());
    let identifiers: Vec<&str> = resource.identifiers.iter().map(|i| i.value.as_str()).collect();
    let mut line = format!("{}  {}", id.yellow(), resource.name.bold());
    if !identifiers.is_empty() {
        line.push_str(&format!("  [{}]", identifiers.join(", ").cyan()));
    }
    if let Some(description) = &resource.description {
        line.push_str(&format!("  {}", description.dimmed()));
    }
    line
}
