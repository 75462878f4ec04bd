//! tmdbkit - TMDB lookup CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, TmdbConfig, resolve_config_path};
use tmdbkit_api::tmdb::endpoints::{
    CompanyList, CompanyResource, MovieList, MovieResource, PersonList, PersonResource,
    ResourceEndpoint, ResourcePath, SearchResource, TvList, TvResource,
};
use tmdbkit_api::tmdb::{
    FindResponse, Locator, RequestOptions, ResolutionConfig, ResourceKind, SearchResultSet,
    TmdbClient,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a locator to a canonical TMDB ID.
    Resolve(ResolveArgs),
    /// Fetch a resource of a movie, TV series, person, or company.
    Get(GetArgs),
    /// Fetch a list that needs no ID (popular, top_rated, ...).
    List(ListArgs),
    /// Run a free-text search.
    Search(SearchArgs),
    /// Look up TMDB records by an external ID.
    Find(FindArgs),
    /// Write credentials and defaults to the config file.
    Init(InitArgs),
}

/// Locator flags shared by `resolve` and `get`.
#[derive(clap::Args)]
struct LocatorArgs {
    /// Canonical TMDB ID.
    #[arg(long)]
    id: Option<u64>,
    /// External ID (e.g. "tt1375666", "nm0000138", or "t27205").
    #[arg(long)]
    external_id: Option<String>,
    /// Free-text query, used when no ID resolves.
    #[arg(long)]
    query: Option<String>,
}

impl LocatorArgs {
    /// Converts the flags into a `Locator`.
    fn to_locator(&self) -> Locator {
        Locator {
            id: self.id,
            external_id: self.external_id.clone(),
            query: self.query.clone(),
        }
    }
}

/// Arguments for the `resolve` subcommand.
#[derive(clap::Args)]
struct ResolveArgs {
    /// Resource kind (movie, tv, person, company).
    #[arg(long)]
    kind: ResourceKind,
    #[command(flatten)]
    locator: LocatorArgs,
}

/// Arguments for the `get` subcommand.
#[derive(clap::Args)]
struct GetArgs {
    /// Resource kind (movie, tv, person, company).
    #[arg(long)]
    kind: ResourceKind,
    /// Resource name (e.g. "details", "credits", "external_ids").
    #[arg(long, default_value = "details")]
    resource: String,
    #[command(flatten)]
    locator: LocatorArgs,
    /// Response language (overrides config).
    #[arg(long)]
    language: Option<String>,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
struct ListArgs {
    /// Resource kind (movie, tv, person).
    #[arg(long)]
    kind: ResourceKind,
    /// List name (e.g. "popular", "now_playing").
    #[arg(long)]
    list: String,
    /// Result page.
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search target (companies, collections, keywords, movies, multi, people, tv).
    #[arg(long, default_value = "multi")]
    kind: SearchResource,
    /// Search query.
    #[arg(long, required = true)]
    query: String,
    /// Result page.
    #[arg(long)]
    page: Option<u32>,
}

/// Arguments for the `find` subcommand.
#[derive(clap::Args)]
struct FindArgs {
    /// External ID (e.g. "tt1375666").
    #[arg(long, required = true)]
    external_id: String,
    /// External source (imdb_id, tvdb_id, wikidata_id, ...).
    #[arg(long, default_value = "imdb_id")]
    source: String,
}

/// Arguments for the `init` subcommand.
#[derive(clap::Args)]
struct InitArgs {
    /// v3 API key.
    #[arg(long)]
    api_key: Option<String>,
    /// v4 read access token.
    #[arg(long)]
    api_token: Option<String>,
    /// Default response language.
    #[arg(long)]
    language: Option<String>,
    /// Default region.
    #[arg(long)]
    region: Option<String>,
    /// API base URL override.
    #[arg(long)]
    base_url: Option<String>,
}

/// Loads the `[tmdb]` config section with environment overrides applied.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file is invalid.
fn load_tmdb_config(dir: Option<&PathBuf>) -> Result<TmdbConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    Ok(config.tmdb.with_credentials(
        std::env::var("TMDB_API_KEY").ok(),
        std::env::var("TMDB_API_TOKEN").ok(),
    ))
}

/// Builds a `TmdbClient` from config.
///
/// # Errors
///
/// Returns an error if no credentials are configured, the base URL is
/// invalid, or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(config: &TmdbConfig) -> Result<TmdbClient> {
    let mut builder = TmdbClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(key) = &config.api_key {
        builder = builder.api_key(key);
    }
    if let Some(token) = &config.api_token {
        builder = builder.api_token(token);
    }
    if let Some(language) = &config.language {
        builder = builder.language(language);
    }
    if let Some(region) = &config.region {
        builder = builder.region(region);
    }
    if let Some(base_url) = &config.base_url {
        let url = reqwest::Url::parse(base_url)
            .with_context(|| format!("invalid TMDB base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }

    builder
        .build()
        .context("failed to build TMDB client (set TMDB_API_KEY or TMDB_API_TOKEN)")
}

/// Runs the `resolve` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the locator does not resolve.
#[instrument(skip_all)]
async fn run_resolve(args: &ResolveArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(&load_tmdb_config(dir)?)?;
    let resolution = ResolutionConfig::for_kind(args.kind, &client);

    let id = resolution
        .resolve(&args.locator.to_locator())
        .await
        .with_context(|| format!("failed to resolve {} ID", args.kind))?;

    tracing::info!("{id}");
    Ok(())
}

/// Resolves the endpoint's ID and fetches `resource`.
async fn fetch_resource<P: ResourcePath>(
    mut endpoint: ResourceEndpoint<'_, TmdbClient, P>,
    locator: &Locator,
    resource: P,
    options: &RequestOptions,
) -> Result<Value> {
    let id = endpoint
        .set_id(locator)
        .await
        .with_context(|| format!("failed to resolve {} ID", P::KIND))?;
    endpoint
        .get(resource, options)
        .await
        .with_context(|| format!("TMDB {}/{id} {} request failed", P::KIND, resource.as_str()))
}

/// Runs the `get` subcommand.
///
/// # Errors
///
/// Returns an error if the resource name is unknown for the kind, the ID
/// does not resolve, or the request fails.
#[instrument(skip_all)]
async fn run_get(args: &GetArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(&load_tmdb_config(dir)?)?;
    let locator = args.locator.to_locator();
    let mut options = RequestOptions::new();
    if let Some(language) = &args.language {
        options.insert("language", language);
    }

    let value = match args.kind {
        ResourceKind::Movie => {
            let resource: MovieResource = args.resource.parse()?;
            fetch_resource(client.movie(), &locator, resource, &options).await?
        }
        ResourceKind::Tv => {
            let resource: TvResource = args.resource.parse()?;
            fetch_resource(client.tv(), &locator, resource, &options).await?
        }
        ResourceKind::Person => {
            let resource: PersonResource = args.resource.parse()?;
            fetch_resource(client.person(), &locator, resource, &options).await?
        }
        ResourceKind::Company => {
            let resource: CompanyResource = args.resource.parse()?;
            fetch_resource(client.company(), &locator, resource, &options).await?
        }
    };

    tracing::info!(
        "{}",
        serde_json::to_string_pretty(&value).context("failed to format response")?
    );
    Ok(())
}

/// Runs the `list` subcommand.
///
/// # Errors
///
/// Returns an error if the list name is unknown for the kind or the request fails.
#[instrument(skip_all)]
async fn run_list(args: &ListArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(&load_tmdb_config(dir)?)?;
    let mut options = RequestOptions::new();
    if let Some(page) = args.page {
        options.insert("page", page);
    }

    let value = match args.kind {
        ResourceKind::Movie => {
            let list: MovieList = args.list.parse()?;
            client.movie().list(list, &options).await
        }
        ResourceKind::Tv => {
            let list: TvList = args.list.parse()?;
            client.tv().list(list, &options).await
        }
        ResourceKind::Person => {
            let list: PersonList = args.list.parse()?;
            client.person().list(list, &options).await
        }
        ResourceKind::Company => {
            let list: CompanyList = args.list.parse()?;
            client.company().list(list, &options).await
        }
    }
    .with_context(|| format!("TMDB {}/{} request failed", args.kind, args.list))?;

    tracing::info!(
        "{}",
        serde_json::to_string_pretty(&value).context("failed to format response")?
    );
    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the request fails or the response is not a result page.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(&load_tmdb_config(dir)?)?;
    let mut options = RequestOptions::new().with("query", &args.query);
    if let Some(page) = args.page {
        options.insert("page", page);
    }

    let value = client
        .search()
        .get(args.kind, &options)
        .await
        .with_context(|| format!("TMDB {} request failed", args.kind.path()))?;
    let response: SearchResultSet =
        serde_json::from_value(value).context("unexpected search response")?;

    tracing::info!("Total results: {}", response.total_results);
    tracing::info!("ID\tName");
    for record in &response.results {
        tracing::info!("{}\t{}", record.id, record.display_name().unwrap_or("-"));
    }

    Ok(())
}

/// Runs the `find` subcommand.
///
/// # Errors
///
/// Returns an error if the request fails or the response is not a find result.
#[instrument(skip_all)]
async fn run_find(args: &FindArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_tmdb_client(&load_tmdb_config(dir)?)?;
    let options = RequestOptions::new().with("external_source", &args.source);

    let value = client
        .find(Some(&args.external_id))
        .find_by_external_id(&options)
        .await
        .with_context(|| format!("TMDB find/{} request failed", args.external_id))?;
    let response: FindResponse =
        serde_json::from_value(value).context("unexpected find response")?;

    for field in response.result_fields() {
        let records = match response.results(field) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(field, error = %err, "skipping malformed find results");
                continue;
            }
        };
        tracing::info!("{field}: {}", records.len());
        for record in &records {
            tracing::info!("  {}\t{}", record.id, record.display_name().unwrap_or("-"));
        }
    }

    Ok(())
}

/// Runs the `init` subcommand.
///
/// Merges the given values into the existing config file.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or saved.
#[instrument(skip_all)]
fn run_init(args: InitArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;

    let tmdb = &mut config.tmdb;
    tmdb.api_key = args.api_key.or(tmdb.api_key.take());
    tmdb.api_token = args.api_token.or(tmdb.api_token.take());
    tmdb.language = args.language.or(tmdb.language.take());
    tmdb.region = args.region.or(tmdb.region.take());
    tmdb.base_url = args.base_url.or(tmdb.base_url.take());

    config.save(&config_path).context("failed to save config")?;
    tracing::info!("Config written to {}", config_path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Resolve(args) => run_resolve(&args, dir).await,
        Commands::Get(args) => run_get(&args, dir).await,
        Commands::List(args) => run_list(&args, dir).await,
        Commands::Search(args) => run_search(&args, dir).await,
        Commands::Find(args) => run_find(&args, dir).await,
        Commands::Init(args) => run_init(args, dir),
    }
}
