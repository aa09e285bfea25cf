//! relinfo - Release metadata for dependency updates
//!
//! This tool answers the questions an update bot asks about a dependency:
//! - Where are the release notes, changelog and version diff for an update?
//! - Which pull request references identify a fork branch?
//! - Which project URL does an artifact's POM declare?

use clap::Parser;
use relinfo::cli::{CliArgs, Command, RefsArgs, ResolveArgs, UrlsArgs, VcsArgs};
use relinfo::config::Settings;
use relinfo::domain::{Branch, Repo, Update};
use relinfo::output::{create_formatter, OutputConfig, OutputFormatter, PullRequestRefs};
use relinfo::progress::Progress;
use relinfo::resolver::ArtifactResolver;
use relinfo::vcs::VcsUrlBuilder;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug output.
fn init_tracing(verbose: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) if verbose => "relinfo=debug".to_string(),
        Err(_) => "relinfo=warn".to_string(),
    };
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(args.config.as_deref(), &cwd)?;
    debug!(?settings, "loaded settings");

    let mut output_config = OutputConfig::from_cli(args.json);
    if args.no_color {
        output_config = output_config.without_color();
    }
    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();

    match &args.command {
        Command::Urls(urls) => run_urls(urls, settings, formatter.as_ref(), &mut stdout)?,
        Command::Refs(refs) => run_refs(refs, settings, formatter.as_ref(), &mut stdout)?,
        Command::Resolve(resolve) => {
            let show_progress = !resolve.quiet && !args.json;
            run_resolve(resolve, settings, show_progress, formatter.as_ref(), &mut stdout).await?
        }
    }

    stdout.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn url_builder(settings: Settings, vcs: &VcsArgs) -> VcsUrlBuilder {
    let settings = settings.with_overrides(vcs.vcs_type, vcs.vcs_uri.clone());
    debug!(
        vcs_type = %settings.vcs.vcs_type,
        vcs_uri = %settings.vcs.api_host,
        "using VCS provider"
    );
    VcsUrlBuilder::new(settings.vcs.vcs_type, settings.vcs.api_host)
}

fn run_urls(
    args: &UrlsArgs,
    settings: Settings,
    formatter: &dyn OutputFormatter,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let builder = url_builder(settings, &args.vcs);
    let update = Update::new(&args.from, &args.to);

    let urls = if args.diff_only {
        builder.possible_compare_urls(&args.repo_url, &update)
    } else {
        builder.possible_release_related_urls(&args.repo_url, &update)
    };
    debug!(count = urls.len(), repo_url = %args.repo_url, "built candidate URLs");

    formatter.format_release_urls(&update, &urls, writer)?;
    Ok(())
}

fn run_refs(
    args: &RefsArgs,
    settings: Settings,
    formatter: &dyn OutputFormatter,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let builder = url_builder(settings, &args.vcs);
    let fork = Repo::new(&args.owner, &args.repo);
    let branch = Branch::new(&args.branch);

    let refs = PullRequestRefs {
        head: builder.pull_request_head_for(&fork, &branch),
        create: builder.pull_request_create_ref(&fork, &branch),
    };
    formatter.format_refs(&refs, writer)?;
    Ok(())
}

async fn run_resolve(
    args: &ResolveArgs,
    settings: Settings,
    show_progress: bool,
    formatter: &dyn OutputFormatter,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let dependencies = args.qualified_dependencies();

    let resolver = ArtifactResolver::from_settings(&settings.resolver)?;

    let mut progress = Progress::new(show_progress);
    progress.spinner(&format!("Resolving {} artifact(s)", dependencies.len()));
    let urls = resolver.resolve_urls(&dependencies).await;
    progress.finish_and_clear();

    formatter.format_artifact_urls(&dependencies, &urls, writer)?;
    Ok(())
}
