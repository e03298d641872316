use super::args::{Cli, Commands};
use super::handlers;
use super::logging;
use anyhow::{Context, Result};
use tstamp_runtime::Config;
use tstamp_runtime::config::resolve_config_path;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    match cli.command {
        Commands::Verify => handlers::verify::handle(&config),

        Commands::Add { selection } => handlers::add::handle(&config, &selection),

        Commands::Export {
            selection,
            format,
            out_dir,
            line_ending,
            user_agent,
        } => handlers::export::handle(
            &config,
            &selection,
            format.into(),
            &out_dir,
            line_ending.map(Into::into),
            user_agent.as_deref(),
        ),

        Commands::List {
            records,
            user,
            since,
            until,
            sort,
            desc,
            page,
            page_size,
        } => handlers::list::handle(
            &config,
            handlers::list::ListOptions {
                records,
                user,
                since,
                until,
                sort: sort.map(Into::into),
                desc,
                page,
                page_size,
            },
        ),
    }
}
