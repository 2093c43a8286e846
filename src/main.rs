use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use feathers_splash::config::{validate_url, Config};
use feathers_splash::load::mailbox;
use feathers_splash::loader::{ContentLoader, HttpLoader, Scenario, ScriptedLoader};
use feathers_splash::logging::{default_log_path, init_tracing};
use feathers_splash::shutdown::ShutdownCoordinator;
use feathers_splash::surface::ContentSurface;
use feathers_splash::ui::app::App;
use feathers_splash::ui::presentation::Presenter;

/// Label shown on the content surface in simulation mode without a URL.
const SIMULATED_URL: &str = "simulated://feathers";

/// How long teardown waits for the loader task.
const LOADER_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Parser)]
#[command(name = "feathers-splash", version, about = "Animated loading screen for a remote page")]
struct Cli {
    /// Page to load (overrides loader.url from the config file)
    url: Option<String>,

    /// Config file (default: ~/.config/feathers-splash/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Replay a scripted load instead of fetching over the network
    #[arg(long, value_enum, value_name = "SCENARIO")]
    simulate: Option<Scenario>,

    /// Log file (overrides logging.file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(default_log_path);
    init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let url = match (cli.url.clone().or_else(|| config.loader.url.clone()), cli.simulate) {
        (Some(url), _) => {
            validate_url(&url)?;
            url
        }
        (None, Some(_)) => SIMULATED_URL.to_string(),
        (None, None) => bail!(
            "No URL given; pass one or set loader.url in {}",
            Config::config_path().display()
        ),
    };

    let surface = ContentSurface::new(url.clone());
    let loader = match cli.simulate {
        Some(scenario) => ContentLoader::Scripted(ScriptedLoader::new(
            scenario,
            config.loader.simulate_step(),
            surface.clone(),
        )),
        None => ContentLoader::Http(HttpLoader::new(&config.loader, url, surface.clone())?),
    };

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .register_os_signals()
        .context("Failed to register signal handlers")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (events, mailbox) = mailbox::channel();
    runtime.spawn(loader.run(events, shutdown.handle()));

    let app = App::new(
        Presenter::new(config.ui.percent_rounding),
        config.ui.transitions,
        surface,
        config.ui.logo.clone(),
    );
    let result = feathers_splash::ui::run(app, mailbox, &shutdown, config.ui.tick_rate());

    shutdown.signal();
    runtime.shutdown_timeout(LOADER_GRACE);
    result.context("Splash screen failed")
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use feathers_splash::loader::Scenario;

    #[test]
    fn parses_url_and_simulation() {
        let cli = Cli::try_parse_from(["feathers-splash", "https://example.org", "--simulate", "offline"])
            .unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.org"));
        assert_eq!(cli.simulate, Some(Scenario::Offline));
        assert!(cli.config.is_none());
    }

    #[test]
    fn rejects_unknown_scenario() {
        assert!(Cli::try_parse_from(["feathers-splash", "--simulate", "meteor"]).is_err());
    }
}
