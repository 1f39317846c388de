//! # espanel: device control panel
//!
//! Composition root that wires the adapters together and runs one command.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars, CLI flags)
//! - Initialise logging
//! - Construct the device adapter (HTTP or virtual) and the terminal adapters
//! - Construct application services, injecting adapters via port traits
//! - Run the requested command; for `watch`, own the poller's lifecycle and
//!   tear it down on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod cli;
mod config;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use espanel_adapter_http_hyper::HyperDeviceApi;
use espanel_adapter_terminal::{TerminalNotifier, TerminalRenderer};
use espanel_adapter_virtual::VirtualDevice;
use espanel_app::ports::DeviceApi;
use espanel_app::services::brightness_controller::BrightnessController;
use espanel_app::services::light_controller::LightController;
use espanel_app::services::status_poller::StatusPoller;

use cli::{Cli, Command};
use config::{Backend, Config};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref(), &cli.overrides())?;
    init_tracing(&config.logging.filter);

    let code = match config.device.backend {
        Backend::Http => {
            let api = HyperDeviceApi::new(&config.http_config())?;
            tracing::debug!(base_url = api.base_url(), "using HTTP device");
            run(api, cli.command, config.poll_interval()).await?
        }
        Backend::Virtual => {
            tracing::debug!("using virtual device");
            run(VirtualDevice::default(), cli.command, config.poll_interval()).await?
        }
    };

    Ok(code)
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), falling back to \"info\"");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run `command` against `api`.
///
/// Failures of one-shot commands have already been reported (notifier or
/// log) by the services; they only turn into a failing exit code here.
async fn run<A>(api: A, command: Command, interval: Duration) -> std::io::Result<ExitCode>
where
    A: DeviceApi + Send + Sync + 'static,
{
    let succeeded = match command {
        Command::Watch => return watch(api, interval).await,
        Command::Status => StatusPoller::new(api, TerminalRenderer::stdout())
            .poll_once()
            .await
            .is_ok(),
        Command::Light { state } => LightController::new(api, TerminalNotifier::stdout())
            .control_light(&state)
            .await
            .is_ok(),
        Command::Brightness { value } => BrightnessController::new(api)
            .set_brightness(value)
            .await
            .is_ok(),
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Poll until Ctrl-C, then stop the poller.
async fn watch<A>(api: A, interval: Duration) -> std::io::Result<ExitCode>
where
    A: DeviceApi + Send + Sync + 'static,
{
    let poller = StatusPoller::new(api, TerminalRenderer::stdout()).with_interval(interval);
    let handle = poller.start();

    tokio::signal::ctrl_c().await?;
    tracing::info!("interrupted, stopping");
    handle.stop();

    Ok(ExitCode::SUCCESS)
}
