//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use espanel_domain::brightness::Brightness;
use espanel_domain::light::LightState;

use crate::config::{Backend, FlagOverrides};

/// Control panel for an ESP32 light node.
#[derive(Parser, Debug)]
#[command(name = "espanel", version, about)]
pub struct Cli {
    /// Configuration file (defaults to ./espanel.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Device base URL, e.g. http://192.168.4.1
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Talk to the in-process simulated device instead of a real one
    #[arg(long = "virtual", global = true)]
    pub use_virtual: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Poll the status now and on every interval until interrupted
    Watch,
    /// Poll the status once
    Status,
    /// Set the light state and show the device reply
    Light {
        /// State token, usually `on` or `off`
        state: LightState,
    },
    /// Set the brightness level
    Brightness {
        /// Level between 0 and 255
        value: Brightness,
    },
}

impl Cli {
    /// Configuration values given as flags.
    #[must_use]
    pub fn overrides(&self) -> FlagOverrides {
        FlagOverrides {
            base_url: self.url.clone(),
            backend: self.use_virtual.then_some(Backend::Virtual),
        }
    }
}
