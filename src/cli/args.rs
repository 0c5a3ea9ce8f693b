//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "periods")]
#[command(about = "Track period start dates and forecast the next ones", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// State file to read and write (default: <data dir>/periods/savedata.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) data_file: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub(crate) yes: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone used to determine today (e.g., "Europe/Madrid", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("periods").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            timezone: Some("UTC".to_string()),
            color: Some(ConfigColorMode::Never),
            debug: true,
            ..Config::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.debug);
        assert!(!cli.use_color());
    }

    #[test]
    fn cli_flags_win_over_config() {
        let config = Config {
            timezone: Some("UTC".to_string()),
            color: Some(ConfigColorMode::Never),
            ..Config::default()
        };
        let cli = parse(&["--timezone", "Europe/Madrid", "--color", "always"]).with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("Europe/Madrid"));
        assert!(cli.use_color());
    }

    #[test]
    fn no_color_overrides_always() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["add", "2024-01-10", "--yes", "--json"]);
        assert!(cli.yes);
        assert!(cli.json);
    }
}
