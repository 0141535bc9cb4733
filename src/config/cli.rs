use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "rover-input")]
#[command(about = "Collects a validated surface size, rover poses and command sequences")]
pub struct CliConfig {
    /// Path to a TOML file overriding messages and direction symbols
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of rovers to read a pose and command sequence for
    #[arg(long, default_value = "2")]
    pub rovers: usize,

    /// Print the collected plan as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("rovers", self.rovers, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["rover-input"]);
        assert_eq!(config.rovers, 2);
        assert!(config.config.is_none());
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_rovers_rejected() {
        let config = CliConfig::parse_from(["rover-input", "--rovers", "0", "--json"]);
        assert!(config.json);
        assert!(config.validate().is_err());
    }
}
