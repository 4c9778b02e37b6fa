pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "weddingbook")]
#[command(about = "Address book with wedding tracking, stored as JSON")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "weddingbook.toml")]
    pub config: String,

    /// Override the address book data file from config
    #[arg(long)]
    pub data: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Load the data file and report whether every record is valid
    Check,
    /// List all persons
    Persons,
    /// List all weddings with their participants
    Weddings,
    /// Tag a person (not implemented yet)
    Tag,
    /// Write an empty address book if none exists
    Init,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列 `--data` 優先於設定檔
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(data) = &self.data {
            tracing::info!("🔧 Data file overridden to: {}", data);
            config.storage.address_book_path = data.clone();
        }
    }
}
