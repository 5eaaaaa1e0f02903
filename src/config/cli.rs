use crate::config::settings::GeneratorSettings;
use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::domain::model::SignId;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "abraj")]
#[command(about = "Zodiac signs, ages and Arabic horoscope narratives")]
pub struct CliConfig {
    /// Optional TOML file with a [generator] section
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Overrides API_KEY / GEMINI_API_KEY and the config file
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Zodiac sign for a date (YYYY-MM-DD)
    Sign {
        #[arg(long)]
        date: String,
    },
    /// Age in years, months and days
    Age {
        #[arg(long)]
        birth: String,
        /// Reference date, defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// List the twelve signs
    Signs,
    /// Today's horoscope, grounded in web search
    Daily {
        #[arg(long)]
        sign: SignId,
    },
    /// Deep personality analysis of a sign
    Analysis {
        #[arg(long)]
        sign: SignId,
    },
    /// Compatibility report for two signs
    Compat {
        #[arg(long)]
        sign: SignId,
        #[arg(long)]
        partner: SignId,
    },
}

impl CliConfig {
    /// Layers defaults, the optional config file, the environment and these flags.
    pub fn generator_settings(&self) -> Result<GeneratorSettings> {
        let mut settings = GeneratorSettings::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            settings = settings.merge_toml(&file);
        }

        let settings = settings
            .merge_env(|name| std::env::var(name).ok())
            .with_api_key(self.api_key.as_deref())
            .with_endpoint(self.endpoint.as_deref())
            .with_model(self.model.as_deref())
            .with_timeout(self.timeout);

        settings.validate()?;
        if settings.api_key().is_none() {
            tracing::warn!("No API key configured; narratives will show the configuration notice");
        }
        Ok(settings)
    }
}
