pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::GeminiClient;
pub use config::GeneratorSettings;
pub use crate::core::{
    classifier::{age_breakdown, sign_for_date},
    oracle::Oracle,
};
pub use domain::model::{AgeBreakdown, NarrativeKind, NarrativeRequest, NarrativeResult, SignId};
pub use utils::error::{OracleError, Result};
