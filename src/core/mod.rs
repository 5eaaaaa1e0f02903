pub mod classifier;
pub mod normalizer;
pub mod oracle;
pub mod prompt;
pub mod tracker;

pub use crate::domain::model::{AgeBreakdown, NarrativeRequest, NarrativeResult, SignId};
pub use crate::domain::ports::{ConfigProvider, TextGenerator};
pub use crate::utils::error::Result;
