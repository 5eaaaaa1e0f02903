use serde::{Deserialize, Serialize};

/// One of the twelve tropical zodiac signs, in calendar order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignId {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl SignId {
    pub const ALL: [SignId; 12] = [
        SignId::Aries,
        SignId::Taurus,
        SignId::Gemini,
        SignId::Cancer,
        SignId::Leo,
        SignId::Virgo,
        SignId::Libra,
        SignId::Scorpio,
        SignId::Sagittarius,
        SignId::Capricorn,
        SignId::Aquarius,
        SignId::Pisces,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SignId::Aries => "Aries",
            SignId::Taurus => "Taurus",
            SignId::Gemini => "Gemini",
            SignId::Cancer => "Cancer",
            SignId::Leo => "Leo",
            SignId::Virgo => "Virgo",
            SignId::Libra => "Libra",
            SignId::Scorpio => "Scorpio",
            SignId::Sagittarius => "Sagittarius",
            SignId::Capricorn => "Capricorn",
            SignId::Aquarius => "Aquarius",
            SignId::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for SignId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignRecord {
    pub id: SignId,
    pub arabic_name: &'static str,
    pub date_range: &'static str,
    pub element: Element,
    pub arabic_element: &'static str,
}

/// Elapsed calendar time between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeKind {
    DailyHoroscope,
    DeepAnalysis,
    Compatibility,
}

impl NarrativeKind {
    /// Number of signs a request of this kind carries.
    pub fn sign_count(self) -> usize {
        match self {
            NarrativeKind::Compatibility => 2,
            NarrativeKind::DailyHoroscope | NarrativeKind::DeepAnalysis => 1,
        }
    }

    /// Only the daily horoscope asks the generator for live web results.
    pub fn wants_grounding(self) -> bool {
        matches!(self, NarrativeKind::DailyHoroscope)
    }
}

/// What the caller asked for. Built once per user action and consumed by the prompt builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeRequest {
    kind: NarrativeKind,
    signs: Vec<SignId>,
    grounding_requested: bool,
}

impl NarrativeRequest {
    pub fn daily_horoscope(sign: SignId) -> Self {
        Self::shaped(NarrativeKind::DailyHoroscope, vec![sign])
    }

    pub fn deep_analysis(sign: SignId) -> Self {
        Self::shaped(NarrativeKind::DeepAnalysis, vec![sign])
    }

    pub fn compatibility(first: SignId, second: SignId) -> Self {
        Self::shaped(NarrativeKind::Compatibility, vec![first, second])
    }

    /// Generic constructor; fails when the number of signs does not fit the kind.
    pub fn new(kind: NarrativeKind, signs: Vec<SignId>) -> crate::utils::error::Result<Self> {
        if signs.len() != kind.sign_count() {
            return Err(crate::utils::error::OracleError::InvalidRequest {
                message: format!(
                    "{:?} takes {} sign(s), got {}",
                    kind,
                    kind.sign_count(),
                    signs.len()
                ),
            });
        }
        Ok(Self::shaped(kind, signs))
    }

    fn shaped(kind: NarrativeKind, signs: Vec<SignId>) -> Self {
        Self {
            kind,
            signs,
            grounding_requested: kind.wants_grounding(),
        }
    }

    pub fn kind(&self) -> NarrativeKind {
        self.kind
    }

    pub fn signs(&self) -> &[SignId] {
        &self.signs
    }

    pub fn grounding_requested(&self) -> bool {
        self.grounding_requested
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GenerationOptions {
    pub use_web_search: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Citation {
    pub uri: Option<String>,
}

impl Citation {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
        }
    }
}

/// Raw output of a successful generator call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedText {
    pub text: Option<String>,
    pub citations: Vec<Citation>,
}

/// Which normalization rule produced a [`NarrativeResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeStatus {
    Succeeded,
    Empty,
    Failed,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeResult {
    pub kind: NarrativeKind,
    pub text: String,
    pub sources: Vec<String>,
    pub status: NarrativeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    NotStarted,
    Pending,
    Succeeded,
    Failed,
    Unavailable,
}

impl From<NarrativeStatus> for RequestState {
    fn from(status: NarrativeStatus) -> Self {
        match status {
            NarrativeStatus::Succeeded | NarrativeStatus::Empty => RequestState::Succeeded,
            NarrativeStatus::Failed => RequestState::Failed,
            NarrativeStatus::Unavailable => RequestState::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shapes() {
        let daily = NarrativeRequest::daily_horoscope(SignId::Leo);
        assert!(daily.grounding_requested());
        assert_eq!(daily.signs(), &[SignId::Leo]);

        let compat = NarrativeRequest::compatibility(SignId::Leo, SignId::Libra);
        assert!(!compat.grounding_requested());
        assert_eq!(compat.signs().len(), 2);

        assert!(!NarrativeRequest::deep_analysis(SignId::Virgo).grounding_requested());
    }

    #[test]
    fn test_new_rejects_wrong_sign_count() {
        let err = NarrativeRequest::new(NarrativeKind::Compatibility, vec![SignId::Aries]).unwrap_err();
        assert!(err.is_programming_error());
        assert!(NarrativeRequest::new(NarrativeKind::DeepAnalysis, vec![]).is_err());
        assert!(NarrativeRequest::new(NarrativeKind::DailyHoroscope, vec![SignId::Pisces]).is_ok());
    }

    #[test]
    fn test_sign_order_matches_index() {
        for (i, sign) in SignId::ALL.iter().enumerate() {
            assert_eq!(sign.index(), i);
        }
    }

    #[test]
    fn test_empty_counts_as_succeeded_state() {
        assert_eq!(RequestState::from(NarrativeStatus::Empty), RequestState::Succeeded);
        assert_eq!(RequestState::from(NarrativeStatus::Failed), RequestState::Failed);
    }
}
