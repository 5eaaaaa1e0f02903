use crate::domain::model::{Citation, GeneratedText, NarrativeKind, NarrativeResult, NarrativeStatus};
use crate::utils::error::OracleError;

pub const MAX_SOURCES: usize = 3;
pub const SOURCES_LABEL: &str = "المصادر:";

/// How a single generator attempt ended.
#[derive(Debug)]
pub enum GenerationOutcome {
    Succeeded(GeneratedText),
    Failed(OracleError),
    Unavailable,
}

/// Fixed texts shown in place of generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallbacks {
    pub unavailable: &'static str,
    pub failed: &'static str,
    pub empty: &'static str,
}

pub fn fallbacks(kind: NarrativeKind) -> Fallbacks {
    match kind {
        NarrativeKind::DailyHoroscope => Fallbacks {
            unavailable: "الرجاء ضبط مفتاح API للحصول على التوقعات.",
            failed: "حدث خطأ في الاتصال بالكون. الرجاء المحاولة مجدداً.",
            empty: "النجوم محجوبة اليوم. حاول مرة أخرى لاحقاً.",
        },
        NarrativeKind::DeepAnalysis => Fallbacks {
            unavailable: "الرجاء ضبط مفتاح API للكشف عن الحقائق العميقة.",
            failed: "لم نتمكن من استرجاع بيانات النجوم.",
            empty: "التحليل غير متاح حالياً.",
        },
        NarrativeKind::Compatibility => Fallbacks {
            unavailable: "الرجاء ضبط مفتاح API لحساب التوافق.",
            failed: "النجوم لا يمكنها محاذاة هذا الطلب الآن.",
            empty: "تقرير التوافق غير متاح.",
        },
    }
}

/// Non-empty citation URIs, first occurrence wins, at most [`MAX_SOURCES`].
pub fn collect_sources(citations: &[Citation]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::with_capacity(MAX_SOURCES);
    for uri in citations
        .iter()
        .filter_map(|c| c.uri.as_deref())
        .filter(|u| !u.trim().is_empty())
    {
        if sources.len() == MAX_SOURCES {
            break;
        }
        if !sources.iter().any(|seen| seen == uri) {
            sources.push(uri.to_string());
        }
    }
    sources
}

fn append_sources(body: &str, sources: &[String]) -> String {
    let list = sources
        .iter()
        .map(|u| format!("• {}", u))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{}\n{}", body, SOURCES_LABEL, list)
}

/// Turns any generator outcome into displayable text. Never fails.
pub fn normalize(kind: NarrativeKind, outcome: GenerationOutcome) -> NarrativeResult {
    let texts = fallbacks(kind);

    match outcome {
        GenerationOutcome::Unavailable => {
            tracing::warn!(?kind, "text generator is not configured");
            NarrativeResult {
                kind,
                text: texts.unavailable.to_string(),
                sources: Vec::new(),
                status: NarrativeStatus::Unavailable,
            }
        }
        GenerationOutcome::Failed(error) => {
            tracing::error!(
                ?kind,
                category = ?error.category(),
                "text generation failed: {}",
                error
            );
            NarrativeResult {
                kind,
                text: texts.failed.to_string(),
                sources: Vec::new(),
                status: NarrativeStatus::Failed,
            }
        }
        GenerationOutcome::Succeeded(generated) => {
            let (body, status) = match generated.text.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => (text.to_string(), NarrativeStatus::Succeeded),
                _ => {
                    tracing::warn!(?kind, "text generator returned no content");
                    (texts.empty.to_string(), NarrativeStatus::Empty)
                }
            };

            let sources = if kind.wants_grounding() {
                collect_sources(&generated.citations)
            } else {
                Vec::new()
            };

            let text = if sources.is_empty() {
                body
            } else {
                append_sources(&body, &sources)
            };

            NarrativeResult {
                kind,
                text,
                sources,
                status,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(text: &str, uris: &[&str]) -> GeneratedText {
        GeneratedText {
            text: Some(text.to_string()),
            citations: uris.iter().map(|u| Citation::new(*u)).collect(),
        }
    }

    #[test]
    fn test_sources_deduplicated_and_capped() {
        let citations = vec![
            Citation::new("https://a.example"),
            Citation { uri: None },
            Citation::new("https://b.example"),
            Citation::new(""),
            Citation::new("https://a.example"),
            Citation::new("https://c.example"),
            Citation::new("https://d.example"),
        ];
        assert_eq!(
            collect_sources(&citations),
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_sources_are_kept_verbatim() {
        let citations = vec![
            Citation::new("https://a.example"),
            Citation::new(" https://a.example "),
            Citation::new("\t"),
            Citation::new("https://b.example"),
        ];
        assert_eq!(
            collect_sources(&citations),
            vec!["https://a.example", " https://a.example ", "https://b.example"]
        );
    }

    #[test]
    fn test_daily_appends_labelled_sources() {
        let result = normalize(
            NarrativeKind::DailyHoroscope,
            GenerationOutcome::Succeeded(generated("يوم سعيد", &["https://a.example", "https://b.example"])),
        );
        assert_eq!(result.status, NarrativeStatus::Succeeded);
        assert_eq!(
            result.text,
            "يوم سعيد\n\nالمصادر:\n• https://a.example\n• https://b.example"
        );
        assert_eq!(result.sources.len(), 2);
    }

    #[test]
    fn test_daily_without_citations_is_plain_text() {
        let result = normalize(
            NarrativeKind::DailyHoroscope,
            GenerationOutcome::Succeeded(generated("يوم سعيد", &["", "  "])),
        );
        assert_eq!(result.text, "يوم سعيد");
        assert!(result.sources.is_empty());
    }

    #[test]
    fn test_closed_book_kinds_never_attach_sources() {
        for kind in [NarrativeKind::DeepAnalysis, NarrativeKind::Compatibility] {
            let result = normalize(
                kind,
                GenerationOutcome::Succeeded(generated("نص", &["https://a.example"])),
            );
            assert_eq!(result.text, "نص");
            assert!(result.sources.is_empty());
        }
    }

    #[test]
    fn test_empty_text_uses_obscured_fallback() {
        let result = normalize(
            NarrativeKind::DeepAnalysis,
            GenerationOutcome::Succeeded(GeneratedText::default()),
        );
        assert_eq!(result.status, NarrativeStatus::Empty);
        assert_eq!(result.text, fallbacks(NarrativeKind::DeepAnalysis).empty);

        let blank = normalize(
            NarrativeKind::Compatibility,
            GenerationOutcome::Succeeded(generated("  \n ", &[])),
        );
        assert_eq!(blank.text, fallbacks(NarrativeKind::Compatibility).empty);
    }

    #[test]
    fn test_empty_daily_text_still_lists_sources() {
        let result = normalize(
            NarrativeKind::DailyHoroscope,
            GenerationOutcome::Succeeded(GeneratedText {
                text: None,
                citations: vec![Citation::new("https://a.example")],
            }),
        );
        assert_eq!(result.status, NarrativeStatus::Empty);
        assert!(result.text.starts_with(fallbacks(NarrativeKind::DailyHoroscope).empty));
        assert!(result.text.ends_with("• https://a.example"));
    }

    #[test]
    fn test_failure_and_unavailable_fallbacks() {
        let failed = normalize(
            NarrativeKind::Compatibility,
            GenerationOutcome::Failed(OracleError::RemoteError {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        assert_eq!(failed.status, NarrativeStatus::Failed);
        assert_eq!(failed.text, "النجوم لا يمكنها محاذاة هذا الطلب الآن.");

        let unavailable = normalize(NarrativeKind::DailyHoroscope, GenerationOutcome::Unavailable);
        assert_eq!(unavailable.status, NarrativeStatus::Unavailable);
        assert_eq!(unavailable.text, "الرجاء ضبط مفتاح API للحصول على التوقعات.");
        assert!(unavailable.sources.is_empty());
    }

    #[test]
    fn test_fallbacks_are_distinct_per_kind() {
        let kinds = [
            NarrativeKind::DailyHoroscope,
            NarrativeKind::DeepAnalysis,
            NarrativeKind::Compatibility,
        ];
        for a in kinds {
            for b in kinds {
                if a != b {
                    assert_ne!(fallbacks(a).failed, fallbacks(b).failed);
                    assert_ne!(fallbacks(a).unavailable, fallbacks(b).unavailable);
                }
            }
        }
    }
}
