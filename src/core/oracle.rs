use crate::core::classifier::{age_breakdown, sign_for_date};
use crate::core::normalizer::{normalize, GenerationOutcome};
use crate::core::prompt::build_prompt;
use crate::core::tracker::RequestTracker;
use crate::core::{ConfigProvider, TextGenerator};
use crate::domain::model::{AgeBreakdown, NarrativeRequest, NarrativeResult, SignId};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Entry point for the presentation layer: sign lookup, age and the three narratives.
pub struct Oracle<G: TextGenerator, C: ConfigProvider> {
    generator: G,
    config: C,
    tracker: RequestTracker,
    fixed_today: Option<NaiveDate>,
}

impl<G: TextGenerator, C: ConfigProvider> Oracle<G, C> {
    pub fn new(generator: G, config: C) -> Self {
        Self {
            generator,
            config,
            tracker: RequestTracker::new(),
            fixed_today: None,
        }
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    pub fn is_available(&self) -> bool {
        self.config.api_key().is_some()
    }

    pub fn classify_sign(&self, date: NaiveDate) -> SignId {
        sign_for_date(date)
    }

    pub fn compute_age(&self, birth: NaiveDate) -> Result<AgeBreakdown> {
        age_breakdown(birth, self.today())
    }

    pub async fn fetch_daily_horoscope(&self, sign: SignId) -> NarrativeResult {
        self.fetch(NarrativeRequest::daily_horoscope(sign)).await
    }

    pub async fn fetch_deep_analysis(&self, sign: SignId) -> NarrativeResult {
        self.fetch(NarrativeRequest::deep_analysis(sign)).await
    }

    pub async fn fetch_compatibility(&self, first: SignId, second: SignId) -> NarrativeResult {
        self.fetch(NarrativeRequest::compatibility(first, second)).await
    }

    /// Runs one request to completion. Always yields displayable text.
    pub async fn fetch(&self, request: NarrativeRequest) -> NarrativeResult {
        self.fetch_tracked(request).await.0
    }

    /// Like [`Oracle::fetch`], but returns `None` when a newer request for the same field
    /// was issued while this one was in flight.
    pub async fn fetch_current(&self, request: NarrativeRequest) -> Option<NarrativeResult> {
        let (result, current) = self.fetch_tracked(request).await;
        current.then_some(result)
    }

    async fn fetch_tracked(&self, request: NarrativeRequest) -> (NarrativeResult, bool) {
        let kind = request.kind();
        let ticket = self.tracker.begin(kind);

        let outcome = if !self.is_available() {
            GenerationOutcome::Unavailable
        } else {
            let prompt = build_prompt(&request, self.today());
            tracing::info!(
                ?kind,
                signs = ?request.signs(),
                model = self.config.model(),
                "requesting narrative"
            );
            match self.generator.generate(&prompt.text, prompt.options).await {
                Ok(generated) => GenerationOutcome::Succeeded(generated),
                Err(e) => GenerationOutcome::Failed(e),
            }
        };

        let result = normalize(kind, outcome);
        let current = self.tracker.complete(ticket, &result);
        (result, current)
    }
}
