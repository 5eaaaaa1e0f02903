use crate::domain::model::{NarrativeKind, NarrativeResult, RequestState};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Issued when a request starts; identifies it among requests for the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: NarrativeKind,
    pub sequence: u64,
}

#[derive(Debug, Default)]
struct FieldSlot {
    latest: u64,
    state: RequestState,
    result: Option<NarrativeResult>,
}

/// Per-field request bookkeeping. A completion is applied only when its ticket is the
/// latest one issued for that field; older completions are discarded.
#[derive(Debug, Default)]
pub struct RequestTracker {
    fields: Mutex<HashMap<NarrativeKind, FieldSlot>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn fields(&self) -> MutexGuard<'_, HashMap<NarrativeKind, FieldSlot>> {
        // Slots stay consistent after a panic elsewhere; every update is a plain assignment.
        self.fields.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn begin(&self, kind: NarrativeKind) -> Ticket {
        let mut fields = self.fields();
        let slot = fields.entry(kind).or_default();
        slot.latest += 1;
        slot.state = RequestState::Pending;
        Ticket {
            kind,
            sequence: slot.latest,
        }
    }

    /// Records `result` for the ticket's field. Returns `false` when a newer request was
    /// issued in the meantime and the result was dropped.
    pub fn complete(&self, ticket: Ticket, result: &NarrativeResult) -> bool {
        let mut fields = self.fields();
        let slot = fields.entry(ticket.kind).or_default();
        if slot.latest != ticket.sequence {
            tracing::debug!(
                kind = ?ticket.kind,
                stale = ticket.sequence,
                latest = slot.latest,
                "discarding stale narrative result"
            );
            return false;
        }
        slot.state = result.status.into();
        slot.result = Some(result.clone());
        true
    }

    pub fn state(&self, kind: NarrativeKind) -> RequestState {
        self.fields()
            .get(&kind)
            .map(|slot| slot.state)
            .unwrap_or_default()
    }

    pub fn latest_result(&self, kind: NarrativeKind) -> Option<NarrativeResult> {
        self.fields().get(&kind).and_then(|slot| slot.result.clone())
    }
}
