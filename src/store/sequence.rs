//! Per-entity request ordering
//!
//! Each mutation takes a ticket before calling the remote API. When the response
//! arrives, it may only be applied to a store if no newer ticket for the same entity
//! has completed in the meantime.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Aluno(i64),
    Livro(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    key: EntityKey,
    seq: u64,
}

#[derive(Debug, Default)]
struct SequenceState {
    next: u64,
    completed: HashMap<EntityKey, u64>,
}

#[derive(Debug, Default)]
pub struct SequenceTracker {
    state: Mutex<SequenceState>,
}

impl SequenceTracker {
    pub fn begin(&self, key: EntityKey) -> Ticket {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.next += 1;
        Ticket { key, seq: state.next }
    }

    /// Record completion; false means a newer request already landed and this
    /// response is stale.
    pub fn complete(&self, ticket: Ticket) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let latest = state.completed.entry(ticket.key).or_insert(0);
        if *latest > ticket.seq {
            tracing::debug!(key = ?ticket.key, seq = ticket.seq, "Discarding stale response");
            return false;
        }
        *latest = ticket.seq;
        true
    }
}
