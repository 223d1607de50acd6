//! Review state store.
//!
//! Unidirectional data flow in the style of Model-View-Intent:
//!
//! ```text
//! Dispatcher ──→ Action ──→ Reducer ──→ State ──→ Selectors
//!     ↑                                              │
//!     └──────────────── Connector ←──────────────────┘
//! ```
//!
//! - **State**: flat, normalized maps ([`ReviewsState`])
//! - **Action**: request lifecycle and response events ([`ReviewAction`])
//! - **Reducer**: pure `(State, Action) -> State` ([`ReviewsReducer`])

pub mod action;
pub mod reducer;
pub mod selectors;
mod state;

use std::sync::Arc;

use parking_lot::RwLock;

pub use action::{Action, ReviewAction};
pub use reducer::{Reducer, ReviewsReducer};
pub use state::{RequestKey, ReviewsState, StoreState};

type Listener = Arc<dyn Fn(&ReviewAction) + Send + Sync>;

/// Shared handle to the review state.
///
/// All mutation goes through [`ReviewStore::dispatch`], which applies
/// actions one at a time under the write lock. Readers get either a
/// snapshot or a closure over the current state.
#[derive(Clone, Default)]
pub struct ReviewStore {
    inner: Arc<RwLock<ReviewsState>>,
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing state.
    pub fn with_state(state: ReviewsState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
            listeners: Arc::default(),
        }
    }

    /// Fold an action into the state, then notify listeners.
    pub fn dispatch(&self, action: ReviewAction) {
        tracing::debug!(action = action.action_type(), "Dispatching action");
        let listeners = self.listeners.read().clone();
        let observed = (!listeners.is_empty()).then(|| action.clone());

        {
            let mut guard = self.inner.write();
            let state = std::mem::take(&mut *guard);
            *guard = ReviewsReducer::reduce(state, action);
        }

        if let Some(action) = observed {
            for listener in &listeners {
                listener(&action);
            }
        }
    }

    /// Register a callback run after every dispatched action.
    ///
    /// Listeners run outside the state lock and may read the store.
    pub fn subscribe(&self, listener: impl Fn(&ReviewAction) + Send + Sync + 'static) {
        self.listeners.write().push(Arc::new(listener));
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> ReviewsState {
        self.inner.read().clone()
    }

    /// Run a selector against the current state without cloning it.
    pub fn read<T>(&self, f: impl FnOnce(&ReviewsState) -> T) -> T {
        f(&self.inner.read())
    }
}
