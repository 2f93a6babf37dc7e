//! Store module - the runtime for reducers.
//!
//! The store is synchronous: an action is reduced and the new state
//! published before [`Store::send`] returns. There is no effect execution
//! and no feedback loop, because the reducers in this system describe
//! complete state transitions.

use std::sync::RwLock;
use tasklist_core::Reducer;
use tokio::sync::watch;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent access)
/// 2. Reducer (business logic)
/// 3. Environment (injected dependencies)
/// 4. State publication (a watch channel observers read from)
///
/// Mutation goes through [`Store::send`]; reads go through [`Store::state`]
/// or a subscription. Because every send runs to completion under the state
/// lock, the published value is consistent for the next read.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: RwLock<S>,
    reducer: R,
    environment: E,
    publisher: watch::Sender<S>,
    _actions: std::marker::PhantomData<A>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The initial state is published immediately, so a subscriber created
    /// before the first action still observes a value.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        let (publisher, _) = watch::channel(initial_state.clone());

        Self {
            state: RwLock::new(initial_state),
            reducer,
            environment,
            publisher,
            _actions: std::marker::PhantomData,
        }
    }

    /// Send an action through the reducer and publish the new state
    ///
    /// Both the reducer and the publication run under the state write lock,
    /// so publications carry the same order as reductions and the channel
    /// never holds a snapshot older than a completed send.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub fn send(&self, action: A) {
        tracing::debug!("Processing action");

        {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            self.reducer.reduce(&mut state, action, &self.environment);
            self.publisher.send_replace(state.clone());
        }

        tracing::trace!("State published");
    }

    /// Read current state via a closure
    ///
    /// Access state through a closure to ensure the lock is released promptly:
    ///
    /// ```ignore
    /// let task_count = store.state(|s| s.tasks.len());
    /// ```
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self
            .state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&state)
    }

    /// Subscribe to state publications
    ///
    /// The receiver starts at the current state. After any [`Store::send`]
    /// the next `borrow()` observes the post-action state; async observers
    /// can await `changed()` instead of polling.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.publisher.subscribe()
    }
}
