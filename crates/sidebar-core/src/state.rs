//! Unidirectional state management for widget hosts.
//!
//! Widgets only propose changes (via callbacks or returned messages). The
//! host owns a [`Store`], dispatches those proposals as messages, and
//! rebuilds its widgets from the committed state.
//!
//! # Examples
//!
//! ```
//! use sidebar_core::{Command, State, Store};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Active {
//!     model: Option<String>,
//! }
//!
//! impl State for Active {
//!     type Message = String;
//!
//!     fn update(&mut self, msg: String) -> Command<String> {
//!         self.model = Some(msg);
//!         Command::None
//!     }
//! }
//!
//! let mut store = Store::new(Active::default());
//! store.dispatch("gpt-4".to_string());
//! assert_eq!(store.state().model.as_deref(), Some("gpt-4"));
//! ```

use serde::{Deserialize, Serialize};

/// Application state trait: `State + Message → (State, Command)`.
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns follow-up messages for the host to dispatch.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;
}

/// Follow-up work produced by a state update.
#[derive(Debug, Default)]
pub enum Command<M> {
    /// No command
    #[default]
    None,
    /// Dispatch another message after this one
    Dispatch(M),
    /// Execute multiple commands in order
    Batch(Vec<Command<M>>),
}

impl<M> Command<M> {
    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Flatten into the messages it carries, in order.
    pub fn into_messages(self) -> Vec<M> {
        match self {
            Self::None => Vec::new(),
            Self::Dispatch(msg) => vec![msg],
            Self::Batch(cmds) => cmds.into_iter().flat_map(Self::into_messages).collect(),
        }
    }
}

/// Type alias for state change subscribers.
type Subscriber<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Owns state and notifies subscribers after each committed update.
pub struct Store<S: State> {
    state: S,
    subscribers: Vec<Subscriber<S>>,
}

impl<S: State> Store<S> {
    /// Create a new store with initial state.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Get current state.
    pub const fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch a message, then any messages its command produces.
    pub fn dispatch(&mut self, msg: S::Message) {
        let mut pending = vec![msg];
        while let Some(msg) = pending.pop() {
            let follow_up = self.state.update(msg).into_messages();
            self.notify_subscribers();
            pending.extend(follow_up.into_iter().rev());
        }
    }

    /// Subscribe to state changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    fn notify_subscribers(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }
    }
}
