//! Synchronous store subscribers.
//!
//! # Responsibility
//! - Keep the ordered list of mutation callbacks.
//! - Hand out handles that remove their callback on `unsubscribe`.
//!
//! # Invariants
//! - Callbacks run in subscription order.
//! - The registry is not borrowed while callbacks run, so a callback may
//!   subscribe or unsubscribe without a re-entrancy failure.
//! - Callbacks subscribed during a notification first run on the next one.
//! - Callbacks unsubscribed during a notification are skipped if they have
//!   not run yet.

use crate::model::question::{Question, QuestionId};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

/// Store mutation delivered to subscribers after it is fully applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Created(QuestionId),
    Updated(QuestionId),
    Deleted(QuestionId),
}

impl StoreEvent {
    /// Returns the id of the question this event is about.
    pub fn question_id(&self) -> QuestionId {
        match self {
            Self::Created(id) | Self::Updated(id) | Self::Deleted(id) => *id,
        }
    }
}

/// Callback invoked with the event and the post-mutation collection.
pub type SubscriberFn = dyn Fn(&StoreEvent, &[Question]);

pub type SubscriptionId = u64;

#[derive(Default)]
struct RegistryState {
    next_id: SubscriptionId,
    callbacks: BTreeMap<SubscriptionId, Rc<SubscriberFn>>,
}

/// Ordered set of store subscribers.
#[derive(Clone, Default)]
pub struct SubscriberRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` and returns its removal handle.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&StoreEvent, &[Question]) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.callbacks.insert(id, Rc::new(callback));
        Subscription {
            id,
            registry: Rc::downgrade(&self.state),
        }
    }

    pub fn len(&self) -> usize {
        self.state.borrow().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().callbacks.is_empty()
    }

    /// Invokes every current subscriber in order.
    ///
    /// A panicking subscriber aborts the remaining notifications and unwinds
    /// to the caller of the mutation; store state is already consistent.
    pub fn notify(&self, event: &StoreEvent, questions: &[Question]) {
        let callbacks: Vec<(SubscriptionId, Rc<SubscriberFn>)> = self
            .state
            .borrow()
            .callbacks
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();
        for (id, callback) in callbacks {
            let still_subscribed = self.state.borrow().callbacks.contains_key(&id);
            if still_subscribed {
                callback(event, questions);
            }
        }
    }
}

impl Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Removal handle for one subscriber.
///
/// Dropping the handle keeps the subscriber registered; call `unsubscribe`
/// to remove it.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<RegistryState>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Removes the subscriber. Returns `false` when it was already gone.
    pub fn unsubscribe(self) -> bool {
        match self.registry.upgrade() {
            Some(state) => state.borrow_mut().callbacks.remove(&self.id).is_some(),
            None => false,
        }
    }
}
