//! The calculator's single source of truth.
//!
//! [`StateStore`] owns the current [`CameraConfiguration`]. Every applied
//! update replaces one field and synchronously notifies each subscriber with
//! the full new snapshot. One store exists per session; views receive it by
//! reference and register through [`StateStore::subscribe`].

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use npf_model::{CameraConfiguration, Field, Update};
use tracing::{debug, trace};

type Callback = Box<dyn FnMut(&CameraConfiguration)>;

/// Identifies one registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
    /// Unsubscribed while a notification was running.
    removed: Vec<SubscriptionId>,
    notifying: bool,
}

/// Holds the current configuration and applies updates to it.
pub struct StateStore {
    config: CameraConfiguration,
    observers: Rc<RefCell<Observers>>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("config", &self.config)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl StateStore {
    /// Create a store holding the default configuration.
    pub fn new() -> Self {
        Self::with_config(CameraConfiguration::default())
    }

    pub fn with_config(config: CameraConfiguration) -> Self {
        Self {
            config,
            observers: Rc::new(RefCell::new(Observers::default())),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> &CameraConfiguration {
        &self.config
    }

    /// Replace the field targeted by `update` and notify every subscriber.
    pub fn apply(&mut self, update: Update) {
        debug!(
            field = %update.field(),
            value = %update.value_text(),
            "applying update"
        );
        self.config = self.config.with_update(update);
        self.notify();
    }

    /// Apply raw form text to `field`.
    ///
    /// Never fails: text that does not parse as a number stores the
    /// not-a-number sentinel, and choice fields keep the text verbatim.
    pub fn apply_raw(&mut self, field: Field, raw: &str) {
        self.apply(Update::from_raw(field, raw));
    }

    /// Register `callback` to run after every applied update.
    ///
    /// The callback is not invoked for the current snapshot. Dropping the
    /// returned handle leaves the observer registered.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&CameraConfiguration) + 'static,
    {
        let mut observers = self.observers.borrow_mut();
        let id = SubscriptionId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Box::new(callback)));
        trace!(subscription = id.0, "observer subscribed");
        Subscription {
            id,
            observers: Rc::downgrade(&self.observers),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        let observers = self.observers.borrow();
        observers
            .entries
            .iter()
            .filter(|(id, _)| !observers.removed.contains(id))
            .count()
    }

    fn notify(&self) {
        let mut entries = {
            let mut observers = self.observers.borrow_mut();
            observers.notifying = true;
            std::mem::take(&mut observers.entries)
        };

        for (id, callback) in &mut entries {
            if self.observers.borrow().removed.contains(id) {
                continue;
            }
            callback(&self.config);
        }

        let mut observers = self.observers.borrow_mut();
        observers.notifying = false;
        let removed = std::mem::take(&mut observers.removed);
        entries.retain(|(id, _)| !removed.contains(id));
        entries.append(&mut observers.entries);
        observers.entries = entries;
    }
}

/// Handle returned by [`StateStore::subscribe`].
#[derive(Debug)]
#[must_use = "keep the subscription to be able to unsubscribe"]
pub struct Subscription {
    id: SubscriptionId,
    observers: Weak<RefCell<Observers>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove the observer. Takes effect before the next notification, also
    /// when called from inside a callback.
    pub fn unsubscribe(self) {
        let Some(observers) = self.observers.upgrade() else {
            return;
        };
        let mut observers = observers.borrow_mut();
        if observers.notifying {
            observers.removed.push(self.id);
        } else {
            observers.entries.retain(|(id, _)| *id != self.id);
        }
        trace!(subscription = self.id.0, "observer unsubscribed");
    }
}
