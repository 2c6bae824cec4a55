//! Event broadcasting to lazy watchers.
//!
//! An [`EventDistributor`] hands every event passed to
//! [`notify`](EventDistributor::notify) to all watchers that exist at that
//! moment. Each [`Watcher`] is a pull-object, so the views in this crate apply
//! to it directly:
//!
//! ```rust
//! use std::thread;
//!
//! use seqview::prelude::*;
//!
//! let events = EventDistributor::new();
//! let watcher = events.watch();
//! let reader = thread::spawn(move || to_vec(limit(watcher, 2).unwrap()).unwrap());
//! events.notify("a");
//! events.notify("b");
//! events.notify("c");
//! assert_eq!(reader.join().unwrap(), vec!["a", "b"]);
//! ```

use std::sync::{
    Mutex, MutexGuard,
    mpsc::{self, Receiver, Sender, TryRecvError},
};

use log::{debug, trace};

use crate::{Pull, Result, Step};

/// Fan-out point for events of type `E`.
#[derive(Debug)]
pub struct EventDistributor<E> {
    inner: Mutex<Inner<E>>,
}

#[derive(Debug)]
struct Inner<E> {
    watchers: Vec<Sender<E>>,
    ended: bool,
}

impl<E> Default for EventDistributor<E> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                watchers: Vec::new(),
                ended: false,
            }),
        }
    }
}

impl<E: Clone> EventDistributor<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<E>> {
        // Inner is consistent between statements, so a poisoned lock is usable.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Deliver `event` to every current watcher. Ignored after [`end`](Self::end).
    pub fn notify(&self, event: E) {
        let mut inner = self.lock();
        if inner.ended {
            trace!("notify after end ignored");
            return;
        }
        // watchers whose receiver is gone are dropped here
        inner.watchers.retain(|tx| tx.send(event.clone()).is_ok());
        trace!("event delivered to {} watchers", inner.watchers.len());
    }

    /// Terminate every watcher once it has drained the events already sent.
    pub fn end(&self) {
        let mut inner = self.lock();
        if !inner.ended {
            debug!("ending distributor with {} watchers", inner.watchers.len());
        }
        inner.ended = true;
        inner.watchers.clear();
    }

    /// A new watcher receiving every event notified from now on.
    ///
    /// After [`end`](Self::end), the watcher completes immediately.
    pub fn watch(&self) -> Watcher<E> {
        let (tx, rx) = mpsc::channel();
        let mut inner = self.lock();
        if !inner.ended {
            inner.watchers.push(tx);
        }
        Watcher { events: rx }
    }

    pub fn watcher_count(&self) -> usize {
        self.lock().watchers.len()
    }

    pub fn is_ended(&self) -> bool {
        self.lock().ended
    }
}

/// Pull-object over the events of an [`EventDistributor`].
///
/// [`step`](Pull::step) blocks the calling thread until the next event or the
/// end of the distributor.
#[derive(Debug)]
pub struct Watcher<E> {
    events: Receiver<E>,
}

impl<E> Watcher<E> {
    /// Step without blocking; `None` when no event is pending yet.
    pub fn try_step(&mut self) -> Option<Step<E, ()>> {
        match self.events.try_recv() {
            Ok(event) => Some(Step::Yielded(event)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Step::Complete(())),
        }
    }
}

impl<E> Pull for Watcher<E> {
    type Item = E;
    type Return = ();

    fn step(&mut self) -> Result<Step<E, ()>> {
        Ok(self.events.recv().ok().into())
    }
}

crate::pull_sequence! {
    impl[E] Watcher<E>;
}
