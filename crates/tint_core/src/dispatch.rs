//! Execution-affinity queues
//!
//! Every element mutates its attributes on exactly one thread. A [`Dispatcher`]
//! answers "may I touch this element from here?" and accepts deferred work for
//! that thread when the answer is no.
//!
//! ```rust
//! use tint_core::dispatch::{Dispatcher, ThreadDispatcher};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let (dispatcher, queue) = ThreadDispatcher::for_current_thread();
//! let ran = Arc::new(AtomicBool::new(false));
//!
//! let flag = ran.clone();
//! std::thread::spawn(move || {
//!     assert!(!dispatcher.has_thread_access());
//!     dispatcher.post(Box::new(move || flag.store(true, Ordering::SeqCst)));
//! })
//! .join()
//! .unwrap();
//!
//! assert!(!ran.load(Ordering::SeqCst));
//! assert_eq!(queue.pump(), 1);
//! assert!(ran.load(Ordering::SeqCst));
//! ```

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, ThreadId};

/// Deferred zero-argument call
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// An element's execution-affinity queue
pub trait Dispatcher: Send + Sync {
    /// Whether the calling thread may mutate elements bound to this queue
    fn has_thread_access(&self) -> bool;

    /// Enqueue `task` for the owning thread; never blocks, never waits
    fn post(&self, task: Task);
}

/// Dispatcher bound to the thread that created it, backed by an mpsc channel
///
/// Posted tasks run when the owning thread calls [`DispatchQueue::pump`].
#[derive(Debug)]
pub struct ThreadDispatcher {
    owner: ThreadId,
    sender: Sender<Task>,
}

/// Receiving half of a [`ThreadDispatcher`], drained by the owning thread
#[derive(Debug)]
pub struct DispatchQueue {
    receiver: Receiver<Task>,
}

impl ThreadDispatcher {
    /// Create a dispatcher owned by the calling thread
    pub fn for_current_thread() -> (Arc<Self>, DispatchQueue) {
        let (sender, receiver) = mpsc::channel();
        let dispatcher = Self {
            owner: thread::current().id(),
            sender,
        };
        (Arc::new(dispatcher), DispatchQueue { receiver })
    }

    pub fn owner(&self) -> ThreadId {
        self.owner
    }
}

impl Dispatcher for ThreadDispatcher {
    fn has_thread_access(&self) -> bool {
        thread::current().id() == self.owner
    }

    fn post(&self, task: Task) {
        if self.sender.send(task).is_err() {
            tracing::trace!(owner = ?self.owner, "dispatch queue closed, dropping task");
        }
    }
}

impl DispatchQueue {
    /// Run every task queued so far; returns how many ran
    pub fn pump(&self) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task();
            ran += 1;
        }
        ran
    }

    /// Block until one task arrives and run it; `false` once every sender is gone
    pub fn run_one(&self) -> bool {
        match self.receiver.recv() {
            Ok(task) => {
                task();
                true
            }
            Err(_) => false,
        }
    }
}

/// Dispatcher that treats every thread as the owner and runs posts inline
///
/// Suitable for headless hosts whose elements are internally synchronized.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateDispatcher;

impl Dispatcher for ImmediateDispatcher {
    fn has_thread_access(&self) -> bool {
        true
    }

    fn post(&self, task: Task) {
        task();
    }
}
