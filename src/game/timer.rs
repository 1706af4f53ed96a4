//! Cancellable one-shot timer
//!
//! Arming spawns a sleep that reports back as [`SessionEvent::TimerFired`].
//! The action itself stays here, so a late or superseded wake-up is simply
//! a ticket that no longer matches.

use super::SessionEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one arming of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Armed<A> {
    ticket: Ticket,
    action: A,
    task: JoinHandle<()>,
}

/// Holds at most one pending action of type `A`
#[derive(Debug)]
pub struct CancellableTimer<A> {
    wake: mpsc::UnboundedSender<SessionEvent>,
    issued: u64,
    armed: Option<Armed<A>>,
}

impl<A> CancellableTimer<A> {
    #[must_use]
    pub fn new(wake: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self {
            wake,
            issued: 0,
            armed: None,
        }
    }

    /// Schedule `action` after `delay`, replacing anything already armed
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, delay: Duration, action: A) -> Ticket {
        self.cancel();

        self.issued += 1;
        let ticket = Ticket(self.issued);
        let wake = self.wake.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = wake.send(SessionEvent::TimerFired(ticket));
        });

        self.armed = Some(Armed {
            ticket,
            action,
            task,
        });
        ticket
    }

    /// Disarm, returning the action that will now never run
    pub fn cancel(&mut self) -> Option<A> {
        self.armed.take().map(|armed| {
            armed.task.abort();
            armed.action
        })
    }

    /// Claim the action for `ticket` if it is still the armed one
    pub fn fire(&mut self, ticket: Ticket) -> Option<A> {
        if self.armed.as_ref().is_some_and(|a| a.ticket == ticket) {
            self.armed.take().map(|a| a.action)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

impl<A> Drop for CancellableTimer<A> {
    fn drop(&mut self) {
        if let Some(armed) = &self.armed {
            armed.task.abort();
        }
    }
}
