//! Interaction state machines behind the two screens.
//!
//! The workflows hold no view code. They read plain inputs, talk to the
//! server through [`MediaApi`](crate::services::MediaApi) and publish
//! [`Outcome`] values into an [`OutcomeSink`], which in the app is the page's
//! Leptos signal.
//!
//! # Workflows
//!
//! - [`intake`] - File selection from the browser dialog or a drop
//! - [`upload`] - Credential-gated multipart upload
//! - [`register`] - Account registration with an invite key

use leptos::{SignalSet, WriteSignal};
use std::cell::Cell;
use std::rc::Rc;

use crate::types::Outcome;

pub mod intake;
pub mod register;
pub mod upload;

pub use intake::*;
pub use register::*;
pub use upload::*;

/// A user-chosen file. Only the name is ever read on the client side.
pub trait FileHandle: Clone + 'static {
    fn name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }
}

/// Destination of the outcomes a workflow produces.
pub trait OutcomeSink<T> {
    fn publish(&self, outcome: Outcome<T>);
}

impl<T: 'static> OutcomeSink<T> for WriteSignal<Outcome<T>> {
    fn publish(&self, outcome: Outcome<T>) {
        self.set(outcome);
    }
}

/// Stamp identifying one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Generation counter shared by the clones of one workflow.
///
/// Every attempt takes a fresh [`Ticket`]; only the holder of the latest
/// ticket may publish its result.
#[derive(Clone, Debug, Default)]
pub struct Generations {
    latest: Rc<Cell<u64>>,
}

impl Generations {
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

/// Records every published outcome, for workflow tests.
#[cfg(test)]
pub(crate) mod recorder {
    use super::*;
    use std::cell::RefCell;

    pub struct Recorder<T>(RefCell<Vec<Outcome<T>>>);

    impl<T: Clone> Recorder<T> {
        pub fn new() -> Self {
            Self(RefCell::new(Vec::new()))
        }

        pub fn history(&self) -> Vec<Outcome<T>> {
            self.0.borrow().clone()
        }

        pub fn last(&self) -> Outcome<T> {
            self.0.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl<T> OutcomeSink<T> for Recorder<T> {
        fn publish(&self, outcome: Outcome<T>) {
            self.0.borrow_mut().push(outcome);
        }
    }
}
