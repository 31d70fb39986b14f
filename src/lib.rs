//! Settle-once promises with deferred, ordered continuations.
//!
//! A [`Promise`] starts pending, settles exactly once, and hands its outcome
//! to every continuation registered with [`Promise::then`] in registration
//! order. Continuations never run on the call stack that registered or settled
//! them: they are drained on a later tick of a [`Scheduler`].
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//! use thenable::{EventLoop, Promise, Resolution, SchedulerRef};
//!
//! let event_loop = Rc::new(EventLoop::new());
//! let scheduler: SchedulerRef = event_loop.clone();
//!
//! let answer: Promise<i32, String> = Promise::new(&scheduler, |settle| {
//!     settle.resolve(20);
//!     Ok(())
//! })
//! .unwrap();
//! let doubled = answer.and_then(|n| Ok(Resolution::Value(n * 2 + 2)));
//!
//! assert_eq!(event_loop.run_until_settled(&doubled), Ok(Ok(42)));
//! ```
use thiserror::Error;

pub mod combinators;
pub mod deferral;
pub mod pair;
pub mod promise;
pub mod scheduler;

pub use combinators::{all, map, map_with, race, reject, resolve, waterfall, Batch, Stage};
pub use deferral::Deferral;
pub use promise::{Promise, Resolution, Resolvers, Status, Thenable};
pub use scheduler::{EventLoop, EventLoopConfig, Scheduler, SchedulerRef, Task};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("waterfall needs at least one stage")]
    EmptyPipeline,
    #[error("the event loop went idle before the promise settled")]
    Unsettled,
    #[error("the event loop exceeded its budget of {budget} ticks")]
    TickBudgetExceeded { budget: usize },
}
