//! The deferred-execution seam promises drain their continuations through.
//!
//! A [`Scheduler`] only promises that a task runs later than the call that
//! scheduled it, exactly once, in FIFO order. [`EventLoop`] is the in-process
//! implementation: a single-threaded task queue the caller drives by ticking.
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    fmt,
    rc::Rc,
};

use crate::{Error, Promise};

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Shared handle to a scheduler. Every promise keeps one.
pub type SchedulerRef = Rc<dyn Scheduler>;

pub trait Scheduler {
    /// Queue `task` to run after the current synchronous call returns.
    fn schedule(&self, task: Task);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLoopConfig {
    /// Upper bound on ticks a single `run_until_*` call may execute.
    pub tick_budget: usize,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self {
            tick_budget: 1_000_000,
        }
    }
}

/// A FIFO task queue driven by the caller.
///
/// # Examples
///
/// ```
/// use std::{cell::Cell, rc::Rc};
/// use thenable::{EventLoop, Scheduler};
///
/// let event_loop = EventLoop::new();
/// let ran = Rc::new(Cell::new(false));
/// let flag = ran.clone();
/// event_loop.schedule(Box::new(move || flag.set(true)));
///
/// assert!(!ran.get());
/// assert_eq!(event_loop.run_until_idle(), Ok(1));
/// assert!(ran.get());
/// ```
pub struct EventLoop {
    queue: RefCell<VecDeque<Task>>,
    executed: Cell<u64>,
    config: EventLoopConfig,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLoop")
            .field("pending_tasks", &self.pending_tasks())
            .field("executed", &self.executed.get())
            .field("config", &self.config)
            .finish()
    }
}

impl EventLoop {
    pub fn new() -> Self {
        Self::with_config(EventLoopConfig::default())
    }

    pub fn with_config(config: EventLoopConfig) -> Self {
        Self {
            queue: RefCell::new(VecDeque::with_capacity(64)),
            executed: Cell::new(0),
            config,
        }
    }

    pub fn config(&self) -> EventLoopConfig {
        self.config
    }

    pub fn pending_tasks(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Total number of tasks this loop has run.
    pub fn executed_ticks(&self) -> u64 {
        self.executed.get()
    }

    /// Run the oldest queued task. Returns `false` when the queue was empty.
    pub fn tick(&self) -> bool {
        // The borrow must end before the task runs: tasks schedule more tasks.
        let task = self.queue.borrow_mut().pop_front();
        match task {
            Some(task) => {
                let tick = self.executed.get() + 1;
                self.executed.set(tick);
                tracing::trace!(event = "event_loop.tick", tick, remaining = self.pending_tasks());
                task();
                true
            }
            None => false,
        }
    }

    /// Tick until the queue is empty, returning how many tasks ran.
    pub fn run_until_idle(&self) -> Result<usize, Error> {
        let budget = self.config.tick_budget;
        let mut ran = 0;
        while self.tick() {
            ran += 1;
            if ran >= budget && !self.is_idle() {
                tracing::warn!(
                    event = "event_loop.budget_exceeded",
                    budget,
                    remaining = self.pending_tasks(),
                    "Event loop still busy after its tick budget"
                );
                return Err(Error::TickBudgetExceeded { budget });
            }
        }
        Ok(ran)
    }

    /// Tick until `promise` settles and return its outcome.
    ///
    /// Fails with [`Error::Unsettled`] when the queue drains first: nothing left
    /// to run can settle the promise any more.
    pub fn run_until_settled<T, E>(&self, promise: &Promise<T, E>) -> Result<Result<T, E>, Error>
    where
        T: Clone + 'static,
        E: Clone + 'static,
    {
        let budget = self.config.tick_budget;
        let mut ran = 0;
        loop {
            if let Some(outcome) = promise.outcome() {
                return Ok(outcome);
            }
            if ran >= budget {
                tracing::warn!(event = "event_loop.budget_exceeded", budget, "Promise still pending after tick budget");
                return Err(Error::TickBudgetExceeded { budget });
            }
            if !self.tick() {
                tracing::debug!(event = "event_loop.unsettled", ran, "Queue drained with the promise pending");
                return Err(Error::Unsettled);
            }
            ran += 1;
        }
    }
}

impl Scheduler for EventLoop {
    fn schedule(&self, task: Task) {
        let mut queue = self.queue.borrow_mut();
        queue.push_back(task);
        tracing::trace!(event = "event_loop.schedule", queued = queue.len());
    }
}
