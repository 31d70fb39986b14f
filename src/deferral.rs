//! Coalesce calls until the next scheduler tick.
use std::{cell::RefCell, fmt, rc::Rc};

use crate::SchedulerRef;

struct Slot<A> {
    fired: bool,
    pending: Option<A>,
}

/// Wraps an operation so that calls made before its scheduled tick collapse
/// into a single run with the most recently bound argument.
///
/// Constructing a `Deferral` schedules exactly one tick. Until that tick fires
/// every [`call`](Deferral::call) replaces the pending argument; the tick then
/// runs the operation once with whatever was bound last, or not at all if
/// nothing was. Once fired the wrapper is a plain pass-through and each call
/// runs the operation synchronously.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use thenable::{Deferral, EventLoop, SchedulerRef};
///
/// let event_loop = Rc::new(EventLoop::new());
/// let scheduler: SchedulerRef = event_loop.clone();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = seen.clone();
/// let deferral = Deferral::new(&scheduler, move |n: u32| sink.borrow_mut().push(n));
///
/// deferral.call(1);
/// deferral.call(2);
/// assert!(seen.borrow().is_empty());
///
/// event_loop.run_until_idle().unwrap();
/// assert_eq!(*seen.borrow(), vec![2]);
///
/// deferral.call(3);
/// assert_eq!(*seen.borrow(), vec![2, 3]);
/// ```
pub struct Deferral<A> {
    slot: Rc<RefCell<Slot<A>>>,
    op: Rc<dyn Fn(A)>,
}

impl<A> Clone for Deferral<A> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            op: self.op.clone(),
        }
    }
}

impl<A> fmt::Debug for Deferral<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        f.debug_struct("Deferral")
            .field("fired", &slot.fired)
            .field("bound", &slot.pending.is_some())
            .finish()
    }
}

impl<A: 'static> Deferral<A> {
    pub fn new<F>(scheduler: &SchedulerRef, op: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        let slot = Rc::new(RefCell::new(Slot {
            fired: false,
            pending: None,
        }));
        let op: Rc<dyn Fn(A)> = Rc::new(op);

        let tick_slot = slot.clone();
        let tick_op = op.clone();
        scheduler.schedule(Box::new(move || {
            let pending = {
                let mut slot = tick_slot.borrow_mut();
                slot.fired = true;
                slot.pending.take()
            };
            if let Some(args) = pending {
                tick_op(args);
            }
        }));

        Self { slot, op }
    }

    pub fn call(&self, args: A) {
        {
            let mut slot = self.slot.borrow_mut();
            if !slot.fired {
                if slot.pending.replace(args).is_some() {
                    tracing::trace!(event = "deferral.coalesce", "Replaced a pending invocation");
                }
                return;
            }
        }
        (self.op)(args);
    }

    /// `true` once the scheduled tick has run; calls are synchronous from then on.
    pub fn has_fired(&self) -> bool {
        self.slot.borrow().fired
    }
}
