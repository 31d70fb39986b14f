//! The settle-once state machine, its resolution algorithm and the
//! continuation queue.
use std::{
    cell::RefCell,
    collections::VecDeque,
    fmt,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll, Waker},
};

use crate::{Deferral, SchedulerRef};

/// Observable state of a [`Promise`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    Fulfilled,
    Rejected,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pending => "PENDING",
            Status::Fulfilled => "FULFILLED",
            Status::Rejected => "REJECTED",
        })
    }
}

enum State<T, E> {
    Pending,
    Fulfilled(T),
    Rejected(E),
}

/// Anything a promise can be resolved with.
///
/// Resolving with a `Promise` or a `Thenable` adopts its eventual outcome
/// instead of settling with it.
pub enum Resolution<T, E> {
    Value(T),
    Promise(Promise<T, E>),
    Thenable(Box<dyn Thenable<T, E>>),
}

impl<T, E> Resolution<T, E> {
    pub fn thenable<S>(source: S) -> Self
    where
        S: Thenable<T, E> + 'static,
    {
        Resolution::Thenable(Box::new(source))
    }
}

impl<T, E> From<Promise<T, E>> for Resolution<T, E> {
    fn from(promise: Promise<T, E>) -> Self {
        Resolution::Promise(promise)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Resolution<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Resolution::Promise(promise) => f.debug_tuple("Promise").field(promise).finish(),
            Resolution::Thenable(_) => f.write_str("Thenable(..)"),
        }
    }
}

/// A foreign source of an eventual outcome that a promise can adopt.
///
/// `then` receives the adopting promise's [`Resolvers`] and may call them now
/// or keep them for later. Returning `Err` means attaching failed; the
/// adopting promise is then rejected with that error unless the thenable
/// already settled it.
pub trait Thenable<T, E> {
    fn then(self: Box<Self>, resolvers: Resolvers<T, E>) -> Result<(), E>;
}

impl<T, E, F> Thenable<T, E> for F
where
    F: FnOnce(Resolvers<T, E>) -> Result<(), E>,
{
    fn then(self: Box<Self>, resolvers: Resolvers<T, E>) -> Result<(), E> {
        (*self)(resolvers)
    }
}

impl<T, E> Thenable<T, E> for Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    fn then(self: Box<Self>, resolvers: Resolvers<T, E>) -> Result<(), E> {
        self.forward(resolvers);
        Ok(())
    }
}

/// The `resolve`/`reject` pair bound to one promise.
pub struct Resolvers<T, E> {
    promise: Promise<T, E>,
}

impl<T, E> Clone for Resolvers<T, E> {
    fn clone(&self) -> Self {
        Self {
            promise: self.promise.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Resolvers<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolvers").field("promise", &self.promise).finish()
    }
}

impl<T, E> Resolvers<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    pub fn resolve(&self, value: T) {
        self.promise.resolve(Resolution::Value(value));
    }

    pub fn resolve_with(&self, resolution: Resolution<T, E>) {
        self.promise.resolve(resolution);
    }

    pub fn reject(&self, reason: E) {
        self.promise.reject(reason);
    }
}

type Handler<A, U, E> = Box<dyn FnOnce(A) -> Result<Resolution<U, E>, E>>;

fn passthrough<T, E>(value: T) -> Result<Resolution<T, E>, E> {
    Ok(Resolution::Value(value))
}

fn rethrow<U, E>(reason: E) -> Result<Resolution<U, E>, E> {
    Err(reason)
}

/// A parent's view of one dependent: its promise plus the handler pair.
trait Reaction<T, E> {
    fn is_pending(&self) -> bool;
    fn react(&self, outcome: Result<T, E>);
}

struct Dependent<T, U, E> {
    promise: Promise<U, E>,
    handlers: RefCell<Option<(Handler<T, U, E>, Handler<E, U, E>)>>,
}

impl<T, U, E> Reaction<T, E> for Dependent<T, U, E>
where
    U: Clone + 'static,
    E: Clone + 'static,
{
    fn is_pending(&self) -> bool {
        self.handlers.borrow().is_some() && self.promise.status() == Status::Pending
    }

    fn react(&self, outcome: Result<T, E>) {
        if self.promise.status() != Status::Pending {
            return;
        }
        // Handlers are consumed here so a redundant dispatch can't apply them twice.
        let Some((on_fulfilled, on_rejected)) = self.handlers.borrow_mut().take() else {
            return;
        };
        let handled = match outcome {
            Ok(value) => on_fulfilled(value),
            Err(reason) => on_rejected(reason),
        };
        match handled {
            Ok(resolution) => self.promise.resolve(resolution),
            Err(reason) => self.promise.reject(reason),
        }
    }
}

enum Step<T, E> {
    Resolve(Resolution<T, E>),
    Reject(E),
}

struct Inner<T, E> {
    state: State<T, E>,
    dependents: Vec<Rc<dyn Reaction<T, E>>>,
    wakers: Vec<Waker>,
    scheduler: SchedulerRef,
    dispatcher: Option<Deferral<Promise<T, E>>>,
    resolving: bool,
    trampoline: VecDeque<Step<T, E>>,
}

/// A settle-once container for an eventually available value or failure.
///
/// `Promise` is a handle: clones share the same state. It is also a
/// [`Future`] resolving to `Result<T, E>`.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use futures::executor::block_on;
/// use thenable::{EventLoop, Promise, Resolution, SchedulerRef};
///
/// let event_loop = Rc::new(EventLoop::new());
/// let scheduler: SchedulerRef = event_loop.clone();
///
/// let failing: Promise<u8, String> = Promise::new(&scheduler, |settle| {
///     settle.reject("boom".into());
///     Ok(())
/// })
/// .unwrap();
/// let recovered = failing.catch(|reason| Ok(Resolution::Value(reason.len() as u8)));
///
/// event_loop.run_until_idle().unwrap();
/// assert_eq!(block_on(recovered), Ok(4));
/// ```
pub struct Promise<T, E> {
    inner: Rc<RefCell<Inner<T, E>>>,
}

impl<T, E> Clone for Promise<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let status = match inner.state {
            State::Pending => Status::Pending,
            State::Fulfilled(_) => Status::Fulfilled,
            State::Rejected(_) => Status::Rejected,
        };
        f.debug_struct("Promise")
            .field("status", &status)
            .field("dependents", &inner.dependents.len())
            .finish_non_exhaustive()
    }
}

impl<T, E> Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    /// Create a promise and run `initializer` synchronously with its resolvers.
    ///
    /// An `Err` from the initializer is returned to the caller as is; it does
    /// not reject the promise.
    pub fn new<F>(scheduler: &SchedulerRef, initializer: F) -> Result<Self, E>
    where
        F: FnOnce(Resolvers<T, E>) -> Result<(), E>,
    {
        let promise = Self::pending(scheduler);
        initializer(promise.resolvers())?;
        promise.dispatch();
        Ok(promise)
    }

    /// A promise nothing has settled yet.
    pub fn pending(scheduler: &SchedulerRef) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: State::Pending,
                dependents: Vec::new(),
                wakers: Vec::new(),
                scheduler: scheduler.clone(),
                dispatcher: None,
                resolving: false,
                trampoline: VecDeque::new(),
            })),
        }
    }

    pub fn status(&self) -> Status {
        match self.inner.borrow().state {
            State::Pending => Status::Pending,
            State::Fulfilled(_) => Status::Fulfilled,
            State::Rejected(_) => Status::Rejected,
        }
    }

    pub fn value(&self) -> Option<T> {
        match &self.inner.borrow().state {
            State::Fulfilled(value) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<E> {
        match &self.inner.borrow().state {
            State::Rejected(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// `None` while pending.
    pub fn outcome(&self) -> Option<Result<T, E>> {
        match &self.inner.borrow().state {
            State::Pending => None,
            State::Fulfilled(value) => Some(Ok(value.clone())),
            State::Rejected(reason) => Some(Err(reason.clone())),
        }
    }

    pub fn scheduler(&self) -> SchedulerRef {
        self.inner.borrow().scheduler.clone()
    }

    pub(crate) fn resolvers(&self) -> Resolvers<T, E> {
        Resolvers {
            promise: self.clone(),
        }
    }

    /// Register a handler pair; returns the dependent promise they settle.
    ///
    /// Exactly one of the handlers runs, on a later tick, once this promise
    /// settles. Whatever it returns resolves the dependent (so returning a
    /// promise flattens it into the chain); an `Err` rejects it.
    pub fn then<U, F, R>(&self, on_fulfilled: F, on_rejected: R) -> Promise<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> Result<Resolution<U, E>, E> + 'static,
        R: FnOnce(E) -> Result<Resolution<U, E>, E> + 'static,
    {
        self.register(Box::new(on_fulfilled), Box::new(on_rejected))
    }

    /// `then` with rejections passed through unchanged.
    pub fn and_then<U, F>(&self, on_fulfilled: F) -> Promise<U, E>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> Result<Resolution<U, E>, E> + 'static,
    {
        self.register(Box::new(on_fulfilled), Box::new(rethrow::<U, E>))
    }

    /// `then` with values passed through unchanged.
    pub fn catch<R>(&self, on_rejected: R) -> Promise<T, E>
    where
        R: FnOnce(E) -> Result<Resolution<T, E>, E> + 'static,
    {
        self.register(Box::new(passthrough::<T, E>), Box::new(on_rejected))
    }

    fn register<U>(&self, on_fulfilled: Handler<T, U, E>, on_rejected: Handler<E, U, E>) -> Promise<U, E>
    where
        U: Clone + 'static,
    {
        let dependent = Promise::pending(&self.scheduler());
        let reaction = Rc::new(Dependent {
            promise: dependent.clone(),
            handlers: RefCell::new(Some((on_fulfilled, on_rejected))),
        });
        self.inner.borrow_mut().dependents.push(reaction);
        self.schedule_dispatch();
        dependent
    }

    /// Settle `target` with this promise's eventual outcome.
    pub(crate) fn forward(&self, target: Resolvers<T, E>) {
        let on_reason = target.clone();
        self.then(
            move |value| {
                target.resolve(value);
                Ok(Resolution::Value(()))
            },
            move |reason| {
                on_reason.reject(reason);
                Ok(Resolution::Value(()))
            },
        );
    }

    pub(crate) fn resolve(&self, resolution: Resolution<T, E>) {
        self.run(Step::Resolve(resolution));
    }

    pub(crate) fn reject(&self, reason: E) {
        self.run(Step::Reject(reason));
    }

    pub(crate) fn fulfill(&self, value: T) {
        self.settle(State::Fulfilled(value));
    }

    /// Resolution trampoline. A thenable that calls its resolvers synchronously
    /// re-enters here; those steps are queued and unwound by the outermost call
    /// in the order they were issued.
    fn run(&self, step: Step<T, E>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.resolving {
                inner.trampoline.push_back(step);
                return;
            }
            inner.resolving = true;
        }

        let mut step = step;
        loop {
            match step {
                Step::Reject(reason) => self.settle(State::Rejected(reason)),
                Step::Resolve(Resolution::Value(value)) => self.fulfill(value),
                Step::Resolve(Resolution::Promise(source)) => source.forward(self.resolvers()),
                Step::Resolve(Resolution::Thenable(thenable)) => {
                    if let Err(reason) = thenable.then(self.resolvers()) {
                        tracing::trace!(event = "promise.adopt.failed", "Thenable failed to attach");
                        self.inner.borrow_mut().trampoline.push_back(Step::Reject(reason));
                    }
                }
            }

            let next = {
                let mut inner = self.inner.borrow_mut();
                let next = inner.trampoline.pop_front();
                if next.is_none() {
                    inner.resolving = false;
                }
                next
            };
            match next {
                Some(next) => step = next,
                None => break,
            }
        }
    }

    fn settle(&self, outcome: State<T, E>) {
        let wakers = {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.state, State::Pending) {
                tracing::trace!(event = "promise.settle.ignored", "Promise already settled");
                return;
            }
            inner.state = outcome;
            std::mem::take(&mut inner.wakers)
        };
        tracing::trace!(event = "promise.settle", status = %self.status(), wakers = wakers.len());
        for waker in wakers {
            waker.wake();
        }
        self.schedule_dispatch();
    }

    /// Request a dispatch on a later tick.
    ///
    /// Requests coalesce into the current deferral until its tick fires; after
    /// that a fresh one is armed, so dispatch never runs synchronously here.
    fn schedule_dispatch(&self) {
        let deferral = {
            let mut inner = self.inner.borrow_mut();
            let armed = inner.dispatcher.as_ref().filter(|d| !d.has_fired()).cloned();
            match armed {
                Some(deferral) => deferral,
                None => {
                    let deferral = Deferral::new(&inner.scheduler, |promise: Promise<T, E>| promise.dispatch());
                    inner.dispatcher = Some(deferral.clone());
                    deferral
                }
            }
        };
        deferral.call(self.clone());
    }

    /// Apply the matching handler to every still pending dependent, in
    /// registration order. Safe to call any number of times.
    fn dispatch(&self) {
        let (outcome, pending) = {
            let inner = self.inner.borrow();
            let outcome = match &inner.state {
                State::Pending => return,
                State::Fulfilled(value) => Ok(value.clone()),
                State::Rejected(reason) => Err(reason.clone()),
            };
            let pending: Vec<_> = inner
                .dependents
                .iter()
                .filter(|dependent| dependent.is_pending())
                .cloned()
                .collect();
            (outcome, pending)
        };
        if pending.is_empty() {
            return;
        }
        tracing::trace!(event = "promise.dispatch", dependents = pending.len(), ok = outcome.is_ok());
        for dependent in pending {
            dependent.react(outcome.clone());
        }
    }
}

impl<T, E> Future for Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        match &inner.state {
            State::Fulfilled(value) => Poll::Ready(Ok(value.clone())),
            State::Rejected(reason) => Poll::Ready(Err(reason.clone())),
            State::Pending => {
                if !inner.wakers.iter().any(|waker| waker.will_wake(cx.waker())) {
                    inner.wakers.push(cx.waker().clone());
                }
                Poll::Pending
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventLoop;
    use futures::executor::block_on;

    type P = Promise<i32, String>;

    fn setup() -> (Rc<EventLoop>, SchedulerRef) {
        let event_loop = Rc::new(EventLoop::new());
        let scheduler: SchedulerRef = event_loop.clone();
        (event_loop, scheduler)
    }

    #[test]
    fn new_promise_is_pending() {
        let (_event_loop, scheduler) = setup();
        let promise = P::pending(&scheduler);
        assert_eq!(promise.status(), Status::Pending);
        assert_eq!(promise.value(), None);
        assert_eq!(promise.reason(), None);
        assert_eq!(promise.outcome(), None);
    }

    #[test]
    fn initializer_runs_synchronously() {
        let (_event_loop, scheduler) = setup();
        let promise = P::new(&scheduler, |settle| {
            settle.resolve(7);
            Ok(())
        })
        .unwrap();
        assert_eq!(promise.value(), Some(7));
    }

    #[test]
    fn initializer_error_propagates_to_the_caller() {
        let (event_loop, scheduler) = setup();
        let created = P::new(&scheduler, |_| Err("bad init".to_string()));
        assert_eq!(created.unwrap_err(), "bad init");
        assert_eq!(event_loop.run_until_idle(), Ok(0));
    }

    #[test]
    fn first_settlement_wins() {
        let (_event_loop, scheduler) = setup();
        let promise = P::pending(&scheduler);
        let settle = promise.resolvers();
        settle.reject("nope".into());
        settle.resolve(1);
        settle.reject("later".into());
        assert_eq!(promise.status(), Status::Rejected);
        assert_eq!(promise.reason(), Some("nope".to_string()));
        assert_eq!(promise.value(), None);
    }

    #[test]
    fn handlers_never_run_synchronously() {
        let (event_loop, scheduler) = setup();
        let ran = Rc::new(RefCell::new(false));
        let flag = ran.clone();
        let promise = P::new(&scheduler, |settle| {
            settle.resolve(1);
            Ok(())
        })
        .unwrap();
        let dependent = promise.and_then(move |n| {
            *flag.borrow_mut() = true;
            Ok(Resolution::Value(n + 1))
        });
        assert!(!*ran.borrow());
        assert_eq!(dependent.status(), Status::Pending);

        event_loop.run_until_idle().unwrap();
        assert!(*ran.borrow());
        assert_eq!(dependent.value(), Some(2));
    }

    #[test]
    fn dependents_run_in_registration_order() {
        let (event_loop, scheduler) = setup();
        let order = Rc::new(RefCell::new(Vec::new()));
        let root = P::pending(&scheduler);
        for id in 1..=3 {
            let order = order.clone();
            root.and_then(move |n| {
                order.borrow_mut().push(id);
                Ok(Resolution::Value(n))
            });
        }
        root.resolvers().resolve(0);
        event_loop.run_until_idle().unwrap();
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn a_throwing_handler_only_rejects_its_own_dependent() {
        let (event_loop, scheduler) = setup();
        let root = P::pending(&scheduler);
        let failed = root.and_then(|_| Err::<Resolution<i32, String>, _>("handler blew up".into()));
        let fine = root.and_then(|n| Ok(Resolution::Value(n * 10)));
        root.resolvers().resolve(4);
        event_loop.run_until_idle().unwrap();
        assert_eq!(failed.reason(), Some("handler blew up".to_string()));
        assert_eq!(fine.value(), Some(40));
    }

    #[test]
    fn rejections_pass_through_untyped_links() {
        let (event_loop, scheduler) = setup();
        let root = P::pending(&scheduler);
        let end = root
            .and_then(|n| Ok(Resolution::Value(n + 1)))
            .and_then(|n| Ok(Resolution::Value(n + 1)));
        let recovered = end.catch(|reason| Ok(Resolution::Value(reason.len() as i32)));
        root.resolvers().reject("abc".into());
        event_loop.run_until_idle().unwrap();
        assert_eq!(end.reason(), Some("abc".to_string()));
        assert_eq!(recovered.value(), Some(3));
    }

    #[test]
    fn then_after_settlement_still_runs() {
        let (event_loop, scheduler) = setup();
        let root = P::pending(&scheduler);
        root.resolvers().resolve(5);
        event_loop.run_until_idle().unwrap();

        let late = root.and_then(|n| Ok(Resolution::Value(n * 2)));
        assert_eq!(late.status(), Status::Pending);
        event_loop.run_until_idle().unwrap();
        assert_eq!(late.value(), Some(10));
    }

    #[test]
    fn then_registered_inside_a_handler_runs_on_a_later_tick() {
        let (event_loop, scheduler) = setup();
        let root = P::pending(&scheduler);
        let nested = Rc::new(RefCell::new(None));
        let slot = nested.clone();
        let parent = root.clone();
        root.and_then(move |n| {
            *slot.borrow_mut() = Some(parent.and_then(|m| Ok(Resolution::Value(m + 100))));
            Ok(Resolution::Value(n))
        });
        root.resolvers().resolve(1);
        event_loop.run_until_idle().unwrap();
        let nested = nested.borrow_mut().take().unwrap();
        assert_eq!(nested.value(), Some(101));
    }

    #[test]
    fn returning_a_promise_flattens_it() {
        let (event_loop, scheduler) = setup();
        let root = P::pending(&scheduler);
        let inner = P::pending(&scheduler);
        let handed_out = inner.clone();
        let chained = root.and_then(move |_| Ok(Resolution::Promise(handed_out)));
        root.resolvers().resolve(1);
        event_loop.run_until_idle().unwrap();
        assert_eq!(chained.status(), Status::Pending);

        inner.resolvers().resolve(99);
        event_loop.run_until_idle().unwrap();
        assert_eq!(chained.value(), Some(99));
    }

    #[test]
    fn adoption_unwinds_nested_promises() {
        let (event_loop, scheduler) = setup();
        let innermost = P::pending(&scheduler);
        let middle = P::pending(&scheduler);
        let outer = P::pending(&scheduler);
        middle.resolvers().resolve_with(innermost.clone().into());
        outer.resolvers().resolve_with(middle.clone().into());
        event_loop.run_until_idle().unwrap();
        assert_eq!(outer.status(), Status::Pending);

        innermost.resolvers().reject("deep".into());
        event_loop.run_until_idle().unwrap();
        assert_eq!(middle.reason(), Some("deep".to_string()));
        assert_eq!(outer.reason(), Some("deep".to_string()));
    }

    #[test]
    fn thenable_is_adopted() {
        let (event_loop, scheduler) = setup();
        let promise = P::pending(&scheduler);
        promise.resolvers().resolve_with(Resolution::thenable(|settle: Resolvers<i32, String>| -> Result<(), String> {
            settle.resolve(12);
            Ok(())
        }));
        assert_eq!(promise.value(), Some(12));
        assert!(event_loop.run_until_idle().is_ok());
    }

    #[test]
    fn thenable_attach_error_rejects() {
        let (_event_loop, scheduler) = setup();
        let promise = P::pending(&scheduler);
        promise
            .resolvers()
            .resolve_with(Resolution::thenable(|_: Resolvers<i32, String>| -> Result<(), String> {
                Err("no then".to_string())
            }));
        assert_eq!(promise.reason(), Some("no then".to_string()));
    }

    #[test]
    fn thenable_error_after_resolving_keeps_the_value() {
        let (_event_loop, scheduler) = setup();
        let promise = P::pending(&scheduler);
        promise.resolvers().resolve_with(Resolution::thenable(|settle: Resolvers<i32, String>| -> Result<(), String> {
            settle.resolve(3);
            Err("too late".to_string())
        }));
        assert_eq!(promise.value(), Some(3));
    }

    #[test]
    fn deeply_nested_thenables_do_not_recurse() {
        fn layer(depth: u32) -> Resolution<i32, String> {
            if depth == 0 {
                return Resolution::Value(-1);
            }
            Resolution::thenable(move |settle: Resolvers<i32, String>| -> Result<(), String> {
                settle.resolve_with(layer(depth - 1));
                Ok(())
            })
        }
        let (_event_loop, scheduler) = setup();
        let promise = P::pending(&scheduler);
        promise.resolvers().resolve_with(layer(100_000));
        assert_eq!(promise.value(), Some(-1));
    }

    #[test]
    fn awaiting_a_settled_promise() {
        let (event_loop, scheduler) = setup();
        let promise = P::pending(&scheduler);
        let doubled = promise.and_then(|n| Ok(Resolution::Value(n * 2)));
        promise.resolvers().resolve(21);
        event_loop.run_until_idle().unwrap();
        assert_eq!(block_on(doubled), Ok(42));
        assert_eq!(block_on(promise), Ok(21));
    }

    #[test]
    fn status_displays_like_the_state_names() {
        assert_eq!(Status::Pending.to_string(), "PENDING");
        assert_eq!(Status::Fulfilled.to_string(), "FULFILLED");
        assert_eq!(Status::Rejected.to_string(), "REJECTED");
    }
}
