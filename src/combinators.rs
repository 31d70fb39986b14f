//! Promise combinators built only on `resolve` and `then`.
//!
//! Where a combinator takes "items", pass any iterator of [`Resolution`]s. A
//! single item goes in as a one-element array.
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use crate::{Error, Promise, Resolution, Resolvers, SchedulerRef};

/// Turn `resolution` into a promise.
///
/// A promise is returned unchanged. A thenable is adopted by a new promise,
/// synchronously. A plain value yields an already fulfilled promise.
pub fn resolve<T, E>(scheduler: &SchedulerRef, resolution: Resolution<T, E>) -> Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    match resolution {
        Resolution::Promise(promise) => promise,
        Resolution::Thenable(thenable) => {
            let promise = Promise::pending(scheduler);
            if let Err(reason) = thenable.then(promise.resolvers()) {
                promise.reject(reason);
            }
            promise
        }
        Resolution::Value(value) => {
            let promise = Promise::pending(scheduler);
            promise.fulfill(value);
            promise
        }
    }
}

/// An already rejected promise.
pub fn reject<T, E>(scheduler: &SchedulerRef, reason: E) -> Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    let promise = Promise::pending(scheduler);
    promise.reject(reason);
    promise
}

/// Settle with whichever item settles first. With no items it stays pending.
pub fn race<T, E, I>(scheduler: &SchedulerRef, items: I) -> Promise<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
    I: IntoIterator<Item = Resolution<T, E>>,
{
    let winner = Promise::pending(scheduler);
    for item in items {
        resolve(scheduler, item).forward(winner.resolvers());
    }
    winner
}

struct Collected<T> {
    values: Vec<Option<T>>,
    completed: usize,
}

/// Fulfill with every item's value, in item order, once all have fulfilled.
/// The first rejection rejects the whole set.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use thenable::{all, pair::Producer, EventLoop, Resolution, SchedulerRef};
///
/// let event_loop = Rc::new(EventLoop::new());
/// let scheduler: SchedulerRef = event_loop.clone();
/// let (producer, slow) = Producer::<&str, ()>::new(&scheduler);
///
/// let both = all(&scheduler, [slow.into(), Resolution::Value("fast")]);
/// event_loop.run_until_idle().unwrap();
/// assert!(both.value().is_none());
///
/// producer.resolve("slow");
/// assert_eq!(event_loop.run_until_settled(&both), Ok(Ok(vec!["slow", "fast"])));
/// ```
pub fn all<T, E, I>(scheduler: &SchedulerRef, items: I) -> Promise<Vec<T>, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
    I: IntoIterator<Item = Resolution<T, E>>,
{
    let items: Vec<_> = items.into_iter().collect();
    let length = items.len();
    let combined = Promise::pending(scheduler);
    if length == 0 {
        combined.fulfill(Vec::new());
        return combined;
    }

    let collected = Rc::new(RefCell::new(Collected {
        values: (0..length).map(|_| None).collect(),
        completed: 0,
    }));
    for (index, item) in items.into_iter().enumerate() {
        let collected = collected.clone();
        let on_value = combined.resolvers();
        let on_reason = combined.resolvers();
        resolve(scheduler, item).then(
            move |value| {
                let finished = {
                    let mut collected = collected.borrow_mut();
                    collected.values[index] = Some(value);
                    collected.completed += 1;
                    if collected.completed == length {
                        collected.values.iter_mut().map(Option::take).collect::<Option<Vec<T>>>()
                    } else {
                        None
                    }
                };
                if let Some(values) = finished {
                    on_value.resolve(values);
                }
                Ok(Resolution::Value(()))
            },
            move |reason| {
                on_reason.reject(reason);
                Ok(Resolution::Value(()))
            },
        );
    }
    combined
}

/// Apply `f` to each item and collect the results with [`all`].
///
/// `f` gets the item and its index and returns what that slot resolves with.
pub fn map<T, U, E, I, F>(scheduler: &SchedulerRef, data: I, mut f: F) -> Promise<Vec<U>, E>
where
    U: Clone + 'static,
    E: Clone + 'static,
    I: IntoIterator<Item = T>,
    F: FnMut(T, usize) -> Resolution<U, E>,
{
    let items: Vec<_> = data
        .into_iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect();
    all(scheduler, items)
}

/// Callback form of [`map`]: `f` settles each slot through the resolvers it is
/// handed, now or later.
///
/// `f` runs as each slot's initializer, so its first `Err` stops the mapping
/// and is returned to the caller.
pub fn map_with<T, U, E, I, F>(scheduler: &SchedulerRef, data: I, mut f: F) -> Result<Promise<Vec<U>, E>, E>
where
    U: Clone + 'static,
    E: Clone + 'static,
    I: IntoIterator<Item = T>,
    F: FnMut(T, usize, Resolvers<U, E>) -> Result<(), E>,
{
    let mut items = Vec::new();
    for (index, item) in data.into_iter().enumerate() {
        let slot = Promise::new(scheduler, |settle| f(item, index, settle))?;
        items.push(Resolution::Promise(slot));
    }
    Ok(all(scheduler, items))
}

/// What a [`waterfall`] stage completes with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Batch<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<Batch<T>> for Vec<T> {
    fn from(batch: Batch<T>) -> Self {
        match batch {
            Batch::One(value) => vec![value],
            Batch::Many(values) => values,
        }
    }
}

/// One step of a [`waterfall`]. It receives the previous stage's output
/// (`None` for the first stage) and completes through the resolvers.
pub type Stage<T, E> = Box<dyn FnOnce(Option<Vec<T>>, Resolvers<Batch<T>, E>) -> Result<(), E>>;

type Stages<T, E> = Rc<RefCell<VecDeque<Stage<T, E>>>>;

/// Run `stages` one after another, feeding each the previous output.
///
/// The pipeline fulfills with the last stage's output. A stage that returns
/// `Err` or rejects stops the pipeline and rejects it.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use thenable::{waterfall, Batch, EventLoop, Resolvers, SchedulerRef, Stage};
///
/// let event_loop = Rc::new(EventLoop::new());
/// let scheduler: SchedulerRef = event_loop.clone();
/// type Done = Resolvers<Batch<i32>, String>;
///
/// let stages: Vec<Stage<i32, String>> = vec![
///     Box::new(|_: Option<Vec<i32>>, done: Done| -> Result<(), String> {
///         done.resolve(Batch::One(2));
///         Ok(())
///     }),
///     Box::new(|input: Option<Vec<i32>>, done: Done| -> Result<(), String> {
///         let input = input.unwrap_or_default();
///         done.resolve(Batch::Many(input.iter().map(|n| n * 10).collect()));
///         Ok(())
///     }),
/// ];
/// let pipeline = waterfall(&scheduler, stages).unwrap();
/// assert_eq!(event_loop.run_until_settled(&pipeline), Ok(Ok(vec![20])));
/// ```
pub fn waterfall<T, E>(scheduler: &SchedulerRef, stages: Vec<Stage<T, E>>) -> Result<Promise<Vec<T>, E>, Error>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    if stages.is_empty() {
        return Err(Error::EmptyPipeline);
    }
    let stages = Rc::new(RefCell::new(VecDeque::from(stages)));
    Ok(run_stage(scheduler.clone(), stages, None))
}

fn run_stage<T, E>(scheduler: SchedulerRef, stages: Stages<T, E>, input: Option<Vec<T>>) -> Promise<Vec<T>, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    let Some(stage) = stages.borrow_mut().pop_front() else {
        return resolve(&scheduler, Resolution::Value(input.unwrap_or_default()));
    };
    tracing::trace!(event = "waterfall.stage", remaining = stages.borrow().len());

    let output: Promise<Batch<T>, E> = Promise::pending(&scheduler);
    if let Err(reason) = stage(input, output.resolvers()) {
        output.reject(reason);
    }
    output.and_then(move |batch| {
        let values = Vec::from(batch);
        if stages.borrow().is_empty() {
            return Ok(Resolution::Value(values));
        }
        Ok(Resolution::Promise(run_stage(scheduler, stages, Some(values))))
    })
}
