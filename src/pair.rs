use crate::{Promise, Resolution, Resolvers, SchedulerRef};

/// This `pair::Producer` settles exactly one consumer promise from outside an
/// initializer. The consumer is an ordinary [`Promise`], so it can be chained,
/// adopted, combined or awaited.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use thenable::{pair::Producer, EventLoop, Resolution, SchedulerRef};
///
/// let event_loop = Rc::new(EventLoop::new());
/// let scheduler: SchedulerRef = event_loop.clone();
/// let (producer, consumer) = Producer::<String, String>::new(&scheduler);
/// let shout = consumer.and_then(|s| Ok(Resolution::Value(s.to_uppercase())));
///
/// producer.resolve("hi".into());
/// assert_eq!(event_loop.run_until_settled(&shout), Ok(Ok("HI".to_string())));
/// ```
#[derive(Debug)]
pub struct Producer<T, E> {
    resolvers: Resolvers<T, E>,
    used: bool,
}

impl<T, E> Producer<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    pub fn new(scheduler: &SchedulerRef) -> (Self, Promise<T, E>) {
        let consumer = Promise::pending(scheduler);
        (
            Self {
                resolvers: consumer.resolvers(),
                used: false,
            },
            consumer,
        )
    }

    pub fn resolve(mut self, value: T) {
        self.used = true;
        self.resolvers.resolve(value);
    }

    /// Settle the consumer with another promise's or a thenable's outcome.
    pub fn resolve_with(mut self, resolution: Resolution<T, E>) {
        self.used = true;
        self.resolvers.resolve_with(resolution);
    }

    pub fn reject(mut self, reason: E) {
        self.used = true;
        self.resolvers.reject(reason);
    }
}

impl<T, E> Drop for Producer<T, E> {
    /// An unused producer leaves its consumer pending forever.
    fn drop(&mut self) {
        if !self.used {
            tracing::debug!(
                event = "producer.dropped",
                consumer = ?self.resolvers,
                "Producer dropped without settling its consumer"
            );
        }
    }
}
