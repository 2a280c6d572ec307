//! A minimal push-based event source with revocable subscriptions.
//!
//! [`Subject`] is the multi-subscriber primitive: values pushed with
//! [`next`](Subject::next) reach every currently registered sink,
//! synchronously and in subscription order. [`Observable`] wraps a producer
//! function that drives a single sink, and [`of`] is the convenience
//! producer that emits a fixed sequence and finishes.
//!
//! A sink comes in exactly two shapes — a bare closure, or a type with
//! `next`/`error`/`done` methods — captured by the two variants of
//! [`Subscriber`]. Both normalize to the same delivery surface, with
//! missing handlers as no-ops; a sink of any other shape simply cannot be
//! constructed.
//!
//! Everything here is single-threaded by design: notification is a plain
//! synchronous loop and state lives behind `Rc`/`RefCell`. There is no
//! teardown of a `Subject` itself; it lives as long as its owner.
//!
//! ```rust
//! use acervo::observable::{Subject, Subscriber};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let subject: Subject<i32> = Subject::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! let subscription = subject.subscribe(Subscriber::function(move |v: &i32| {
//!     sink.borrow_mut().push(*v);
//! }));
//!
//! subject.next(&1);
//! subject.next(&2);
//! subscription.unsubscribe();
//! subject.next(&3);
//!
//! assert_eq!(*seen.borrow(), vec![1, 2]);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// A sink with explicit handlers for each notification kind.
///
/// Only `next` is required; `error` and `done` default to no-ops, which is
/// the normalization a bare-closure sink gets implicitly.
pub trait Observer<T> {
    /// A value was pushed.
    fn next(&mut self, value: &T);

    /// The stream failed with a message.
    fn error(&mut self, _message: &str) {}

    /// The stream finished, optionally with a final value.
    fn done(&mut self, _value: Option<&T>) {}
}

/// The two admissible sink shapes, as an explicit tagged union.
///
/// A `Function` sink receives `next` values only; `error` and `done` are
/// dropped. An `Object` sink dispatches to its [`Observer`] methods. There
/// is no third shape, so the malformed-subscriber case of dynamic languages
/// cannot arise here.
pub enum Subscriber<T> {
    /// A bare closure, treated as the `next` handler.
    Function(Box<dyn FnMut(&T)>),
    /// A full observer with `next`/`error`/`done`.
    Object(Box<dyn Observer<T>>),
}

impl<T> Subscriber<T> {
    /// Wrap a closure as a `next`-only sink.
    pub fn function(f: impl FnMut(&T) + 'static) -> Self {
        Subscriber::Function(Box::new(f))
    }

    /// Wrap a full observer.
    pub fn observer(observer: impl Observer<T> + 'static) -> Self {
        Subscriber::Object(Box::new(observer))
    }

    /// Deliver a value.
    pub fn next(&mut self, value: &T) {
        match self {
            Subscriber::Function(f) => f(value),
            Subscriber::Object(o) => o.next(value),
        }
    }

    /// Deliver a failure message.
    pub fn error(&mut self, message: &str) {
        match self {
            Subscriber::Function(_) => {}
            Subscriber::Object(o) => o.error(message),
        }
    }

    /// Deliver completion.
    pub fn done(&mut self, value: Option<&T>) {
        match self {
            Subscriber::Function(_) => {}
            Subscriber::Object(o) => o.done(value),
        }
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subscriber::Function(_) => f.write_str("Subscriber::Function"),
            Subscriber::Object(_) => f.write_str("Subscriber::Object"),
        }
    }
}

struct Registry<T> {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Rc<RefCell<Subscriber<T>>>)>>,
}

impl<T> Registry<T> {
    fn snapshot(&self) -> Vec<Rc<RefCell<Subscriber<T>>>> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, sink)| Rc::clone(sink))
            .collect()
    }
}

/// A multi-subscriber push-based event source.
///
/// Notifications are delivered synchronously, in subscription order, to the
/// sinks registered at the moment the notification starts: a sink that
/// subscribes while a round is being delivered joins from the next round.
pub struct Subject<T> {
    registry: Rc<Registry<T>>,
}

impl<T> Subject<T> {
    /// Create a subject with no subscribers.
    pub fn new() -> Self {
        Subject {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                entries: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Register a sink and return its revocation handle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::observable::{Subject, Subscriber};
    ///
    /// let subject: Subject<String> = Subject::new();
    /// let subscription = subject.subscribe(Subscriber::function(|v: &String| {
    ///     println!("received {}", v);
    /// }));
    ///
    /// subscription.unsubscribe();
    /// subscription.unsubscribe(); // second call is a no-op
    /// ```
    pub fn subscribe(&self, subscriber: Subscriber<T>) -> Subscription<T> {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .entries
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(subscriber))));

        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Push a value to every currently registered sink.
    pub fn next(&self, value: &T) {
        for sink in self.registry.snapshot() {
            sink.borrow_mut().next(value);
        }
    }

    /// Push a failure message to every currently registered sink.
    pub fn error(&self, message: &str) {
        for sink in self.registry.snapshot() {
            sink.borrow_mut().error(message);
        }
    }

    /// Signal completion to every currently registered sink.
    pub fn done(&self, value: Option<&T>) {
        for sink in self.registry.snapshot() {
            sink.borrow_mut().done(value);
        }
    }

    /// Number of currently registered sinks.
    pub fn subscriber_count(&self) -> usize {
        self.registry.entries.borrow().len()
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Subject::new()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Subject {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Revocation handle for one [`Subject`] subscription.
///
/// [`unsubscribe`](Subscription::unsubscribe) removes exactly the sink this
/// handle was returned for. Calling it repeatedly, or after the subject has
/// been dropped, does nothing. Dropping the handle does NOT unsubscribe;
/// revocation is always explicit.
#[derive(Debug)]
pub struct Subscription<T> {
    registry: Weak<Registry<T>>,
    id: u64,
}

impl<T> Subscription<T> {
    /// Remove this subscription's sink from the subject. Idempotent.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .entries
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("entries", &self.entries.borrow().len())
            .finish()
    }
}

/// A producer-driven event source.
///
/// The producer runs once per subscription, driving the normalized sink it
/// is handed. Unlike [`Subject`] there is no shared registry: each
/// subscription gets its own run of the producer.
pub struct Observable<T> {
    producer: Box<dyn Fn(&mut Subscriber<T>)>,
}

impl<T> Observable<T> {
    /// Wrap a producer function.
    pub fn new(producer: impl Fn(&mut Subscriber<T>) + 'static) -> Self {
        Observable {
            producer: Box::new(producer),
        }
    }

    /// Run the producer against a sink.
    pub fn subscribe(&self, mut subscriber: Subscriber<T>) {
        (self.producer)(&mut subscriber);
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observable")
    }
}

/// An observable that synchronously emits each value, then signals `done`.
///
/// # Example
///
/// ```rust
/// use acervo::observable::{of, Subscriber};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// of(vec![1, 2, 3]).subscribe(Subscriber::function(move |v: &i32| {
///     sink.borrow_mut().push(*v);
/// }));
///
/// assert_eq!(*seen.borrow(), vec![1, 2, 3]);
/// ```
pub fn of<T: 'static>(values: Vec<T>) -> Observable<T> {
    Observable::new(move |subscriber| {
        for value in &values {
            subscriber.next(value);
        }
        subscriber.done(None);
    })
}
