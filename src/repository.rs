//! In-memory work storage with a stream of collection snapshots.
//!
//! The repository is the one owner of the registered-works collection. It is
//! never handed out as a mutable container: callers go through
//! [`save`](WorkRepository::save) and [`remove`](WorkRepository::remove),
//! and every mutation pushes the full current collection to the snapshot
//! stream so renderers can redraw the whole list.
//!
//! Removal is by identity, not equality — registering the same work twice
//! yields two independent entries, and deleting one leaves the other —
//! which is why `save` hands back an `Rc<Work>` handle.
//!
//! Whether a removal should happen at all (the "Deletar?" confirmation in
//! the browser shell) is the caller's decision; the repository only ever
//! does what it is told.

use crate::observable::{Subject, Subscriber, Subscription};
use crate::work::Work;
use std::cell::RefCell;
use std::rc::Rc;

/// Process-lifetime, in-memory store of registered works.
#[derive(Debug, Default)]
pub struct WorkRepository {
    works: RefCell<Vec<Rc<Work>>>,
    stream: Subject<Vec<Rc<Work>>>,
}

impl WorkRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a work and emit the updated collection.
    ///
    /// Returns the identity handle for the stored entry; pass it to
    /// [`remove`](WorkRepository::remove) to delete exactly this entry.
    pub fn save(&self, work: Work) -> Rc<Work> {
        let stored = Rc::new(work);
        self.works.borrow_mut().push(Rc::clone(&stored));

        #[cfg(feature = "tracing")]
        tracing::debug!(total = self.works.borrow().len(), "work saved");

        self.emit();
        stored
    }

    /// Remove a stored work by identity and emit the updated collection.
    ///
    /// A handle that is not (or no longer) stored leaves the collection
    /// unchanged; the stream still emits, mirroring the save path.
    pub fn remove(&self, work: &Rc<Work>) {
        self.works
            .borrow_mut()
            .retain(|stored| !Rc::ptr_eq(stored, work));

        #[cfg(feature = "tracing")]
        tracing::debug!(total = self.works.borrow().len(), "work removed");

        self.emit();
    }

    /// Subscribe to collection snapshots.
    ///
    /// The stream does not replay: a new subscriber sees nothing until the
    /// next mutation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acervo::observable::Subscriber;
    /// use acervo::repository::WorkRepository;
    /// use acervo::work::Work;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let repository = WorkRepository::new();
    /// let rendered = Rc::new(Cell::new(0));
    ///
    /// let count = Rc::clone(&rendered);
    /// repository.subscribe(Subscriber::function(move |works: &Vec<Rc<Work>>| {
    ///     count.set(works.len());
    /// }));
    ///
    /// repository.save(Work::default());
    /// repository.save(Work::default());
    /// assert_eq!(rendered.get(), 2);
    /// ```
    pub fn subscribe(&self, subscriber: Subscriber<Vec<Rc<Work>>>) -> Subscription<Vec<Rc<Work>>> {
        self.stream.subscribe(subscriber)
    }

    /// The snapshot stream itself, for callers that hold it elsewhere.
    pub fn works(&self) -> &Subject<Vec<Rc<Work>>> {
        &self.stream
    }

    /// Direct read of the current collection.
    pub fn snapshot(&self) -> Vec<Rc<Work>> {
        self.works.borrow().clone()
    }

    fn emit(&self) {
        let snapshot = self.snapshot();
        self.stream.next(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(name: &str) -> Work {
        Work {
            name: name.to_string(),
            ..Work::default()
        }
    }

    #[test]
    fn test_save_appends_and_emits_full_collection() {
        let repository = WorkRepository::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        repository.subscribe(Subscriber::function(move |works: &Vec<Rc<Work>>| {
            log.borrow_mut()
                .push(works.iter().map(|w| w.name.clone()).collect::<Vec<_>>());
        }));

        repository.save(work("Abaporu"));
        repository.save(work("O Mestiço"));

        assert_eq!(
            *seen.borrow(),
            vec![
                vec!["Abaporu".to_string()],
                vec!["Abaporu".to_string(), "O Mestiço".to_string()],
            ]
        );
    }

    #[test]
    fn test_remove_deletes_by_identity() {
        let repository = WorkRepository::new();
        // Two equal works are still two distinct entries.
        let first = repository.save(work("Abaporu"));
        let _second = repository.save(work("Abaporu"));

        repository.remove(&first);

        let remaining = repository.snapshot();
        assert_eq!(remaining.len(), 1);
        assert!(!Rc::ptr_eq(&remaining[0], &first));
    }

    #[test]
    fn test_remove_unknown_handle_emits_unchanged_collection() {
        let repository = WorkRepository::new();
        repository.save(work("Abaporu"));
        let unknown = Rc::new(work("O Mestiço"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        repository.subscribe(Subscriber::function(move |works: &Vec<Rc<Work>>| {
            log.borrow_mut().push(works.len());
        }));

        repository.remove(&unknown);

        assert_eq!(repository.snapshot().len(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_stream_does_not_replay_to_new_subscribers() {
        let repository = WorkRepository::new();
        repository.save(work("Abaporu"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        repository.subscribe(Subscriber::function(move |works: &Vec<Rc<Work>>| {
            log.borrow_mut().push(works.len());
        }));

        assert!(seen.borrow().is_empty());

        repository.save(work("O Mestiço"));
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn test_unsubscribed_renderer_stops_receiving() {
        let repository = WorkRepository::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&seen);
        let subscription =
            repository.subscribe(Subscriber::function(move |works: &Vec<Rc<Work>>| {
                log.borrow_mut().push(works.len());
            }));

        repository.save(work("Abaporu"));
        subscription.unsubscribe();
        repository.save(work("O Mestiço"));

        assert_eq!(*seen.borrow(), vec![1]);
    }
}
