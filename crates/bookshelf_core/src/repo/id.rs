//! Book id generation.
//!
//! # Invariants
//! - Issued ids are strictly increasing for one generator.
//! - Ids follow the clock (epoch milliseconds) whenever it moves forward.
//! - Once `BookId::MAX` has been issued or observed the generator is
//!   exhausted and issues nothing; callers pick an unused id themselves.

use crate::model::book::BookId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond clock used for id generation.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Time-derived id source that never repeats an id.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last_issued: BookId,
}

impl IdGenerator {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last_issued: BookId::MIN,
        }
    }

    /// Ensures future ids are greater than `id`.
    pub fn observe(&mut self, id: BookId) {
        self.last_issued = self.last_issued.max(id);
    }

    /// Issues `max(now, last + 1)`, or `None` when `last` is `BookId::MAX`.
    pub fn next_id(&mut self) -> Option<BookId> {
        let floor = self.last_issued.checked_add(1)?;
        let id = self.clock.now_millis().max(floor);
        self.last_issued = id;
        Some(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, IdGenerator};
    use std::cell::Cell;
    use std::rc::Rc;

    struct ManualClock(Rc<Cell<i64>>);

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    #[test]
    fn same_millisecond_yields_distinct_ids() {
        let mut ids = IdGenerator::new(ManualClock(Rc::new(Cell::new(1_000))));
        assert_eq!(ids.next_id(), Some(1_000));
        assert_eq!(ids.next_id(), Some(1_001));
        assert_eq!(ids.next_id(), Some(1_002));
    }

    #[test]
    fn follows_clock_when_it_moves_forward() {
        let now = Rc::new(Cell::new(1_000));
        let mut ids = IdGenerator::new(ManualClock(now.clone()));
        ids.next_id();
        now.set(5_000);
        assert_eq!(ids.next_id(), Some(5_000));
    }

    #[test]
    fn clock_stepping_back_does_not_reuse_ids() {
        let now = Rc::new(Cell::new(5_000));
        let mut ids = IdGenerator::new(ManualClock(now.clone()));
        ids.next_id();
        now.set(10);
        assert_eq!(ids.next_id(), Some(5_001));
    }

    #[test]
    fn observed_ids_are_skipped() {
        let mut ids = IdGenerator::new(ManualClock(Rc::new(Cell::new(100))));
        ids.observe(900);
        assert_eq!(ids.next_id(), Some(901));
    }

    #[test]
    fn exhausted_after_observing_max_id() {
        let mut ids = IdGenerator::new(ManualClock(Rc::new(Cell::new(100))));
        ids.observe(i64::MAX);
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn clock_at_max_issues_max_once() {
        let mut ids = IdGenerator::new(ManualClock(Rc::new(Cell::new(i64::MAX))));
        assert_eq!(ids.next_id(), Some(i64::MAX));
        assert_eq!(ids.next_id(), None);
    }
}
