//! Raw-element production for streams.
//!
//! A stream owns exactly one source for its whole lifetime: either an
//! infinite successor chain or a finite front-removable queue. The source
//! only knows how to produce the next raw element; filtering and mapping
//! happen above it in the stream's pipeline.

use std::collections::VecDeque;

/// Boxed successor function for infinite sources.
pub(crate) type Successor<T> = Box<dyn FnMut(T) -> T + 'static>;

pub(crate) enum Source<T> {
    /// Produces the next element by folding the current one through an
    /// ordered successor chain. An empty chain is the identity (`repeat`).
    Infinite { successors: Vec<Successor<T>> },
    /// Drains a queue front to back, then reports exhaustion.
    Finite { queue: VecDeque<T> },
}

impl<T: Clone + 'static> Source<T> {
    pub(crate) fn infinite() -> Self {
        Source::Infinite {
            successors: Vec::new(),
        }
    }

    pub(crate) fn finite(queue: VecDeque<T>) -> Self {
        Source::Finite { queue }
    }

    /// Produce the raw element that follows `current`.
    ///
    /// Infinite sources apply their successors in registration order and
    /// never exhaust. Finite sources pop the queue front; once the queue
    /// runs dry they clear `remaining` and hand back `current` unchanged —
    /// a sentinel the stream never surfaces as a real element.
    pub(crate) fn advance(&mut self, current: &T, remaining: &mut bool) -> T {
        match self {
            Source::Infinite { successors } => {
                let mut next = current.clone();
                for succ in successors.iter_mut() {
                    next = succ(next);
                }
                next
            }
            Source::Finite { queue } => match queue.pop_front() {
                Some(next) => next,
                None => {
                    log::trace!("finite source exhausted");
                    *remaining = false;
                    current.clone()
                }
            },
        }
    }

    /// Compose a new successor after the existing chain. Only meaningful
    /// for infinite sources; the queue of a finite source is its own
    /// successor and cannot be composed over.
    pub(crate) fn push_successor(&mut self, succ: Successor<T>) {
        if let Source::Infinite { successors } = self {
            successors.push(succ);
        }
    }
}
