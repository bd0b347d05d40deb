//! Core lazy stream engine.
//!
//! A [`Stream`] represents a potentially infinite series of elements that
//! is evaluated strictly on demand: nothing is computed until a terminal
//! operation pulls, and nothing is materialized unless the caller asks
//! for a finite collection. Each pull drains the source through the
//! stream's filter/map pipeline until one element is accepted.
//!
//! Evaluation is single-threaded and synchronous. Every operation takes
//! `&mut self`, so the borrow checker enforces the one-logical-owner
//! discipline the engine requires; wrap a stream in a lock before
//! sharing it across threads.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{StreamError, StreamResult};
use crate::source::Source;

/// Boxed filter predicate.
pub(crate) type Predicate<T> = Box<dyn FnMut(&T) -> bool + 'static>;

/// Boxed element mapper.
pub(crate) type MapFn<T> = Box<dyn FnMut(T) -> T + 'static>;

/// A lazy, demand-driven stream of elements.
///
/// Streams are created through [`Stream::repeat`], [`Stream::iterate`] or
/// [`Stream::of`], configured by chaining [`filter`](Stream::filter) /
/// [`map`](Stream::map) / [`drop_while`](Stream::drop_while) calls
/// (configuration mutates the pipeline in place), and consumed by
/// terminal operations such as [`take`](Stream::take),
/// [`collect`](Stream::collect) or [`reduce`](Stream::reduce).
///
/// ```
/// use lazy_stream::Stream;
///
/// let doubled = Stream::iterate(1, |x| x * 2).take(5);
/// assert_eq!(doubled, vec![1, 2, 4, 8, 16]);
/// ```
pub struct Stream<T> {
    /// Next raw value the source will hand out; `Some` while the stream
    /// has anything left to produce.
    head: Option<T>,
    /// Cleared once a finite source runs dry. Infinite sources never
    /// clear it.
    remaining: bool,
    source: Source<T>,
    /// Acceptance is the AND of every predicate, evaluated newest-first:
    /// a newly registered filter wraps the older chain.
    filters: Vec<Predicate<T>>,
    /// Mappers apply in registration order: `map(f).map(g)` computes
    /// `g(f(x))`.
    maps: Vec<MapFn<T>>,
}

impl<T: Clone + 'static> Stream<T> {
    // ================================
    // Construction factories
    // ================================

    /// Construct an infinite stream that repeats a single value.
    pub fn repeat(seed: T) -> Stream<T> {
        Stream {
            head: Some(seed),
            remaining: true,
            source: Source::infinite(),
            filters: Vec::new(),
            maps: Vec::new(),
        }
    }

    /// Construct an infinite stream by repeatedly applying a successor
    /// function: `seed, succ(seed), succ(succ(seed)), ...`.
    pub fn iterate<F>(seed: T, succ: F) -> Stream<T>
    where
        F: FnMut(T) -> T + 'static,
    {
        let mut stream = Stream::repeat(seed);
        stream.source.push_successor(Box::new(succ));
        stream
    }

    /// Construct a finite stream from an ordered collection.
    ///
    /// The input is copied into a queue so front removal stays O(1); the
    /// first element is primed as the stream head. An empty input yields
    /// an already-exhausted stream.
    pub fn of<I>(items: I) -> Stream<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue: VecDeque<T> = items.into_iter().collect();
        let head = queue.pop_front();
        let remaining = head.is_some();
        Stream {
            head,
            remaining,
            source: Source::finite(queue),
            filters: Vec::new(),
            maps: Vec::new(),
        }
    }

    // ================================
    // Head stepping
    // ================================

    /// Hand out the current raw head and advance it via the source.
    /// The source is never consulted after exhaustion.
    fn take_head(&mut self) -> Option<T> {
        let head = self.head.take()?;
        if self.remaining {
            self.head = Some(self.source.advance(&head, &mut self.remaining));
        }
        Some(head)
    }

    /// Pull raw elements until one survives the pipeline.
    ///
    /// Each raw element is folded through the map chain, then tested
    /// against the filters. Returns `None` once the source exhausts with
    /// nothing accepted. On an infinite source a perpetually failing
    /// filter makes this loop forever; keeping the predicate chain
    /// eventually satisfiable is the caller's obligation.
    pub(crate) fn eval_head(&mut self) -> Option<T> {
        if !self.remaining {
            return None;
        }
        loop {
            let raw = self.take_head()?;
            let mut mapped = raw;
            for mapper in self.maps.iter_mut() {
                mapped = mapper(mapped);
            }
            if self.filters.iter_mut().rev().all(|pred| pred(&mapped)) {
                return Some(mapped);
            }
            if !self.remaining {
                return None;
            }
        }
    }

    fn drop_head(&mut self) {
        let _ = self.eval_head();
    }

    // ================================
    // Pipeline configuration
    // ================================

    /// Register a filter. Only elements satisfying every registered
    /// predicate are produced; the newest predicate is consulted first.
    pub fn filter<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Register a mapper. Mappers apply in registration order, so
    /// `stream.map(f).map(g)` produces `g(f(x))` for each raw `x`.
    pub fn map<M>(&mut self, mapper: M) -> &mut Self
    where
        M: FnMut(T) -> T + 'static,
    {
        self.maps.push(Box::new(mapper));
        self
    }

    /// Register the negation of `predicate` as a *permanent* filter.
    ///
    /// This is not a one-shot prefix skip: elements matching the
    /// predicate are suppressed for the rest of the stream's life, and
    /// the filter keeps interacting with later `filter` calls by logical
    /// AND.
    pub fn drop_while<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.filter(move |x| !predicate(x))
    }

    /// Observe each produced element without changing it. Registered as
    /// a pass-through mapper.
    pub fn peek<F>(&mut self, mut observer: F) -> &mut Self
    where
        F: FnMut(&T) + 'static,
    {
        self.map(move |x| {
            observer(&x);
            x
        })
    }

    // ================================
    // Consumer / terminal operations
    // ================================

    /// Discard up to `n` accepted elements in place.
    pub fn drop(&mut self, n: usize) -> &mut Self {
        log::trace!("dropping up to {} elements", n);
        for _ in 0..n {
            if !self.remaining {
                break;
            }
            self.drop_head();
        }
        self
    }

    /// Discard the first accepted element. Equivalent to `drop(1)`.
    pub fn tail(&mut self) -> &mut Self {
        self.drop(1)
    }

    /// Materialize up to `n` accepted elements. The result is shorter
    /// than `n` only if the stream exhausts first.
    pub fn take(&mut self, n: usize) -> Vec<T> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            match self.eval_head() {
                Some(value) => values.push(value),
                None => break,
            }
        }
        values
    }

    /// Collect accepted elements while `predicate` holds, stopping at the
    /// first failure or at exhaustion. The element that fails the
    /// predicate is consumed and discarded.
    fn take_list<P>(&mut self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut values = Vec::new();
        while let Some(head) = self.eval_head() {
            if !predicate(&head) {
                break;
            }
            values.push(head);
        }
        values
    }

    /// Consume the longest prefix satisfying `predicate` and return it as
    /// a new finite stream. The first failing element is consumed and
    /// discarded. Diverges if the predicate never fails on an infinite
    /// stream.
    pub fn take_while<P>(&mut self, predicate: P) -> Stream<T>
    where
        P: FnMut(&T) -> bool,
    {
        Stream::of(self.take_list(predicate))
    }

    /// Materialize every remaining accepted element. Diverges on an
    /// infinite stream; use [`take`](Stream::take) to bound the pull.
    pub fn collect(&mut self) -> Vec<T> {
        self.take_list(|_| true)
    }

    /// Invoke `consumer` on every remaining accepted element. Diverges on
    /// an infinite stream.
    pub fn for_each<F>(&mut self, mut consumer: F)
    where
        F: FnMut(T),
    {
        while let Some(head) = self.eval_head() {
            consumer(head);
        }
    }

    /// Left-fold every remaining accepted element into `identity`.
    /// Diverges on an infinite stream.
    pub fn reduce<R, F>(&mut self, identity: R, mut combine: F) -> R
    where
        F: FnMut(R, T) -> R,
    {
        let mut acc = identity;
        while let Some(head) = self.eval_head() {
            acc = combine(acc, head);
        }
        acc
    }

    /// Whether any element matches. Short-circuits on the first match,
    /// so this terminates on an infinite stream as long as a matching
    /// element exists.
    pub fn any<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(head) = self.eval_head() {
            if predicate(&head) {
                return true;
            }
        }
        false
    }

    /// Whether every element matches. Short-circuits on the first
    /// counterexample; on an infinite stream with a universally true
    /// predicate this never returns.
    pub fn all<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(head) = self.eval_head() {
            if !predicate(&head) {
                return false;
            }
        }
        true
    }

    /// Whether no element matches. Short-circuits on the first match.
    pub fn none<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Some(head) = self.eval_head() {
            if predicate(&head) {
                return false;
            }
        }
        true
    }

    /// Count every remaining accepted element. Diverges on an infinite
    /// stream.
    pub fn count(&mut self) -> usize {
        let mut n = 0;
        while self.eval_head().is_some() {
            n += 1;
        }
        n
    }

    /// Count the remaining accepted elements matching `predicate`.
    /// Diverges on an infinite stream.
    pub fn count_if<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut n = 0;
        while let Some(head) = self.eval_head() {
            if predicate(&head) {
                n += 1;
            }
        }
        n
    }

    /// Pull the next accepted element, failing fast if the stream is
    /// exhausted. Callers that can tolerate emptiness should use
    /// [`head_or`](Stream::head_or).
    pub fn head(&mut self) -> StreamResult<T> {
        self.eval_head().ok_or(StreamError::Exhausted)
    }

    /// Pull the next accepted element, or `default` if the stream is
    /// exhausted.
    pub fn head_or(&mut self, default: T) -> T {
        self.eval_head().unwrap_or(default)
    }

    /// Whether the source may still produce elements. Note that a finite
    /// source only reports exhaustion after its last element has been
    /// pulled.
    pub fn has_remaining(&self) -> bool {
        self.remaining
    }

    /// Borrowing iterator over the remaining accepted elements. Each
    /// `next` performs one pull, so the adapter inherits the divergence
    /// hazards of the underlying pipeline.
    pub fn iter(&mut self) -> Iter<'_, T> {
        Iter { stream: self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            Source::Infinite { .. } => "infinite",
            Source::Finite { .. } => "finite",
        };
        f.debug_struct("Stream")
            .field("head", &self.head)
            .field("remaining", &self.remaining)
            .field("source", &kind)
            .field("filters", &self.filters.len())
            .field("maps", &self.maps.len())
            .finish()
    }
}

/// Borrowing iterator returned by [`Stream::iter`].
pub struct Iter<'a, T> {
    stream: &'a mut Stream<T>,
}

impl<T: Clone + 'static> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.stream.eval_head()
    }
}
