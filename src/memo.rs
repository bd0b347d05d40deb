//! Memoized indexed access over a stream.
//!
//! A [`Memoized`] wrapper pulls elements from an inner [`Stream`] exactly
//! once and caches them, so repeated access by index does not re-evaluate
//! the pipeline. The cache only ever grows forward: its length is the
//! high-water mark of evaluation. The core stream contracts are untouched
//! by this layer.

use crate::stream::Stream;

/// A stream with a growable cache of already-evaluated elements.
pub struct Memoized<T> {
    inner: Stream<T>,
    cache: Vec<T>,
}

impl<T: Clone + 'static> Memoized<T> {
    /// Wrap a stream. No elements are pulled until the first access.
    pub fn new(stream: Stream<T>) -> Memoized<T> {
        Memoized {
            inner: stream,
            cache: Vec::new(),
        }
    }

    /// Element at `index`, pulling and caching forward as needed.
    ///
    /// Indices below the high-water mark are served from the cache
    /// without touching the stream. Returns `None` if the stream
    /// exhausts before reaching `index`; diverges if an infinite inner
    /// pipeline never accepts enough elements.
    pub fn get(&mut self, index: usize) -> Option<T> {
        while self.cache.len() <= index {
            match self.inner.eval_head() {
                Some(value) => self.cache.push(value),
                None => return None,
            }
        }
        Some(self.cache[index].clone())
    }

    /// The already-evaluated prefix, in order.
    pub fn evaluated(&self) -> &[T] {
        &self.cache
    }

    /// Number of elements evaluated so far (the high-water mark).
    pub fn high_water_mark(&self) -> usize {
        self.cache.len()
    }

    /// Give the inner stream back, discarding the cache.
    pub fn into_inner(self) -> Stream<T> {
        self.inner
    }
}
