//! Named operation surface for embedding adapters.
//!
//! A host-language scripting adapter exposes streams to its interpreter
//! by registering named callables; this module is the set of free
//! functions such an adapter binds, one per operation name. The adapter
//! owns dynamic-value boxing and closure invocation; these functions only
//! assume each supplied predicate/mapper/combiner is a total function
//! that terminates per call.
//!
//! Configuration operations (`filter`, `map`, `peek`, `skip`) mutate the
//! stream behind the handle and return the same handle, so an adapter
//! holding a stream by reference observes in-place pipeline updates.

use crate::stream::Stream;

/// Construct a finite stream from an ordered collection.
pub fn of<T, I>(items: I) -> Stream<T>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    Stream::of(items)
}

/// Construct an infinite stream repeating `value`.
pub fn repeat<T: Clone + 'static>(value: T) -> Stream<T> {
    Stream::repeat(value)
}

/// Construct an infinite stream by repeated application of `succ`.
pub fn iterate<T, F>(seed: T, succ: F) -> Stream<T>
where
    T: Clone + 'static,
    F: FnMut(T) -> T + 'static,
{
    Stream::iterate(seed, succ)
}

/// Invoke `consumer` on every remaining element. Diverges on an
/// infinite stream.
pub fn for_each<T, F>(stream: &mut Stream<T>, consumer: F)
where
    T: Clone + 'static,
    F: FnMut(T),
{
    stream.for_each(consumer);
}

/// Observe each produced element without changing it.
pub fn peek<T, F>(stream: &mut Stream<T>, observer: F) -> &mut Stream<T>
where
    T: Clone + 'static,
    F: FnMut(&T) + 'static,
{
    stream.peek(observer)
}

/// Register a filter predicate on the stream's pipeline.
pub fn filter<T, P>(stream: &mut Stream<T>, predicate: P) -> &mut Stream<T>
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
{
    stream.filter(predicate)
}

/// Register a mapper on the stream's pipeline.
pub fn map<T, M>(stream: &mut Stream<T>, mapper: M) -> &mut Stream<T>
where
    T: Clone + 'static,
    M: FnMut(T) -> T + 'static,
{
    stream.map(mapper)
}

/// Discard up to `n` elements in place.
pub fn skip<T: Clone + 'static>(stream: &mut Stream<T>, n: usize) -> &mut Stream<T> {
    stream.drop(n)
}

/// Count every remaining element. Diverges on an infinite stream.
pub fn count<T: Clone + 'static>(stream: &mut Stream<T>) -> usize {
    stream.count()
}

/// Count the remaining elements matching `predicate`. Diverges on an
/// infinite stream.
pub fn count_if<T, P>(stream: &mut Stream<T>, predicate: P) -> usize
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool,
{
    stream.count_if(predicate)
}

/// Whether any element matches. Short-circuits on the first match.
pub fn any_match<T, P>(stream: &mut Stream<T>, predicate: P) -> bool
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool,
{
    stream.any(predicate)
}

/// Whether every element matches. Short-circuits on the first
/// counterexample.
pub fn all_match<T, P>(stream: &mut Stream<T>, predicate: P) -> bool
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool,
{
    stream.all(predicate)
}

/// Whether no element matches. Short-circuits on the first match.
pub fn none_match<T, P>(stream: &mut Stream<T>, predicate: P) -> bool
where
    T: Clone + 'static,
    P: FnMut(&T) -> bool,
{
    stream.none(predicate)
}

/// The next element, or `None` if the stream is exhausted.
pub fn find_first<T: Clone + 'static>(stream: &mut Stream<T>) -> Option<T> {
    stream.head().ok()
}

/// Alias of [`find_first`]: evaluation is sequential, so "any" element
/// is always the first one.
pub fn find_any<T: Clone + 'static>(stream: &mut Stream<T>) -> Option<T> {
    find_first(stream)
}

/// Left-fold every remaining element into `identity`. Diverges on an
/// infinite stream.
pub fn reduce<T, R, F>(stream: &mut Stream<T>, identity: R, combine: F) -> R
where
    T: Clone + 'static,
    F: FnMut(R, T) -> R,
{
    stream.reduce(identity, combine)
}

/// Materialize every remaining element. Diverges on an infinite stream.
pub fn to_list<T: Clone + 'static>(stream: &mut Stream<T>) -> Vec<T> {
    stream.collect()
}
