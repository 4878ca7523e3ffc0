//! Lazy sequence primitives for candidate chains.
//!
//! Every resolver in this crate is a chain of candidate sources tried in
//! priority order. The chain is built from plain [`Iterator`]s so nothing is
//! evaluated until it is pulled: once an early source (a meta tag) answers,
//! later sources (scanning every paragraph) are never touched.
//!
//! `filter`, `map`, `concat` and `take` are lazy; `reduce` and `first` are the
//! only terminal operations. None of them buffers intermediate results.

/// A boxed lazy sequence.
pub type Seq<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// A source whose underlying iterator is only built when first pulled.
///
/// Useful when constructing the iterator is itself the expensive part, for
/// example running a structural match over the whole document.
pub struct Deferred<F, I> {
    init: Option<F>,
    iter: Option<I>,
}

/// Defer building `init()` until the first element is requested.
pub fn defer<F, I>(init: F) -> Deferred<F, I::IntoIter>
where
    F: FnOnce() -> I,
    I: IntoIterator,
{
    Deferred {
        init: Some(init),
        iter: None,
    }
}

impl<F, J, I> Iterator for Deferred<F, I>
where
    F: FnOnce() -> J,
    J: IntoIterator<IntoIter = I>,
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.iter.is_none() {
            let init = self.init.take()?;
            self.iter = Some(init().into_iter());
        }
        self.iter.as_mut()?.next()
    }
}

/// Yield every element of each source in turn.
///
/// A source is not pulled until all earlier sources are exhausted.
pub fn concat<'a, T: 'a>(sources: Vec<Seq<'a, T>>) -> Seq<'a, T> {
    Box::new(sources.into_iter().flatten())
}

/// Keep elements matching `predicate`.
pub fn filter<I, P>(seq: I, predicate: P) -> std::iter::Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    seq.into_iter().filter(predicate)
}

/// Transform each element with `f`.
pub fn map<I, B, F>(seq: I, f: F) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    seq.into_iter().map(f)
}

/// Stop after `n` elements.
pub fn take<I: IntoIterator>(n: usize, seq: I) -> std::iter::Take<I::IntoIter> {
    seq.into_iter().take(n)
}

/// Fold the whole sequence into one value.
pub fn reduce<I, A, F>(seq: I, init: A, f: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    seq.into_iter().fold(init, f)
}

/// First element of `seq`, or `fallback` when it is empty.
///
/// Pulls at most one element.
pub fn first<I: IntoIterator>(seq: I, fallback: I::Item) -> I::Item {
    seq.into_iter().next().unwrap_or(fallback)
}

/// Trim a candidate string, dropping it when nothing is left.
#[must_use]
pub fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}
