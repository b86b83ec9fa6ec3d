use alloc::vec::Vec;

use crate::maybe::Maybe;

/// Combines two `Maybe`s with `f`; present only if both are.
pub fn map2<A, B, C, F>(ma: &Maybe<A>, mb: &Maybe<B>, f: F) -> Maybe<C>
where
    F: FnOnce(&A, &B) -> C,
{
    ma.flat_map_ref(|a| mb.map(|b| f(a, b)))
}

/// Turns a sequence of `Maybe<A>` into a `Maybe<Vec<A>>`.
///
/// Present, with payloads in input order, iff every element is present.
/// Consumption stops at the first absent element. An empty input yields a
/// present empty vector.
pub fn sequence<A, I>(items: I) -> Maybe<Vec<A>>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    let iter = items.into_iter();
    let mut out = Vec::with_capacity(iter.size_hint().0);
    for (index, item) in iter.enumerate() {
        match item.into_option() {
            Some(val) => out.push(val),
            None => {
                tracing::trace!(index, "sequence hit an absent element");
                return Maybe::nothing();
            }
        }
    }
    Maybe::new(out)
}
