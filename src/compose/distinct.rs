use std::{collections::HashSet, hash::Hash, marker::PhantomData};

use crate::{flow::Flow, seq::Cursor, Seq};

/// Forwards an element only the first time its key appears.
///
/// The set of seen keys lives for one drive (or one cursor) and grows with
/// every new key. Over an unbounded source with ever-new keys it grows
/// without limit.
pub struct Distinct<S, F, K> {
    source: S,
    key: F,
    _phantom: PhantomData<fn() -> K>,
}

/// Create a sequence that drops elements whose key was already seen.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = of(["apple", "avocado", "banana", "blueberry", "cherry"]);
/// let by_initial = words.distinct_by(|w| w.chars().next());
/// assert_eq!(by_initial.to_vec(), vec!["apple", "banana", "cherry"]);
/// ```
pub fn distinct_by<S, F, K>(source: S, key: F) -> Distinct<S, F, K>
where
    S: Seq,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq,
{
    Distinct {
        source,
        key,
        _phantom: PhantomData,
    }
}

impl<S, F, K> Seq for Distinct<S, F, K>
where
    S: Seq,
    F: Fn(&S::Item) -> K,
    K: Hash + Eq,
{
    type Item = S::Item;

    fn drive(&self, sink: &mut dyn FnMut(S::Item) -> Flow) -> Flow {
        let mut seen = HashSet::new();
        self.source.drive(&mut |item| {
            if seen.insert((self.key)(&item)) {
                sink(item)
            } else {
                Flow::Continue
            }
        })
    }

    fn cursor(&self) -> Cursor<'_, S::Item> {
        let mut seen = HashSet::new();
        Box::new(
            self.source
                .cursor()
                .filter(move |item| seen.insert((self.key)(item))),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_distinct_keeps_first_occurrence() {
        let letters = of(["a", "b", "a", "c", "b"]).distinct();
        assert_eq!(letters.to_vec(), vec!["a", "b", "c"]);
        // Seen keys do not leak between drives.
        assert_eq!(letters.to_vec(), vec!["a", "b", "c"]);
        assert_eq!(letters.cursor().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_distinct_by_key_on_unbounded_source() {
        let residues = naturals().distinct_by(|n| n % 4).take(4);
        assert_eq!(residues.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_distinct_then_sort_is_reproducible() {
        let pipeline = of([5, 3, 5, 1, 3]).distinct().sort();
        assert_eq!(pipeline.to_vec(), vec![1, 3, 5]);
        assert_eq!(pipeline.to_vec(), pipeline.to_vec());
    }
}
