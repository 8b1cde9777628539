//! Terminal operations that drive a pipeline and produce a result
//!
//! Every method on [`Consume`] runs the whole recipe from the start, so
//! calling two consumers on one sequence drives it twice. Short-circuiting
//! consumers (`first`, `find`, `any`, `all`, `none`, `is_empty`, `contains`)
//! stop the drive as soon as the answer is known, which is what makes them
//! safe on unbounded generators. The rest read the source to its end.

use std::{cmp::Ordering, hash::Hash};

use indexmap::IndexMap;

use crate::{flow::Flow, Seq};

/// Terminal consumers for every [`Seq`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let scores = of([("ann", 3), ("bo", 5), ("ann", 4)]);
/// assert_eq!(scores.count(), 3);
/// assert_eq!(scores.max_by_key(|(_, s)| *s), Some(("bo", 5)));
///
/// let by_name = scores.group_by(|(name, _)| *name);
/// assert_eq!(by_name["ann"], vec![("ann", 3), ("ann", 4)]);
/// ```
pub trait Consume: Seq {
    /// Collect every element into a `Vec`.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.collect()
    }

    /// Collect every element into any default-constructible collection.
    fn collect<C>(&self) -> C
    where
        C: Default + Extend<Self::Item>,
    {
        let mut out = C::default();
        self.extend_into(&mut out);
        out
    }

    /// Append every element to an existing collection.
    fn extend_into<C>(&self, target: &mut C)
    where
        C: Extend<Self::Item>,
    {
        self.drive(&mut |item| {
            target.extend(std::iter::once(item));
            Flow::Continue
        });
    }

    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        self.drive(&mut |item| {
            f(item);
            Flow::Continue
        });
    }

    fn for_each_indexed<F>(&self, mut f: F)
    where
        F: FnMut(usize, Self::Item),
    {
        let mut index = 0;
        self.drive(&mut |item| {
            f(index, item);
            index += 1;
            Flow::Continue
        });
    }

    /// Combine every element into an accumulator of any type.
    fn fold<B, F>(&self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.pull().fold(init, f)
    }

    /// Combine elements pairwise, starting from the first one.
    ///
    /// Returns `None` for an empty sequence.
    fn reduce<F>(&self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.pull().reduce(f)
    }

    /// Fold with a fallible step, stopping at the first `Err`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let total = of(["1", "2", "x", "4"])
    ///     .try_fold(0, |acc, s| s.parse::<i32>().map(|n| acc + n));
    /// assert!(total.is_err());
    /// ```
    fn try_fold<B, E, F>(&self, init: B, f: F) -> Result<B, E>
    where
        F: FnMut(B, Self::Item) -> Result<B, E>,
    {
        self.pull().try_fold(init, f)
    }

    /// Run a fallible side effect per element, stopping at the first `Err`.
    fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        let mut failure = None;
        self.drive(&mut |item| match f(item) {
            Ok(()) => Flow::Continue,
            Err(e) => {
                failure = Some(e);
                Flow::Stop
            }
        });
        failure.map_or(Ok(()), Err)
    }

    fn first(&self) -> Option<Self::Item> {
        let mut found = None;
        self.drive(&mut |item| {
            found = Some(item);
            Flow::Stop
        });
        found
    }

    fn last(&self) -> Option<Self::Item> {
        let mut found = None;
        self.drive(&mut |item| {
            found = Some(item);
            Flow::Continue
        });
        found
    }

    /// The first element matching `pred`.
    fn find<P>(&self, mut pred: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        self.drive(&mut |item| {
            if pred(&item) {
                found = Some(item);
                Flow::Stop
            } else {
                Flow::Continue
            }
        });
        found
    }

    fn any<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut matched = false;
        self.drive(&mut |item| {
            matched = pred(&item);
            Flow::from_continue(!matched)
        });
        matched
    }

    /// `true` for an empty sequence.
    fn all<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(|item| !pred(item))
    }

    fn none<P>(&self, pred: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any(pred)
    }

    fn count(&self) -> usize {
        self.count_matching(|_| true)
    }

    fn count_matching<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut count = 0;
        self.drive(&mut |item| {
            if pred(&item) {
                count += 1;
            }
            Flow::Continue
        });
        count
    }

    /// Stops after looking at one element.
    fn is_empty(&self) -> bool {
        !self.any(|_| true)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.any(|item| item == value)
    }

    /// The smallest element by `cmp`; the first of several equal minima wins.
    fn min_by<F>(&self, mut cmp: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|best, item| match cmp(&item, &best) {
            Ordering::Less => item,
            _ => best,
        })
    }

    /// The largest element by `cmp`; the first of several equal maxima wins.
    fn max_by<F>(&self, mut cmp: F) -> Option<Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|best, item| match cmp(&item, &best) {
            Ordering::Greater => item,
            _ => best,
        })
    }

    fn min_by_key<K, F>(&self, mut key: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extreme_by_key(self, &mut key, Ordering::Less)
    }

    fn max_by_key<K, F>(&self, mut key: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        extreme_by_key(self, &mut key, Ordering::Greater)
    }

    /// Group elements by `key`, keeping keys in first-seen order.
    fn group_by<K, F>(&self, mut key: F) -> IndexMap<K, Vec<Self::Item>>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: IndexMap<K, Vec<Self::Item>> = IndexMap::new();
        self.drive(&mut |item| {
            groups.entry(key(&item)).or_default().push(item);
            Flow::Continue
        });
        groups
    }

    /// Build a map from a key/value pair per element.
    ///
    /// A later element with an existing key overwrites the earlier value but
    /// keeps the key's original position.
    fn associate<K, V, F>(&self, mut f: F) -> IndexMap<K, V>
    where
        K: Hash + Eq,
        F: FnMut(Self::Item) -> (K, V),
    {
        let mut map = IndexMap::new();
        self.drive(&mut |item| {
            let (k, v) = f(item);
            map.insert(k, v);
            Flow::Continue
        });
        map
    }

    /// Collect a sequence of pairs into a map, later duplicates winning.
    fn to_map<K, V>(&self) -> IndexMap<K, V>
    where
        Self: Seq<Item = (K, V)>,
        K: Hash + Eq,
    {
        self.associate(|pair| pair)
    }
}

impl<S> Consume for S where S: Seq + ?Sized {}

/// Keep the element whose key compares `wanted` against every earlier best.
fn extreme_by_key<S, K, F>(source: &S, key: &mut F, wanted: Ordering) -> Option<S::Item>
where
    S: Seq + ?Sized,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    let mut best: Option<(K, S::Item)> = None;
    source.drive(&mut |item| {
        let k = key(&item);
        match &best {
            Some((best_key, _)) if k.cmp(best_key) != wanted => {}
            _ => best = Some((k, item)),
        }
        Flow::Continue
    });
    best.map(|(_, item)| item)
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use std::{cell::Cell, collections::BTreeSet};

    #[test]
    fn test_collect_into_other_collections() {
        let letters = of(['b', 'a', 'b']);
        let set: BTreeSet<char> = letters.collect();
        assert_eq!(set.into_iter().collect::<String>(), "ab");
        let text: String = letters.collect();
        assert_eq!(text, "bab");
    }

    #[test]
    fn test_extend_into_appends() {
        let mut out = vec![0];
        of([1, 2]).extend_into(&mut out);
        assert_eq!(out, vec![0, 1, 2]);
    }

    #[test]
    fn test_for_each_indexed() {
        let mut seen = Vec::new();
        of(["a", "b"]).for_each_indexed(|i, s| seen.push(format!("{i}:{s}")));
        assert_eq!(seen, vec!["0:a", "1:b"]);
    }

    #[test]
    fn test_fold_changes_type() {
        let csv = of([1, 2, 3]).fold(String::new(), |mut acc, n| {
            if !acc.is_empty() {
                acc.push(',');
            }
            acc.push_str(&n.to_string());
            acc
        });
        assert_eq!(csv, "1,2,3");
    }

    #[test]
    fn test_reduce_empty_is_none() {
        assert_eq!(empty::<i32>().reduce(|a, b| a + b), None);
        assert_eq!(of([4, 5]).reduce(|a, b| a * b), Some(20));
    }

    #[test]
    fn test_try_for_each_stops_at_first_error() {
        let visited = Cell::new(0);
        let result = range(0, 10).try_for_each(|n| {
            visited.set(visited.get() + 1);
            if n == 3 {
                Err(format!("bad {n}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("bad 3".to_string()));
        assert_eq!(visited.get(), 4);
    }

    #[test]
    fn test_try_fold_sums_when_all_parse() {
        let total = of(["1", "2", "3"])
            .try_fold(0, |acc, s| s.parse::<i32>().map(|n| acc + n));
        assert_eq!(total, Ok(6));
    }

    #[test]
    fn test_short_circuit_consumers_on_unbounded_source() {
        let nats = naturals();
        assert_eq!(nats.first(), Some(0));
        assert_eq!(nats.find(|n| n * n > 50), Some(8));
        assert!(nats.any(|n| *n == 1000));
        assert!(!nats.all(|n| *n < 10));
        assert!(!nats.none(|n| *n > 3));
        assert!(!nats.is_empty());
        assert!(nats.contains(&42));
    }

    #[test]
    fn test_empty_sequence_answers() {
        let nothing = empty::<i32>();
        assert_eq!(nothing.first(), None);
        assert_eq!(nothing.last(), None);
        assert!(nothing.all(|_| false));
        assert!(!nothing.any(|_| true));
        assert!(nothing.none(|_| true));
        assert!(nothing.is_empty());
        assert_eq!(nothing.count(), 0);
    }

    #[test]
    fn test_counts() {
        let digits = range(0, 10);
        assert_eq!(digits.count(), 10);
        assert_eq!(digits.count_matching(|n| n % 3 == 0), 4);
        assert_eq!(digits.last(), Some(9));
    }

    #[test]
    fn test_min_max_keep_first_of_equals() {
        let items = of([(1, 'a'), (0, 'b'), (2, 'c'), (0, 'd'), (2, 'e')]);
        assert_eq!(items.min_by(|x, y| x.0.cmp(&y.0)), Some((0, 'b')));
        assert_eq!(items.max_by(|x, y| x.0.cmp(&y.0)), Some((2, 'c')));
        assert_eq!(items.min_by_key(|x| x.0), Some((0, 'b')));
        assert_eq!(items.max_by_key(|x| x.0), Some((2, 'c')));
        assert_eq!(empty::<i32>().max_by_key(|n| *n), None);
    }

    #[test]
    fn test_group_by_keeps_first_seen_key_order() {
        let words = of(["bob", "alice", "bea", "al", "carl"]);
        let groups = words.group_by(|w| w.chars().next());
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec![Some('b'), Some('a'), Some('c')]);
        assert_eq!(groups[&Some('a')], vec!["alice", "al"]);
    }

    #[test]
    fn test_associate_later_duplicates_win() {
        let map = of(["x=1", "y=2", "x=3"]).associate(|kv| {
            let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
            (k, v)
        });
        assert_eq!(map.len(), 2);
        assert_eq!(map["x"], "3");
        assert_eq!(map.get_index(0), Some((&"x", &"3")));
    }

    #[test]
    fn test_to_map_from_zipped_pairs() {
        let map = of(["a", "b"]).zip(naturals()).to_map();
        assert_eq!(map["a"], 0);
        assert_eq!(map["b"], 1);
    }
}
