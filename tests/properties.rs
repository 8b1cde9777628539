//! Property-based tests for the laws every pipeline obeys

use std::cell::Cell;

use lazyseq::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_replay_is_deterministic(values in prop::collection::vec(any::<i32>(), 0..64), n in 0usize..80) {
        let pipeline = from_vec(values)
            .filter(|v| v % 3 != 0)
            .map(|v| v / 2)
            .sort()
            .take(n);
        prop_assert_eq!(pipeline.to_vec(), pipeline.to_vec());
    }

    #[test]
    fn test_take_never_overproduces(n in 0usize..200) {
        let produced = Cell::new(0usize);
        let limited = naturals().peek(|_| produced.set(produced.get() + 1)).take(n);
        prop_assert_eq!(limited.count(), n);
        prop_assert!(produced.get() <= n);
    }

    #[test]
    fn test_filter_count_matches_iterator(values in prop::collection::vec(any::<i64>(), 0..128)) {
        let expected = values.iter().filter(|v| **v > 0).count();
        let seq = from_slice(&values);
        prop_assert_eq!(seq.count_matching(|v| *v > 0), expected);
        prop_assert_eq!(seq.filter(|v| *v > 0).count(), expected);
    }

    #[test]
    fn test_sort_is_idempotent(values in prop::collection::vec(any::<u16>(), 0..128)) {
        let once = from_vec(values).sort().to_vec();
        let twice = from_vec(once.clone()).sort().to_vec();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_chunks_reassemble(values in prop::collection::vec(any::<u8>(), 0..100), size in 1usize..16) {
        let seq = from_slice(&values);
        let chunks = seq.chunk(size);
        for (i, chunk) in chunks.iter().enumerate() {
            if i + 1 < chunks.len() {
                prop_assert_eq!(chunk.len(), size);
            } else {
                prop_assert!(chunk.len() <= size && !chunk.is_empty());
            }
        }
        let rebuilt: Vec<u8> = chunks.into_iter().flat_map(|c| c.into_vec()).collect();
        prop_assert_eq!(rebuilt, values);
    }

    #[test]
    fn test_zip_length_is_shorter_side(left in 0usize..40, right in 0usize..40) {
        let pairs = range(0, left).zip(range(0, right));
        prop_assert_eq!(pairs.count(), left.min(right));
        prop_assert_eq!(pairs.cursor().count(), left.min(right));
    }

    #[test]
    fn test_cursor_agrees_with_drive(values in prop::collection::vec(any::<i16>(), 0..64), skip in 0usize..10) {
        let pipeline = from_vec(values)
            .skip(skip)
            .drop_while(|v| *v < 0)
            .enumerate()
            .reverse();
        let pulled: Vec<_> = pipeline.pull().collect();
        prop_assert_eq!(pulled, pipeline.to_vec());
    }

    #[test]
    fn test_cursor_agrees_with_drive_across_operators(
        values in prop::collection::vec(-50i32..50, 0..48),
        n in 0usize..20
    ) {
        let source = from_vec(values);

        let limited = (&source).take(n).take_while(|v| *v != 0);
        prop_assert_eq!(limited.pull().collect::<Vec<_>>(), limited.to_vec());

        let spread = (&source).flat_map(|v| 0..(v.rem_euclid(4)));
        prop_assert_eq!(spread.pull().collect::<Vec<_>>(), spread.to_vec());

        let unique = (&source).distinct_by(|v| v.rem_euclid(7));
        prop_assert_eq!(unique.pull().collect::<Vec<_>>(), unique.to_vec());

        let ordered = (&source).sort_by_key(|v| v.abs()).take_last(n);
        prop_assert_eq!(ordered.pull().collect::<Vec<_>>(), ordered.to_vec());

        let joined = (&source).chain(naturals().map(|k| k as i32).take(n));
        prop_assert_eq!(joined.pull().collect::<Vec<_>>(), joined.to_vec());

        let paired = (&source).zip(iterate(1i64, |k| k * 3).take(n));
        prop_assert_eq!(paired.pull().collect::<Vec<_>>(), paired.to_vec());
        prop_assert_eq!(paired.fold(0usize, |acc, _| acc + 1), paired.count());
    }

    #[test]
    fn test_pull_does_no_more_generator_work_than_drive(n in 0usize..30) {
        let steps = Cell::new(0usize);
        let counted = iterate(0u64, |k| {
            steps.set(steps.get() + 1);
            k + 1
        })
        .take(n);

        let driven = counted.to_vec();
        let driven_steps = steps.replace(0);
        let pulled: Vec<u64> = counted.pull().collect();
        let pulled_steps = steps.replace(0);
        let folded = counted.fold(0u64, |acc, k| acc + k);
        let folded_steps = steps.get();

        prop_assert_eq!(&pulled, &driven);
        prop_assert_eq!(folded, driven.iter().sum::<u64>());
        prop_assert_eq!(driven_steps, n.saturating_sub(1));
        prop_assert_eq!(pulled_steps, driven_steps);
        prop_assert_eq!(folded_steps, driven_steps);
    }
}
