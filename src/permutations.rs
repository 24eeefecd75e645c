use std::iter::FusedIterator;

/// Lazily yields every ordering of an array, one swap apart.
///
/// This is the countdown variant of Heap's algorithm: `p[i]` counts how many
/// swaps position `i` still has left before the prefix below it is exhausted.
#[derive(Clone, Debug)]
pub struct Permutations<T, const N: usize> {
    items: [T; N],
    // one longer than `items` so the reset loop always stops at index N
    p: Vec<usize>,
    idx: usize,
    started: bool,
    remaining: Option<usize>,
}

pub fn permutations<T: Copy, const N: usize>(items: [T; N]) -> Permutations<T, N> {
    Permutations {
        items,
        p: (0..=N).collect(),
        idx: 1,
        started: false,
        remaining: (1..=N).try_fold(1usize, |acc, k| acc.checked_mul(k)),
    }
}

impl<T: Copy, const N: usize> Iterator for Permutations<T, N> {
    type Item = [T; N];

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
        } else if self.idx < N {
            let idx = self.idx;
            self.p[idx] -= 1;
            let j = if idx % 2 == 1 { self.p[idx] } else { 0 };
            self.items.swap(idx, j);

            self.idx = 1;
            while self.p[self.idx] == 0 {
                self.p[self.idx] = self.idx;
                self.idx += 1;
            }
        } else {
            return None;
        }

        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(self.items)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Only exact while `N!` fits in a `usize`.
impl<T: Copy, const N: usize> ExactSizeIterator for Permutations<T, N> {}

impl<T: Copy, const N: usize> FusedIterator for Permutations<T, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use proptest::prelude::*;

    #[test]
    fn small_order() {
        let perms = permutations([2, 3, 5]).collect::<Vec<_>>();
        assert_eq!(
            perms,
            vec![
                [2, 3, 5],
                [3, 2, 5],
                [5, 2, 3],
                [2, 5, 3],
                [3, 5, 2],
                [5, 3, 2],
            ]
        );
    }

    #[test]
    fn degenerate_lengths() {
        assert_eq!(permutations::<i32, 0>([]).collect::<Vec<_>>(), vec![[]]);
        assert_eq!(permutations([7]).collect::<Vec<_>>(), vec![[7]]);
    }

    #[test]
    fn five_coins() {
        let mut perms = permutations([2, 3, 5, 7, 9]);
        assert_eq!(perms.len(), 120);

        let seen = perms.by_ref().collect::<HashSet<_>>();
        assert_eq!(seen.len(), 120);

        // stays exhausted
        assert_eq!(perms.len(), 0);
        assert_eq!(perms.next(), None);
        assert_eq!(perms.next(), None);
    }

    #[test]
    fn adjacent_items_differ_by_one_swap() {
        let perms = permutations([1, 2, 3, 4, 5, 6]).collect::<Vec<_>>();
        for pair in perms.windows(2) {
            let diff = pair[0]
                .iter()
                .zip(pair[1].iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(diff, 2, "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    proptest! {
        #[test]
        fn every_ordering_once(items in prop::collection::hash_set(any::<i16>(), 6)) {
            let mut items = items.into_iter().collect::<Vec<_>>();
            let arr = [items[0], items[1], items[2], items[3], items[4], items[5]];

            let perms = permutations(arr).collect::<Vec<_>>();
            prop_assert_eq!(perms.len(), 720);
            prop_assert_eq!(perms.iter().collect::<HashSet<_>>().len(), 720);

            items.sort_unstable();
            for perm in perms {
                let mut sorted = perm.to_vec();
                sorted.sort_unstable();
                prop_assert_eq!(&sorted, &items);
            }
        }

        #[test]
        fn size_hint_counts_down(take in 0usize..=24) {
            let mut perms = permutations(['a', 'b', 'c', 'd']);
            for _ in 0..take {
                perms.next();
            }
            prop_assert_eq!(perms.size_hint(), (24 - take, Some(24 - take)));
        }
    }
}
