use super::Timed;

#[derive(Debug, Clone, Copy, Default)]
struct Entry<K> {
    id: usize,
    key: K,
}

/// Binary min-heap over the ids `0..capacity` with at most one entry per id.
///
/// Positions are 1-based; `index[id] == 0` marks an id without entry. All memory is allocated
/// on construction.
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<K> {
    size: usize,
    entries: Vec<Entry<K>>,
    index: Vec<usize>,
}

impl<K: Timed + Default> IndexedBinaryHeap<K> {
    /// Creates an empty heap for the ids `0..capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            size: 0,
            entries: vec![Entry::default(); capacity + 1],
            index: vec![0; capacity],
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns *true* if the heap holds no entry
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes all entries in time proportional to the number of entries
    pub fn clear(&mut self) {
        while self.size > 0 {
            self.index[self.entries[self.size].id] = 0;
            self.size -= 1;
        }
    }

    /// Returns the minimum key
    pub fn min(&self) -> Option<K> {
        (self.size > 0).then(|| self.entries[1].key)
    }

    /// Returns the id holding the minimum key
    pub fn arg_min(&self) -> Option<usize> {
        (self.size > 0).then(|| self.entries[1].id)
    }

    /// Returns the key currently stored for `id`
    pub fn get(&self, id: usize) -> Option<K> {
        self.contains(id).then(|| self.entries[self.index[id]].key)
    }

    /// Returns *true* if `id` has an entry
    pub fn contains(&self, id: usize) -> bool {
        self.index[id] != 0
    }

    /// Removes the minimum entry, if any
    pub fn pop(&mut self) {
        if self.size > 0 {
            self.remove_at(1);
        }
    }

    /// Removes the entry of `id`, if any
    pub fn erase(&mut self, id: usize) {
        if self.index[id] > 0 {
            self.remove_at(self.index[id]);
        }
    }

    /// Inserts an entry for `id`.
    ///
    /// `id` must not have an entry yet; use [`IndexedBinaryHeap::update`] or
    /// [`IndexedBinaryHeap::decrease_key`] otherwise.
    pub fn push(&mut self, id: usize, key: K) {
        debug_assert!(!self.contains(id));
        self.size += 1;
        self.index[id] = self.size;
        self.entries[self.size] = Entry { id, key };
        self.sift_up(self.size);
    }

    /// Sets the key of `id` to `key`, moving it up or down as required. Inserts `id` if missing.
    pub fn update(&mut self, id: usize, key: K) {
        if !self.contains(id) {
            self.push(id, key);
            return;
        }

        let pos = self.index[id];
        let up = key.before(&self.entries[pos].key);
        self.entries[pos].key = key;
        if up {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
    }

    /// Lowers the key of `id` to `key` if that is smaller. Inserts `id` if missing.
    pub fn decrease_key(&mut self, id: usize, key: K) {
        if !self.contains(id) {
            self.push(id, key);
            return;
        }

        let pos = self.index[id];
        if key.before(&self.entries[pos].key) {
            self.entries[pos].key = key;
            self.sift_up(pos);
        }
    }

    fn remove_at(&mut self, pos: usize) {
        self.index[self.entries[pos].id] = 0;
        if pos == self.size {
            self.size -= 1;
            return;
        }

        let up = self.entries[self.size].key.before(&self.entries[pos].key);
        self.entries[pos] = self.entries[self.size];
        self.size -= 1;
        self.index[self.entries[pos].id] = pos;
        if up {
            self.sift_up(pos);
        } else {
            self.sift_down(pos);
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        while 2 * pos <= self.size {
            let mut next = pos;
            if self.entries[2 * pos].key.before(&self.entries[next].key) {
                next = 2 * pos;
            }
            let right = 2 * pos + 1;
            if right <= self.size && self.entries[right].key.before(&self.entries[next].key) {
                next = right;
            }
            if next == pos {
                return;
            }
            self.swap(pos, next);
            pos = next;
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 && self.entries[pos].key.before(&self.entries[pos >> 1].key) {
            self.swap(pos, pos >> 1);
            pos >>= 1;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.index[self.entries[a].id] = a;
        self.index[self.entries[b].id] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weight;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn drain(heap: &mut IndexedBinaryHeap<Weight>) -> Vec<(usize, Weight)> {
        let mut res = Vec::new();
        while let (Some(id), Some(key)) = (heap.arg_min(), heap.min()) {
            res.push((id, key));
            heap.pop();
        }
        res
    }

    #[test]
    fn push_pop_in_order() {
        let mut heap = IndexedBinaryHeap::new(8);
        for (id, key) in [(3, 30), (1, 10), (7, 5), (0, 20), (5, 25)] {
            heap.push(id, key);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.get(0), Some(20));
        assert_eq!(heap.get(2), None);
        assert_eq!(
            drain(&mut heap),
            vec![(7, 5), (1, 10), (0, 20), (5, 25), (3, 30)]
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn decrease_update_erase() {
        let mut heap = IndexedBinaryHeap::new(6);
        for id in 0..6 {
            heap.push(id, 10 * id as Weight + 10);
        }

        heap.decrease_key(4, 1);
        assert_eq!(heap.arg_min(), Some(4));

        // not smaller, ignored
        heap.decrease_key(0, 100);
        assert_eq!(heap.get(0), Some(10));

        heap.update(4, 1000);
        assert_eq!(heap.arg_min(), Some(0));

        heap.erase(0);
        heap.erase(0);
        assert!(!heap.contains(0));
        assert_eq!(heap.arg_min(), Some(1));

        heap.decrease_key(0, 15);
        assert_eq!(
            drain(&mut heap),
            vec![(0, 15), (1, 20), (2, 30), (3, 40), (5, 60), (4, 1000)]
        );
    }

    #[test]
    fn clear_resets_index() {
        let mut heap = IndexedBinaryHeap::new(4);
        heap.push(2, 7);
        heap.push(3, 8);
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(2));
        heap.push(2, 1);
        assert_eq!(heap.min(), Some(1));
    }

    #[test]
    fn random_against_sorted() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for _ in 0..50 {
            let capacity = 64;
            let mut heap = IndexedBinaryHeap::new(capacity);
            let mut keys: Vec<Option<Weight>> = vec![None; capacity];

            for _ in 0..200 {
                let id = rng.random_range(0..capacity);
                match rng.random_range(0..3) {
                    0 => {
                        let key = rng.random_range(0..1000);
                        heap.update(id, key);
                        keys[id] = Some(key);
                    }
                    1 => {
                        let key = rng.random_range(0..1000);
                        heap.decrease_key(id, key);
                        keys[id] = Some(keys[id].map_or(key, |k| k.min(key)));
                    }
                    _ => {
                        heap.erase(id);
                        keys[id] = None;
                    }
                }
                assert_eq!(heap.min(), keys.iter().flatten().min().copied());
            }

            let mut expected: Vec<Weight> = keys.iter().flatten().copied().collect();
            expected.sort_unstable();
            let got: Vec<Weight> = drain(&mut heap).into_iter().map(|(_, k)| k).collect();
            assert_eq!(got, expected);
        }
    }
}
