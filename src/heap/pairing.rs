use super::{MergeOrder, Timed};

/// Marks a node that is not part of any heap
const UNUSED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct PairingNode<K> {
    child: usize,
    next: usize,
    /// Parent or left sibling; `0` for a root, `UNUSED` if detached
    prev: usize,
    key: K,
}

impl<K: Default> Default for PairingNode<K> {
    fn default() -> Self {
        Self {
            child: 0,
            next: 0,
            prev: UNUSED,
            key: K::default(),
        }
    }
}

/// A forest of pairing heaps sharing one node arena.
///
/// Heaps are addressed by `0..heaps`, nodes by `1..nodes`. Id `0` is reserved as the null
/// link on both sides and must never be pushed. A node belongs to at most one heap at a time;
/// callers are responsible for passing the right heap id to [`PairingHeaps::erase`] and
/// [`PairingHeaps::decrease_key`].
#[derive(Debug, Clone)]
pub struct PairingHeaps<K> {
    roots: Vec<usize>,
    nodes: Vec<PairingNode<K>>,
    order: MergeOrder,
}

impl<K: Timed + Default> PairingHeaps<K> {
    /// Creates `heaps` empty heaps over the node ids `1..nodes`
    pub fn new(heaps: usize, nodes: usize, order: MergeOrder) -> Self {
        Self {
            roots: vec![0; heaps],
            nodes: vec![PairingNode::default(); nodes],
            order,
        }
    }

    /// Returns the comparison used when linking roots
    pub fn merge_order(&self) -> MergeOrder {
        self.order
    }

    /// Detaches all nodes of heap `h`
    pub fn clear(&mut self, h: usize) {
        if self.roots[h] > 0 {
            self.clear_siblings(self.roots[h]);
            self.roots[h] = 0;
        }
    }

    /// Empties every heap
    pub fn clear_all(&mut self) {
        self.roots.fill(0);
        self.nodes.fill(PairingNode::default());
    }

    pub fn is_empty(&self, h: usize) -> bool {
        self.roots[h] == 0
    }

    /// Returns *true* if node `v` is currently part of some heap
    pub fn is_used(&self, v: usize) -> bool {
        self.nodes[v].prev != UNUSED
    }

    /// Returns the minimum key of heap `h`
    pub fn min(&self, h: usize) -> Option<K> {
        (!self.is_empty(h)).then(|| self.nodes[self.roots[h]].key)
    }

    /// Returns the node holding the minimum key of heap `h`
    pub fn arg_min(&self, h: usize) -> Option<usize> {
        (!self.is_empty(h)).then(|| self.roots[h])
    }

    /// Removes the minimum of heap `h`, if any
    pub fn pop(&mut self, h: usize) {
        if let Some(v) = self.arg_min(h) {
            self.erase(h, v);
        }
    }

    /// Inserts the detached node `v` into heap `h`
    pub fn push(&mut self, h: usize, v: usize, key: K) {
        debug_assert!(v > 0);
        self.nodes[v] = PairingNode {
            child: 0,
            next: 0,
            prev: 0,
            key,
        };
        self.roots[h] = self.merge(self.roots[h], v);
    }

    /// Removes node `v` from heap `h`; no-op if `v` is detached
    pub fn erase(&mut self, h: usize, v: usize) {
        if v == 0 || !self.is_used(v) {
            return;
        }

        let w = self.two_pass_pairing(self.nodes[v].child);
        if self.nodes[v].prev == 0 {
            self.roots[h] = w;
        } else {
            self.cut(v);
            self.roots[h] = self.merge(self.roots[h], w);
        }
        self.nodes[v].prev = UNUSED;
    }

    /// Lowers the key of `v` in heap `h` to `key`, inserting `v` if it is detached.
    ///
    /// `key` must not be larger than the current key of `v`.
    pub fn decrease_key(&mut self, h: usize, v: usize, key: K) {
        if !self.is_used(v) {
            self.push(h, v, key);
            return;
        }

        if self.nodes[v].prev == 0 {
            self.nodes[v].key = key;
        } else {
            self.cut(v);
            self.nodes[v].key = key;
            self.roots[h] = self.merge(self.roots[h], v);
        }
    }

    fn clear_siblings(&mut self, mut v: usize) {
        while v > 0 {
            if self.nodes[v].child > 0 {
                self.clear_siblings(self.nodes[v].child);
            }
            self.nodes[v].prev = UNUSED;
            v = self.nodes[v].next;
        }
    }

    /// Detaches the subtree rooted at `v` from its parent or left sibling
    fn cut(&mut self, v: usize) {
        let (pv, nv) = (self.nodes[v].prev, self.nodes[v].next);
        if self.nodes[pv].child == v {
            self.nodes[pv].child = nv;
        } else {
            self.nodes[pv].next = nv;
        }
        // writes to the null node 0 are harmless
        self.nodes[nv].prev = pv;
        self.nodes[v].next = 0;
        self.nodes[v].prev = 0;
    }

    fn merge(&mut self, mut l: usize, mut r: usize) -> usize {
        if l == 0 {
            return r;
        }
        if r == 0 {
            return l;
        }
        if self.order.prefers(&self.nodes[r].key, &self.nodes[l].key) {
            std::mem::swap(&mut l, &mut r);
        }

        let lc = self.nodes[l].child;
        self.nodes[r].next = lc;
        self.nodes[l].child = r;
        self.nodes[lc].prev = r;
        self.nodes[r].prev = l;
        l
    }

    fn two_pass_pairing(&mut self, first: usize) -> usize {
        if first == 0 {
            return 0;
        }

        // left to right: pair up siblings, collecting the winners in reverse order
        let mut root = 0;
        let mut a = first;
        while a > 0 {
            let b = self.nodes[a].next;
            let mut na = 0;
            self.nodes[a].prev = 0;
            self.nodes[a].next = 0;
            if b > 0 {
                na = self.nodes[b].next;
                self.nodes[b].prev = 0;
                self.nodes[b].next = 0;
            }
            a = self.merge(a, b);
            self.nodes[a].next = root;
            root = a;
            a = na;
        }

        // right to left: fold the winners into one tree
        let mut s = self.nodes[root].next;
        self.nodes[root].next = 0;
        while s > 0 {
            let t = self.nodes[s].next;
            self.nodes[s].next = 0;
            root = self.merge(root, s);
            s = t;
        }
        root
    }
}
