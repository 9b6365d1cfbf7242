/*!
Structural operations on the laminar blossom forest.

Children of a blossom form a circular list stored in [`BoundaryNode`]s: walking `link[d]` from a
child yields the next child and the node inside it that the connecting edge ends at. Every walk
below is index arithmetic on these slots; ids `1..=n` are leaves.
*/

use super::*;

impl SolverState {
    /// Matches `v` to `w` and flips the alternating path that previously ended at `v`'s old mate
    pub(super) fn rematch(&mut self, mut v: usize, mut w: usize) {
        loop {
            let t = self.mate[v];
            self.mate[v] = w;
            if self.mate[t] != v {
                return;
            }

            let Link { from, to } = self.link[v];
            if to == self.surface[to] {
                self.mate[t] = from;
                (v, w) = (from, t);
            } else {
                self.rematch(from, to);
                (v, w) = (to, from);
            }
        }
    }

    /// Rotates the child cycle of `b` (recursively) so that its base matches the rematched mates
    pub(super) fn fix_mate_and_base(&mut self, b: usize) {
        if !self.is_blossom(b) {
            return;
        }

        let mut bv = self.base[b];
        let first = self.node[bv].link[0];
        let d = if self.node[first.b].link[1].v == self.mate[first.v] {
            0
        } else {
            1
        };

        loop {
            let NodeLink { b: bmv, v: mv } = self.node[bv].link[d];
            if self.node[bmv].link[1 - d].v != self.mate[mv] {
                break;
            }
            self.fix_mate_and_base(bv);
            self.fix_mate_and_base(bmv);
            bv = self.node[bmv].link[d].b;
        }

        self.base[b] = bv;
        self.fix_mate_and_base(bv);
        self.mate[b] = self.mate[bv];
    }

    pub(super) fn reset_blossom(&mut self, b: usize) {
        self.label[b] = Label::Free;
        self.link[b].from = 0;
        self.slack[b] = INF;
        self.lazy[b] = 0;
    }

    /// Clears the pending potential delta of `b` and returns it, including the time `b` spent
    /// as inner blossom if `label` is [`Label::Inner`]
    pub(super) fn fix_blossom_potential(&mut self, b: usize, label: Label) -> Weight {
        let mut d = std::mem::take(&mut self.lazy[b]);
        if label == Label::Inner {
            let dt = self.time_current - self.time_created[b];
            if self.is_blossom(b) {
                self.potential[b] -= dt << 1;
            }
            d += dt;
        }
        d
    }

    /// Exchanges the complete state of the ids `a` and `b`, keeping the neighbors of `a` in its
    /// parent cycle pointing to the right slot
    pub(super) fn swap_blossom(&mut self, a: usize, b: usize) {
        self.base.swap(a, b);
        if self.base[a] == a {
            self.base[a] = b;
        }
        self.heavy.swap(a, b);
        if self.heavy[a] == a {
            self.heavy[a] = b;
        }
        self.link.swap(a, b);
        self.mate.swap(a, b);
        self.potential.swap(a, b);
        self.lazy.swap(a, b);
        self.time_created.swap(a, b);

        for d in 0..2 {
            let nb = self.node[a].link[d].b;
            self.node[nb].link[1 - d].b = b;
        }
        self.node.swap(a, b);
    }

    pub(super) fn set_surface_and_group(&mut self, b: usize, sf: usize, g: usize) {
        self.surface[b] = sf;
        self.group[b] = g;
        if !self.is_blossom(b) {
            return;
        }

        let mut bb = self.base[b];
        while self.surface[bb] != sf {
            self.set_surface_and_group(bb, sf, g);
            bb = self.node[bb].next_b();
        }
    }

    /// Relabels all children of the fresh blossom `bid` except the largest one, which then takes
    /// over the id `bid`
    fn merge_smaller_blossoms(&mut self, bid: usize) {
        let beta = self.base[bid];

        let mut largest = bid;
        let mut largest_size = 1;
        let mut b = beta;
        loop {
            if self.node[b].size > largest_size {
                largest_size = self.node[b].size;
                largest = b;
            }
            b = self.node[b].next_b();
            if b == beta {
                break;
            }
        }

        let mut b = beta;
        loop {
            if b != largest {
                self.set_surface_and_group(b, largest, b);
            }
            b = self.node[b].next_b();
            if b == beta {
                break;
            }
        }

        self.group[largest] = largest;
        if largest_size > 1 {
            self.surface[bid] = largest;
            self.heavy[bid] = largest;
            self.swap_blossom(largest, bid);
        } else {
            self.heavy[bid] = 0;
        }
    }

    /// Contracts the odd cycle closed by the tight arc `arc = x -> y` between two outer blossoms
    pub(super) fn contract(&mut self, x: usize, y: usize, arc: usize) -> Result<()> {
        let (mut bx, mut by) = (self.surface[x], self.surface[y]);
        if bx == by {
            return Err(InternalError::SameBlossom {
                x,
                y,
                blossom: bx,
            }
            .into());
        }

        // climb both tree paths alternately until one reaches an id the other already visited
        let stamp = arc + 1;
        for side in [bx, by] {
            let above = self.surface[self.mate[side]];
            self.lca_mark[above] = stamp;
        }
        let lca = loop {
            if self.mate[by] != 0 {
                std::mem::swap(&mut bx, &mut by);
            }
            bx = self.surface[self.link[bx].from];
            let above = self.surface[self.mate[bx]];
            if self.lca_mark[above] == stamp {
                break bx;
            }
            self.lca_mark[above] = stamp;
        };

        let bid = self
            .free_bids
            .pop()
            .ok_or(InternalError::BlossomIdsExhausted)?;

        let mut tree_size = 0;
        let (mut x, mut y) = (x, y);
        for d in 0..2 {
            let mut bv = self.surface[x];
            while bv != lca {
                let mv = self.mate[bv];
                let bmv = self.surface[mv];
                let v = self.mate[mv];
                let Link { from: f, to: t } = self.link[v];
                tree_size += self.node[bv].size + self.node[bmv].size;
                self.link[mv] = Link::new(x, y);

                if self.is_blossom(bv) {
                    self.potential[bv] += (self.time_current - self.time_created[bv]) << 1;
                }
                if self.is_blossom(bmv) {
                    self.expand_events.erase(bmv);
                }
                let delta = self.fix_blossom_potential(bmv, Label::Inner);
                self.push_outer_and_fix_potentials(bmv, delta);

                self.node[bv].link[d] = NodeLink { b: bmv, v: mv };
                self.node[bmv].link[1 - d] = NodeLink { b: bv, v };
                bv = self.surface[f];
                self.node[bmv].link[d] = NodeLink { b: bv, v: f };
                self.node[bv].link[1 - d] = NodeLink { b: bmv, v: t };
            }

            let (sx, sy) = (self.surface[x], self.surface[y]);
            self.node[sx].link[1 - d] = NodeLink { b: sy, v: y };
            std::mem::swap(&mut x, &mut y);
        }

        if self.is_blossom(lca) {
            self.potential[lca] += (self.time_current - self.time_created[lca]) << 1;
        }
        self.node[bid].size = tree_size + self.node[lca].size;
        self.base[bid] = lca;
        self.link[bid] = self.link[lca];
        self.mate[bid] = self.mate[lca];
        self.label[bid] = Label::Outer;
        self.surface[bid] = bid;
        self.time_created[bid] = self.time_current;
        self.potential[bid] = 0;
        self.lazy[bid] = 0;

        self.merge_smaller_blossoms(bid);
        Ok(())
    }

    /// Assigns the tree link `l` to `v` and the matching internal links to everything inside it
    pub(super) fn link_blossom(&mut self, v: usize, l: Link) {
        self.link[v] = l;
        if !self.is_blossom(v) {
            return;
        }

        let b = self.base[v];
        self.link_blossom(b, l);

        let pb = self.node[b].prev_b();
        let l = Link::new(self.node[pb].next_v(), self.node[b].prev_v());
        let mut bv = b;
        loop {
            let bw = self.node[bv].next_b();
            if bw == b {
                break;
            }
            self.link_blossom(bw, l);
            let nl = Link::new(self.node[bw].prev_v(), self.node[bv].next_v());
            bv = self.node[bw].next_b();
            self.link_blossom(bv, nl);
        }
    }

    /// Labels `v` and all its not yet outer children outer, moves their potentials onto the
    /// current clock baseline (plus `d`) and queues every contained node
    pub(super) fn push_outer_and_fix_potentials(&mut self, v: usize, d: Weight) {
        self.label[v] = Label::Outer;
        if self.is_blossom(v) {
            let mut b = self.base[v];
            while self.label[b] != Label::Outer {
                self.push_outer_and_fix_potentials(b, d);
                b = self.node[b].next_b();
            }
        } else {
            self.potential[v] += self.time_current + d;
            if self.potential[v] < self.rematch_event.time {
                self.rematch_event = VertexEvent {
                    time: self.potential[v],
                    id: v,
                };
            }
            self.queue.push_back(v);
        }
    }

    fn free_blossom(&mut self, bid: usize) {
        self.free_bids.push(bid);
        self.base[bid] = bid;
    }

    /// Recomputes the minimum slack of group `g` from all nodes below `b`; returns the node
    /// attaining it, or `0` if nothing below `b` improved it
    fn recalculate_minimum_slack(&mut self, b: usize, g: usize) -> usize {
        if !self.is_blossom(b) {
            if self.slack[b] >= self.slack[g] {
                return 0;
            }
            self.slack[g] = self.slack[b];
            self.best_from[g] = self.best_from[b];
            return b;
        }

        let mut v = 0;
        let beta = self.base[b];
        let mut bb = beta;
        loop {
            let w = self.recalculate_minimum_slack(bb, g);
            if w != 0 {
                v = w;
            }
            bb = self.node[bb].next_b();
            if bb == beta {
                break;
            }
        }
        v
    }

    /// Makes every light child below `b` its own group of surface `sf` and registers its minimum
    /// slack in the pairing heap of `sf`; the heavy path keeps group `g`
    fn construct_smaller_components(&mut self, b: usize, sf: usize, g: usize) {
        self.surface[b] = sf;
        self.group[b] = g;
        if !self.is_blossom(b) {
            return;
        }

        let mut bb = self.base[b];
        while self.surface[bb] != sf {
            if bb == self.heavy[b] {
                self.construct_smaller_components(bb, sf, g);
            } else {
                self.set_surface_and_group(bb, sf, bb);
                let mut to = 0;
                if self.is_blossom(bb) {
                    self.slack[bb] = INF;
                    to = self.recalculate_minimum_slack(bb, bb);
                } else if self.slack[bb] < INF {
                    to = bb;
                }
                if to > 0 {
                    self.group_slack.push(
                        sf,
                        bb,
                        EdgeEvent {
                            time: self.slack[bb],
                            from: self.best_from[bb],
                            to,
                        },
                    );
                }
            }
            bb = self.node[bb].next_b();
        }
    }

    /// Turns the children of `bid` into surfaces carrying the pending delta of `bid`, then lets
    /// the heavy child take over the id `bid` and releases the other id
    fn move_to_largest_blossom(&mut self, mut bid: usize) {
        let h = self.heavy[bid];
        let d = (self.time_current - self.time_created[bid]) + self.lazy[bid];
        self.lazy[bid] = 0;

        let beta = self.base[bid];
        let mut b = beta;
        loop {
            self.time_created[b] = self.time_current;
            self.lazy[b] = d;
            if b != h {
                self.construct_smaller_components(b, b, b);
                self.group_slack.erase(bid, b);
            }
            b = self.node[b].next_b();
            if b == beta {
                break;
            }
        }

        if h > 0 {
            self.swap_blossom(h, bid);
            bid = h;
        }
        self.free_blossom(bid);
    }

    /// Dissolves the inner blossom `bid` whose dual reached zero.
    ///
    /// The children on the even-length path between the tree edges stay in the tree (alternately
    /// inner and outer), the others become free again. Children whose dual is already zero are
    /// expanded recursively.
    pub(super) fn expand(&mut self, bid: usize) {
        let mv = self.mate[self.base[bid]];
        self.move_to_largest_blossom(bid);

        let old_link = self.link[mv];
        let old_base = self.surface[self.mate[mv]];
        let root = self.surface[old_link.to];
        let d = if self.mate[root] == self.node[root].link[0].v {
            1
        } else {
            0
        };

        let mut b = self.node[old_base].link[1 - d].b;
        while b != root {
            for _ in 0..2 {
                self.label[b] = Label::Separated;
                self.activate_grow_event(b);
                b = self.node[b].link[1 - d].b;
            }
        }

        let mut b = old_base;
        loop {
            self.label[b] = Label::Inner;
            let nb = self.node[b].link[d].b;
            let mb = self.mate[b];
            self.link[mb] = if b == root {
                old_link
            } else {
                Link::new(self.node[b].link[d].v, self.node[nb].link[1 - d].v)
            };
            self.link[self.surface[mb]] = self.link[mb];

            if self.is_blossom(b) {
                if self.potential[b] == 0 {
                    self.expand(b);
                } else {
                    self.expand_events
                        .update(b, self.time_current + (self.potential[b] >> 1));
                }
            }
            if b == root {
                break;
            }

            let delta = self.fix_blossom_potential(nb, Label::Inner);
            self.push_outer_and_fix_potentials(nb, delta);
            b = self.node[nb].link[d].b;
        }
    }
}
