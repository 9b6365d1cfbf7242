use super::*;

impl SolverState {
    fn reset_time(&mut self) {
        self.time_current = 0;
        self.rematch_event = VertexEvent::NEVER;
    }

    /// Folds the clock into the stored potentials and returns every label, link and heap to
    /// its state before the search
    fn reset_all(&mut self) {
        self.label[0] = Label::Free;
        self.link[0].from = 0;

        for v in 1..=self.n {
            if self.label[v] == Label::Outer {
                self.potential[v] -= self.time_current;
            } else {
                let bv = self.surface[v];
                self.potential[v] += self.lazy[bv];
                if self.label[bv] == Label::Inner {
                    self.potential[v] += self.time_current - self.time_created[bv];
                }
            }
            self.reset_blossom(v);
        }

        let mut in_use = self.b - self.free_bids.len();
        let mut b = self.n + 1;
        while in_use > 0 && b < self.s {
            if self.base[b] != b {
                if self.surface[b] == b {
                    self.fix_mate_and_base(b);
                    match self.label[b] {
                        Label::Outer => {
                            self.potential[b] += (self.time_current - self.time_created[b]) << 1;
                        }
                        Label::Inner => {
                            self.fix_blossom_potential(b, Label::Inner);
                        }
                        _ => {
                            self.fix_blossom_potential(b, Label::Free);
                        }
                    }
                }
                self.group_slack.clear(b);
                self.reset_blossom(b);
                in_use -= 1;
            }
            b += 1;
        }

        self.queue.clear();
        self.reset_time();
        self.grow_events.clear();
        self.contract_events.clear();
        self.expand_events.clear();
        self.lca_mark.fill(0);
    }

    /// Searches an augmenting path from the exposed node `root`.
    ///
    /// Ends either with `root` matched or with the dual of `root` at zero, in which case it may
    /// stay exposed.
    pub(super) fn do_edmonds_search(&mut self, root: usize) -> Result<()> {
        if self.potential[root] == 0 {
            trace!("Root {root} has zero potential, skip");
            return Ok(());
        }

        let sr = self.surface[root];
        self.link_blossom(sr, Link::NONE);
        self.push_outer_and_fix_potentials(sr, 0);

        while !self.augment(root)? && !self.adjust_dual_variables(root)? {}

        trace!(
            "Search from root {root} ended at time {} with mate {}",
            self.time_current, self.mate[root]
        );
        self.reset_all();
        Ok(())
    }

    /// Records that the arc `x -> y` with (doubled) reduced cost `t` leads into the non-outer
    /// surface `by`
    fn update_slack(&mut self, x: usize, y: usize, by: usize, t: Weight, label: Label) {
        if t >= self.slack[y] {
            return;
        }
        self.slack[y] = t;
        self.best_from[y] = x;

        if y == by {
            if label != Label::Inner {
                self.grow_events.decrease_key(
                    y,
                    EdgeEvent {
                        time: t + self.lazy[y],
                        from: x,
                        to: y,
                    },
                );
            }
            return;
        }

        let gy = self.group[y];
        if gy != y {
            if t >= self.slack[gy] {
                return;
            }
            self.slack[gy] = t;
        }
        self.group_slack.decrease_key(
            by,
            gy,
            EdgeEvent {
                time: t,
                from: x,
                to: y,
            },
        );
        if label == Label::Inner {
            return;
        }

        if let Some(best) = self.group_slack.min(by) {
            self.grow_events.decrease_key(
                by,
                EdgeEvent {
                    time: best.time + self.lazy[by],
                    ..best
                },
            );
        }
    }

    /// Publishes the best known grow edge of the surface `b`, which just left an expanded blossom
    pub(super) fn activate_grow_event(&mut self, b: usize) {
        if !self.is_blossom(b) {
            if self.slack[b] < INF {
                self.grow_events.update(
                    b,
                    EdgeEvent {
                        time: self.slack[b] + self.lazy[b],
                        from: self.best_from[b],
                        to: b,
                    },
                );
            }
        } else if let Some(best) = self.group_slack.min(b) {
            self.grow_events.update(
                b,
                EdgeEvent {
                    time: best.time + self.lazy[b],
                    ..best
                },
            );
        }
    }

    /// Attaches the surface of `y` as inner child of outer node `x` and its mate's surface as
    /// outer grandchild. Returns *true* if `y`'s surface was exposed and the matching grew.
    fn grow(&mut self, root: usize, x: usize, y: usize) -> bool {
        let by = self.surface[y];
        let visited = self.label[by] != Label::Free;
        if !visited {
            self.link_blossom(by, Link::NONE);
        }
        self.label[by] = Label::Inner;
        self.time_created[by] = self.time_current;
        self.grow_events.erase(by);
        if y != by {
            self.expand_events
                .update(by, self.time_current + (self.potential[by] >> 1));
        }

        let z = self.mate[by];
        if z == 0 && by != self.surface[root] {
            trace!("Augment along {x} -> {y} at time {}", self.time_current);
            self.rematch(x, y);
            self.rematch(y, x);
            return true;
        }

        let bz = self.surface[z];
        if !visited {
            self.link_blossom(bz, Link::new(x, y));
        } else {
            self.link[bz] = Link::new(x, y);
            self.link[z] = Link::new(x, y);
        }
        let delta = self.fix_blossom_potential(bz, Label::Free);
        self.push_outer_and_fix_potentials(bz, delta);
        self.time_created[bz] = self.time_current;
        self.grow_events.erase(bz);
        false
    }

    /// Scans the arcs of all queued outer nodes at the current time, applying tight events
    /// immediately and scheduling the others. Returns *true* once the search is finished.
    fn augment(&mut self, root: usize) -> Result<bool> {
        while let Some(x) = self.queue.pop_front() {
            if self.potential[x] == self.time_current {
                if x != root {
                    self.rematch(x, 0);
                }
                return Ok(true);
            }

            let mut bx = self.surface[x];
            for arc in self.graph.arc_ids_of(x as Node) {
                let e = self.graph.arc(arc);
                let y = e.to as usize;
                let by = self.surface[y];
                if bx == by {
                    continue;
                }

                let label = self.label[by];
                if label == Label::Outer {
                    let t = self.reduced_cost(x, y, e.cost) >> 1;
                    if t == self.time_current {
                        self.contract(x, y, arc)?;
                        bx = self.surface[x];
                    } else if t < self.rematch_event.time {
                        self.contract_events.push(ContractEvent {
                            time: t,
                            from: x,
                            arc,
                        });
                    }
                    continue;
                }

                let t = self.reduced_cost(x, y, e.cost);
                if t >= INF {
                    continue;
                }
                if label != Label::Inner {
                    if t + self.lazy[by] == self.time_current {
                        if self.grow(root, x, y) {
                            return Ok(true);
                        }
                    } else {
                        self.update_slack(x, y, by, t, Label::Free);
                    }
                } else if self.mate[x] != y {
                    self.update_slack(x, y, by, t, Label::Inner);
                }
            }
        }
        Ok(false)
    }

    /// Advances the clock to the earliest pending event and applies all events due at that
    /// time. Returns *true* once the search is finished.
    fn adjust_dual_variables(&mut self, root: usize) -> Result<bool> {
        let rematch_time = self.rematch_event.time;
        let grow_time = self.grow_events.min().map_or(INF, |e| e.time);

        // skip contraction candidates whose endpoints were merged in the meantime
        let mut contract_time = INF;
        while let Some(&e) = self.contract_events.peek() {
            let y = self.graph.arc(e.arc).to as usize;
            if self.surface[e.from] != self.surface[y] {
                contract_time = e.time;
                break;
            }
            self.contract_events.pop();
        }

        let expand_time = self.expand_events.min().unwrap_or(INF);

        let next = rematch_time
            .min(grow_time)
            .min(contract_time)
            .min(expand_time);
        if next >= INF {
            return Err(InternalError::NoFiniteEvent { root }.into());
        }
        if next < self.time_current {
            return Err(InternalError::ClockWentBackwards {
                current: self.time_current,
                next,
            }
            .into());
        }
        self.time_current = next;
        let now = next;

        if now == self.rematch_event.time {
            let x = self.rematch_event.id;
            if x != root {
                self.rematch(x, 0);
            }
            return Ok(true);
        }

        while let Some(e) = self.grow_events.min().filter(|e| e.time == now) {
            if self.grow(root, e.from, e.to) {
                return Ok(true);
            }
        }

        while let Some(e) = self.contract_events.peek().copied().filter(|e| e.time == now) {
            self.contract_events.pop();
            let y = self.graph.arc(e.arc).to as usize;
            if self.surface[e.from] != self.surface[y] {
                trace!("Contract along {} -> {y} at time {now}", e.from);
                self.contract(e.from, y, e.arc)?;
            }
        }

        while self.expand_events.min() == Some(now) {
            if let Some(b) = self.expand_events.arg_min() {
                self.expand_events.pop();
                trace!("Expand blossom {b} at time {now}");
                self.expand(b);
            }
        }

        Ok(false)
    }
}
