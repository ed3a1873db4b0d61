/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! A primal network simplex implementation.
//!
//! The basis is a spanning tree over all nodes plus an extra root
//! node. Every node is attached to the root by an artificial arc:
//! nodes with non-negative supply through an arc towards the root
//! with cost 0, demand nodes through an arc from the root with a
//! large artificial cost. If an artificial arc still carries flow
//! when no arc prices out, the problem is infeasible.
//!
//! The tree is stored as
//!
//! - `parent`, `pred` and `pred_dir`: the parent node, the arc to the
//!   parent and whether that arc points up (towards the root) or down,
//! - `thread` and `rev_thread`: a doubly linked preorder list that
//!   starts and ends at the root,
//! - `succ_num` and `last_succ`: the size of each subtree and its last
//!   node in preorder.
//!
//! On ties the leaving arc is the last blocking arc met when walking
//! the cycle in flow direction starting at the join node. This keeps
//! the tree strongly feasible, so degenerate pivots cannot cycle.
//!
//! # Example
//!
//! ```
//! use transport_flow::mcf::{MinCostFlow, NetworkSimplex, SolutionState};
//!
//! let mut spx = NetworkSimplex::new();
//! let arcs = spx.add_arcs(&[0, 0, 1], &[1, 2, 2], &[4, 2, 5], &[1.0, 4.0, 1.0]);
//! spx.set_supplies(&[3, 0, -3]);
//!
//! assert_eq!(spx.solve(), SolutionState::Optimal);
//! assert_eq!(spx.flow(arcs[0]), 3);
//! assert_eq!(spx.flow(arcs[1]), 0);
//! assert_eq!(spx.optimal_cost(), 6.0);
//! ```

use super::{ArcId, MinCostFlow, SolutionState};
use num_traits::Signed;
use serde_derive::{Deserialize, Serialize};

const INVALID: usize = usize::MAX;

/// Capacity of the artificial arcs. Real arcs with this capacity are
/// uncapacitated.
const INF: i64 = i64::MAX;

/// Rule for selecting the entering arc.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pricing {
    /// First eligible arc, continuing where the last search stopped.
    RoundRobin,
    /// Most negative reduced cost over all arcs (Dantzig's rule).
    Complete,
    /// Most negative reduced cost within blocks of about `sqrt(m)` arcs.
    #[default]
    Block,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ArcState {
    /// Non-basic with zero flow.
    Lower,
    /// In the basis tree.
    Tree,
    /// Non-basic with flow equal to the capacity.
    Upper,
}

impl ArcState {
    /// Scale `value` by the direction in which the flow of the arc
    /// may change.
    fn apply<T: Signed>(self, value: T) -> T {
        match self {
            ArcState::Lower => value,
            ArcState::Tree => T::zero(),
            ArcState::Upper => -value,
        }
    }
}

/// Orientation of the arc between a node and its parent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Dir {
    /// The arc points from the node to its parent.
    Up,
    /// The arc points from the parent to the node.
    Down,
}

impl Dir {
    fn apply<T: Signed>(self, value: T) -> T {
        match self {
            Dir::Up => value,
            Dir::Down => -value,
        }
    }

    fn rev(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }
}

/// The cycle closed by an entering arc.
struct Cycle {
    in_arc: usize,
    /// First common node of both tree paths.
    join: usize,
    /// End of the entering arc on the side of the leaving arc.
    u_in: usize,
    /// The other end of the entering arc.
    v_in: usize,
    /// The node whose parent arc leaves the basis, `None` if the
    /// entering arc itself blocks and just switches its bound.
    u_out: Option<usize>,
    /// Amount of flow sent around the cycle.
    delta: i64,
}

/// A primal network simplex algorithm.
pub struct NetworkSimplex {
    num_nodes: usize,
    tails: Vec<usize>,
    heads: Vec<usize>,
    capacities: Vec<i64>,
    unit_costs: Vec<f64>,
    supplies: Vec<i64>,

    // The working network: the real arcs followed by one artificial
    // arc per node.
    source: Vec<usize>,
    target: Vec<usize>,
    cap: Vec<i64>,
    cost: Vec<f64>,
    flow: Vec<i64>,
    state: Vec<ArcState>,

    // The basis tree, the root is node `num_nodes`.
    parent: Vec<usize>,
    pred: Vec<usize>,
    pred_dir: Vec<Dir>,
    thread: Vec<usize>,
    rev_thread: Vec<usize>,
    succ_num: Vec<usize>,
    last_succ: Vec<usize>,
    pi: Vec<f64>,
    dirty_revs: Vec<usize>,

    pub pricing: Pricing,
    next_arc: usize,
    block_size: usize,
    /// Reduced costs above `-zero` are considered non-negative.
    pub zero: f64,

    niter: usize,
    solution_state: SolutionState,

    /// The artificial cost value.
    ///
    /// Must be larger than the cost of any simple path. If `None` (the
    /// default) the artificial cost is set to `n * (1 + max |cost|)`.
    pub artificial_cost: Option<f64>,
}

impl Default for NetworkSimplex {
    fn default() -> Self {
        NetworkSimplex::new()
    }
}

impl NetworkSimplex {
    pub fn new() -> Self {
        NetworkSimplex::with_capacity(0, 0)
    }

    /// Create a solver with space reserved for the given number of
    /// nodes and arcs.
    pub fn with_capacity(num_nodes: usize, num_arcs: usize) -> Self {
        NetworkSimplex {
            num_nodes: 0,
            tails: Vec::with_capacity(num_arcs),
            heads: Vec::with_capacity(num_arcs),
            capacities: Vec::with_capacity(num_arcs),
            unit_costs: Vec::with_capacity(num_arcs),
            supplies: Vec::with_capacity(num_nodes),

            source: vec![],
            target: vec![],
            cap: vec![],
            cost: vec![],
            flow: vec![],
            state: vec![],

            parent: vec![],
            pred: vec![],
            pred_dir: vec![],
            thread: vec![],
            rev_thread: vec![],
            succ_num: vec![],
            last_succ: vec![],
            pi: vec![],
            dirty_revs: vec![],

            pricing: Pricing::Block,
            next_arc: 0,
            block_size: 0,
            zero: 1e-9,

            niter: 0,
            solution_state: SolutionState::NotSolved,

            artificial_cost: None,
        }
    }

    pub fn supply(&self, u: usize) -> i64 {
        self.supplies.get(u).copied().unwrap_or(0)
    }

    /// Return the solution state of the latest computation.
    pub fn solution_state(&self) -> SolutionState {
        self.solution_state
    }

    /// Number of pivots of the latest computation.
    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    fn solve_internal(&mut self) -> SolutionState {
        let m = self.tails.len();
        self.supplies.resize(self.num_nodes, 0);
        self.flow.clear();

        // a demand of i64::MIN cannot be put on an artificial arc
        if self.capacities.iter().any(|&c| c < 0)
            || self.unit_costs.iter().any(|c| !c.is_finite())
            || self.supplies.contains(&i64::MIN)
        {
            return SolutionState::BadInput;
        }

        if self.supplies.iter().map(|&b| i128::from(b)).sum::<i128>() != 0 {
            return SolutionState::Unbalanced;
        }

        // Without arcs (and so without nodes) there is nothing to pivot.
        if m == 0 {
            return if self.supplies.iter().all(|&b| b == 0) {
                SolutionState::Optimal
            } else {
                SolutionState::Infeasible
            };
        }

        self.init();

        while let Some(in_arc) = self.find_entering_arc() {
            self.niter += 1;
            let join = self.find_join_node(in_arc);
            let cycle = self.find_leaving_arc(in_arc, join);
            if cycle.delta >= INF {
                return SolutionState::Unbounded;
            }
            self.change_flow(&cycle);
            if let Some(u_out) = cycle.u_out {
                self.update_tree(&cycle, u_out);
                self.update_potentials(&cycle);
            }
        }

        if self.flow[m..].iter().all(|&f| f == 0) {
            SolutionState::Optimal
        } else {
            SolutionState::Infeasible
        }
    }

    /// Build the working network and the initial basis of artificial
    /// arcs.
    fn init(&mut self) {
        let n = self.num_nodes;
        let m = self.tails.len();
        let root = n;

        let artificial_cost = self.artificial_cost.unwrap_or_else(|| {
            let max_cost = self.unit_costs.iter().fold(0.0, |max: f64, c| max.max(c.abs()));
            n as f64 * (1.0 + max_cost)
        });

        self.source = self.tails.clone();
        self.target = self.heads.clone();
        self.cap = self.capacities.clone();
        self.cost = self.unit_costs.clone();
        self.flow = vec![0; m];
        self.state = vec![ArcState::Lower; m];

        self.parent = vec![root; n + 1];
        self.pred = vec![INVALID; n + 1];
        self.pred_dir = vec![Dir::Up; n + 1];
        self.thread = vec![0; n + 1];
        self.rev_thread = vec![0; n + 1];
        self.succ_num = vec![1; n + 1];
        self.last_succ = (0..=n).collect();
        self.pi = vec![0.0; n + 1];

        self.parent[root] = INVALID;
        self.thread[root] = 0;
        self.rev_thread[0] = root;
        self.succ_num[root] = n + 1;
        self.last_succ[root] = n - 1;

        for u in 0..n {
            self.pred[u] = m + u;
            self.thread[u] = u + 1;
            self.rev_thread[u + 1] = u;
            let b = self.supplies[u];
            if b >= 0 {
                self.pred_dir[u] = Dir::Up;
                self.source.push(u);
                self.target.push(root);
                self.cost.push(0.0);
                self.flow.push(b);
            } else {
                self.pred_dir[u] = Dir::Down;
                self.pi[u] = artificial_cost;
                self.source.push(root);
                self.target.push(u);
                self.cost.push(artificial_cost);
                self.flow.push(-b);
            }
            self.cap.push(INF);
            self.state.push(ArcState::Tree);
        }

        self.next_arc = 0;
        self.block_size = ((m as f64).sqrt() as usize).max(10);
    }

    fn reduced_cost(&self, e: usize) -> f64 {
        self.state[e].apply(self.cost[e] + self.pi[self.source[e]] - self.pi[self.target[e]])
    }

    fn find_entering_arc(&mut self) -> Option<usize> {
        match self.pricing {
            Pricing::RoundRobin => self.first_eligible(),
            Pricing::Complete => self.best_eligible(),
            Pricing::Block => self.block_search(),
        }
    }

    fn first_eligible(&mut self) -> Option<usize> {
        let m = self.tails.len();
        let in_arc = (self.next_arc..m)
            .chain(0..self.next_arc)
            .find(|&e| self.reduced_cost(e) < -self.zero);
        if let Some(e) = in_arc {
            self.next_arc = e + 1;
        }
        in_arc
    }

    fn best_eligible(&self) -> Option<usize> {
        let mut min = -self.zero;
        let mut in_arc = None;
        for e in 0..self.tails.len() {
            let c = self.reduced_cost(e);
            if c < min {
                min = c;
                in_arc = Some(e);
            }
        }
        in_arc
    }

    fn block_search(&mut self) -> Option<usize> {
        let m = self.tails.len();
        let mut min = -self.zero;
        let mut in_arc = None;
        let mut cnt = self.block_size;
        for e in (self.next_arc..m).chain(0..self.next_arc) {
            let c = self.reduced_cost(e);
            if c < min {
                min = c;
                in_arc = Some(e);
            }
            cnt -= 1;
            if cnt == 0 {
                if in_arc.is_some() {
                    self.next_arc = e;
                    return in_arc;
                }
                cnt = self.block_size;
            }
        }
        in_arc
    }

    fn find_join_node(&self, in_arc: usize) -> usize {
        let mut u = self.source[in_arc];
        let mut v = self.target[in_arc];
        // the smaller subtree cannot contain the other node
        while u != v {
            if self.succ_num[u] < self.succ_num[v] {
                u = self.parent[u];
            } else {
                v = self.parent[v];
            }
        }
        u
    }

    /// Remaining capacity of an arc.
    fn residual(&self, e: usize) -> i64 {
        if self.cap[e] >= INF {
            INF
        } else {
            self.cap[e] - self.flow[e]
        }
    }

    fn find_leaving_arc(&self, in_arc: usize, join: usize) -> Cycle {
        // flow goes around the cycle from `first` over the entering
        // arc to `second`, up to `join` and down to `first`
        let (first, second) = if self.state[in_arc] == ArcState::Lower {
            (self.source[in_arc], self.target[in_arc])
        } else {
            (self.target[in_arc], self.source[in_arc])
        };

        let mut delta = self.cap[in_arc];
        let mut leaving = None;

        let mut u = first;
        while u != join {
            let e = self.pred[u];
            let d = match self.pred_dir[u] {
                Dir::Up => self.flow[e],
                Dir::Down => self.residual(e),
            };
            if d < delta {
                delta = d;
                leaving = Some((u, true));
            }
            u = self.parent[u];
        }

        let mut u = second;
        while u != join {
            let e = self.pred[u];
            let d = match self.pred_dir[u] {
                Dir::Up => self.residual(e),
                Dir::Down => self.flow[e],
            };
            if d <= delta {
                delta = d;
                leaving = Some((u, false));
            }
            u = self.parent[u];
        }

        let (u_in, v_in) = match leaving {
            Some((_, true)) => (first, second),
            _ => (second, first),
        };

        Cycle {
            in_arc,
            join,
            u_in,
            v_in,
            u_out: leaving.map(|(u, _)| u),
            delta,
        }
    }

    fn change_flow(&mut self, cycle: &Cycle) {
        let in_arc = cycle.in_arc;
        if cycle.delta > 0 {
            let val = self.state[in_arc].apply(cycle.delta);
            self.flow[in_arc] += val;
            let mut u = self.source[in_arc];
            while u != cycle.join {
                self.flow[self.pred[u]] -= self.pred_dir[u].apply(val);
                u = self.parent[u];
            }
            let mut u = self.target[in_arc];
            while u != cycle.join {
                self.flow[self.pred[u]] += self.pred_dir[u].apply(val);
                u = self.parent[u];
            }
        }

        match cycle.u_out {
            Some(u_out) => {
                self.state[in_arc] = ArcState::Tree;
                let e = self.pred[u_out];
                self.state[e] = if self.flow[e] == 0 {
                    ArcState::Lower
                } else {
                    ArcState::Upper
                };
            }
            None => {
                self.state[in_arc] = match self.state[in_arc] {
                    ArcState::Lower => ArcState::Upper,
                    _ => ArcState::Lower,
                }
            }
        }
    }

    /// Replace the parent arc of `u_out` by the entering arc.
    ///
    /// The path from `u_in` up to `u_out` (the stem) is reversed and
    /// hung below `v_in`; the thread, subtree sizes and last
    /// successors are patched along the stem and on the paths from
    /// `v_in` and the old parent of `u_out` up to the join node.
    fn update_tree(&mut self, cycle: &Cycle, u_out: usize) {
        let Cycle {
            in_arc, join, u_in, v_in, ..
        } = *cycle;
        let old_rev_thread = self.rev_thread[u_out];
        let old_succ_num = self.succ_num[u_out];
        let old_last_succ = self.last_succ[u_out];
        let v_out = self.parent[u_out];

        if u_in == u_out {
            self.parent[u_in] = v_in;
            self.pred[u_in] = in_arc;
            self.pred_dir[u_in] = if u_in == self.source[in_arc] { Dir::Up } else { Dir::Down };

            // move the subtree of u_in right behind v_in
            if self.thread[v_in] != u_out {
                let after = self.thread[old_last_succ];
                self.link(old_rev_thread, after);
                let after = self.thread[v_in];
                self.link(v_in, u_out);
                self.link(old_last_succ, after);
            }
        } else {
            // if v_in precedes u_out, join and v_out coincide
            let thread_continue = if old_rev_thread == v_in {
                self.thread[old_last_succ]
            } else {
                self.thread[v_in]
            };

            let mut stem = u_in;
            let mut par_stem = v_in;
            let mut last = self.last_succ[u_in];
            let mut after = self.thread[last];
            self.thread[v_in] = u_in;
            self.dirty_revs.clear();
            self.dirty_revs.push(v_in);
            while stem != u_out {
                // the parent follows the subtree of the stem node
                let next_stem = self.parent[stem];
                self.thread[last] = next_stem;
                self.dirty_revs.push(last);

                // cut the subtree of the stem node out of the thread
                let before = self.rev_thread[stem];
                self.link(before, after);

                self.parent[stem] = par_stem;
                par_stem = stem;
                stem = next_stem;

                last = if self.last_succ[stem] == self.last_succ[par_stem] {
                    self.rev_thread[par_stem]
                } else {
                    self.last_succ[stem]
                };
                after = self.thread[last];
            }
            self.parent[u_out] = par_stem;
            self.link(last, thread_continue);
            self.last_succ[u_out] = last;

            if old_rev_thread != v_in {
                self.link(old_rev_thread, after);
            }

            for i in 0..self.dirty_revs.len() {
                let u = self.dirty_revs[i];
                self.rev_thread[self.thread[u]] = u;
            }

            // reverse the parent arcs along the stem
            let mut succ_num = 0;
            let last_succ = self.last_succ[u_out];
            let mut u = u_out;
            while u != u_in {
                let p = self.parent[u];
                self.pred[u] = self.pred[p];
                self.pred_dir[u] = self.pred_dir[p].rev();
                succ_num += self.succ_num[u] - self.succ_num[p];
                self.succ_num[u] = succ_num;
                self.last_succ[p] = last_succ;
                u = p;
            }
            self.pred[u_in] = in_arc;
            self.pred_dir[u_in] = if u_in == self.source[in_arc] { Dir::Up } else { Dir::Down };
            self.succ_num[u_in] = old_succ_num;
        }

        let up_limit_out = if self.last_succ[join] == v_in { join } else { INVALID };
        let last_succ_out = self.last_succ[u_out];

        let mut u = v_in;
        while u != INVALID && self.last_succ[u] == v_in {
            self.last_succ[u] = last_succ_out;
            u = self.parent[u];
        }

        let new_last = if join != old_rev_thread && v_in != old_rev_thread {
            Some(old_rev_thread)
        } else if last_succ_out != old_last_succ {
            Some(last_succ_out)
        } else {
            None
        };
        if let Some(new_last) = new_last {
            let mut u = v_out;
            while u != up_limit_out && u != INVALID && self.last_succ[u] == old_last_succ {
                self.last_succ[u] = new_last;
                u = self.parent[u];
            }
        }

        let mut u = v_in;
        while u != join {
            self.succ_num[u] += old_succ_num;
            u = self.parent[u];
        }
        let mut u = v_out;
        while u != join {
            self.succ_num[u] -= old_succ_num;
            u = self.parent[u];
        }
    }

    fn link(&mut self, u: usize, v: usize) {
        self.thread[u] = v;
        self.rev_thread[v] = u;
    }

    /// Shift the potentials of the moved subtree so that the entering
    /// arc has reduced cost zero.
    fn update_potentials(&mut self, cycle: &Cycle) {
        let u_in = cycle.u_in;
        let sigma = self.pi[cycle.v_in] - self.pi[u_in] - self.pred_dir[u_in].apply(self.cost[cycle.in_arc]);
        let end = self.thread[self.last_succ[u_in]];
        let mut u = u_in;
        while u != end {
            self.pi[u] += sigma;
            u = self.thread[u];
        }
    }
}

impl MinCostFlow for NetworkSimplex {
    fn add_arc(&mut self, tail: usize, head: usize, capacity: i64, unit_cost: f64) -> ArcId {
        self.num_nodes = self.num_nodes.max(tail + 1).max(head + 1);
        self.tails.push(tail);
        self.heads.push(head);
        self.capacities.push(capacity);
        self.unit_costs.push(unit_cost);
        self.solution_state = SolutionState::NotSolved;
        ArcId(self.tails.len() - 1)
    }

    fn set_supply(&mut self, node: usize, supply: i64) {
        self.num_nodes = self.num_nodes.max(node + 1);
        if self.supplies.len() <= node {
            self.supplies.resize(node + 1, 0);
        }
        self.supplies[node] = supply;
        self.solution_state = SolutionState::NotSolved;
    }

    /// Solve the min-cost-flow problem.
    fn solve(&mut self) -> SolutionState {
        self.niter = 0;
        self.solution_state = self.solve_internal();
        self.solution_state
    }

    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn num_arcs(&self) -> usize {
        self.tails.len()
    }

    fn tail(&self, a: ArcId) -> usize {
        self.tails[a.0]
    }

    fn head(&self, a: ArcId) -> usize {
        self.heads[a.0]
    }

    fn capacity(&self, a: ArcId) -> i64 {
        self.capacities[a.0]
    }

    fn unit_cost(&self, a: ArcId) -> f64 {
        self.unit_costs[a.0]
    }

    /// The flow of an arc, 0 if the problem has not been solved.
    fn flow(&self, a: ArcId) -> i64 {
        self.flow.get(a.0).copied().unwrap_or(0)
    }

    /// Return the value of the latest computed flow.
    fn optimal_cost(&self) -> f64 {
        (0..self.tails.len())
            .map(|e| self.flow(ArcId(e)) as f64 * self.unit_costs[e])
            .sum()
    }
}

/// Solve a min-cost-flow problem with a network simplex algorithm.
///
/// The function returns the objective value and the optimal flow on
/// each arc, or `None` if no optimal solution exists.
pub fn network_simplex(
    tails: &[usize],
    heads: &[usize],
    capacities: &[i64],
    unit_costs: &[f64],
    supplies: &[i64],
) -> Option<(f64, Vec<i64>)> {
    let mut spx = NetworkSimplex::with_capacity(supplies.len(), tails.len());
    let arcs = spx.add_arcs(tails, heads, capacities, unit_costs);
    spx.set_supplies(supplies);
    if spx.solve() == SolutionState::Optimal {
        Some((spx.optimal_cost(), arcs.into_iter().map(|a| spx.flow(a)).collect()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{network_simplex, NetworkSimplex, Pricing};
    use crate::mcf::{ArcId, MinCostFlow, SolutionState};
    use test_case::test_case;

    // Two sources (0, 1) and three customers (2, 3, 4).
    const TAILS: [usize; 6] = [0, 0, 0, 1, 1, 1];
    const HEADS: [usize; 6] = [3, 4, 2, 4, 2, 3];
    const CAPS: [i64; 6] = [5, 5, 3, 5, 5, 5];
    const COSTS: [f64; 6] = [1.5, 1.25, 3.0, 1.5, 2.5, 2.0];
    const SUPPLIES: [i64; 5] = [6, 4, -3, -4, -3];

    fn transport(pricing: Pricing) -> NetworkSimplex {
        let mut spx = NetworkSimplex::new();
        spx.pricing = pricing;
        spx.add_arcs(&TAILS, &HEADS, &CAPS, &COSTS);
        spx.set_supplies(&SUPPLIES);
        spx
    }

    fn flows(spx: &NetworkSimplex) -> Vec<i64> {
        (0..spx.num_arcs()).map(|e| spx.flow(ArcId(e))).collect()
    }

    fn excess(spx: &NetworkSimplex, u: usize) -> i64 {
        (0..spx.num_arcs())
            .map(ArcId)
            .map(|a| {
                if spx.tail(a) == u {
                    spx.flow(a)
                } else if spx.head(a) == u {
                    -spx.flow(a)
                } else {
                    0
                }
            })
            .sum()
    }

    #[test_case(Pricing::Block; "block")]
    #[test_case(Pricing::RoundRobin; "round robin")]
    #[test_case(Pricing::Complete; "complete")]
    fn transport_problem(pricing: Pricing) {
        let mut spx = transport(pricing);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        assert_eq!(spx.solution_state(), SolutionState::Optimal);
        assert_eq!(spx.optimal_cost(), 17.5);
        assert_eq!(flows(&spx), vec![4, 2, 0, 1, 3, 0]);
        for u in 0..spx.num_nodes() {
            assert_eq!(excess(&spx, u), spx.supply(u));
        }
    }

    #[test]
    fn solve_twice() {
        let mut spx = transport(Pricing::Block);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        let first = flows(&spx);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        assert_eq!(flows(&spx), first);
    }

    #[test]
    fn unbalanced() {
        let mut spx = NetworkSimplex::new();
        spx.add_arc(0, 1, 10, 1.0);
        spx.set_supplies(&[5, -4]);
        assert_eq!(spx.solve(), SolutionState::Unbalanced);
    }

    #[test]
    fn infeasible() {
        let mut spx = NetworkSimplex::new();
        spx.add_arc(0, 1, 3, 1.0);
        spx.set_supplies(&[5, -5]);
        assert_eq!(spx.solve(), SolutionState::Infeasible);
    }

    #[test]
    fn bad_input() {
        let mut spx = NetworkSimplex::new();
        spx.add_arc(0, 1, -1, 1.0);
        spx.set_supplies(&[0, 0]);
        assert_eq!(spx.solve(), SolutionState::BadInput);

        let mut spx = NetworkSimplex::new();
        spx.add_arc(0, 1, 1, f64::NAN);
        assert_eq!(spx.solve(), SolutionState::BadInput);

        let mut spx = NetworkSimplex::new();
        spx.add_arc(0, 1, 1, 1.0);
        spx.set_supplies(&[i64::MIN, i64::MAX]);
        assert_eq!(spx.solve(), SolutionState::BadInput);
    }

    #[test]
    fn no_arcs() {
        let mut spx = NetworkSimplex::new();
        spx.set_supplies(&[0, 0, 0]);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        spx.set_supplies(&[1, -1]);
        assert_eq!(spx.solve(), SolutionState::Infeasible);
    }

    #[test]
    fn negative_costs() {
        let value = network_simplex(&[0, 1, 0], &[1, 2, 2], &[5, 5, 5], &[1.0, -3.0, 0.0], &[2, 0, -2]);
        assert_eq!(value, Some((-4.0, vec![2, 2, 0])));
    }

    // The gain of a negative arc must not outweigh the artificial cost.
    #[test_case(Pricing::Block; "block")]
    #[test_case(Pricing::RoundRobin; "round robin")]
    #[test_case(Pricing::Complete; "complete")]
    fn negative_arc_without_supply(pricing: Pricing) {
        let mut spx = NetworkSimplex::new();
        spx.pricing = pricing;
        let a = spx.add_arc(0, 1, 1, -2.5);
        spx.set_supplies(&[0, 0]);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        assert_eq!(spx.flow(a), 0);
        assert_eq!(spx.optimal_cost(), 0.0);
    }

    #[test_case(Pricing::Block; "block")]
    #[test_case(Pricing::RoundRobin; "round robin")]
    #[test_case(Pricing::Complete; "complete")]
    fn negative_arc_into_demand(pricing: Pricing) {
        let mut spx = NetworkSimplex::new();
        spx.pricing = pricing;
        let a = spx.add_arc(1, 0, 2, -2.0);
        spx.set_supplies(&[-1, 1]);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        assert_eq!(spx.flow(a), 1);
        assert_eq!(spx.optimal_cost(), -2.0);
    }

    #[test_case(Pricing::Block; "block")]
    #[test_case(Pricing::RoundRobin; "round robin")]
    #[test_case(Pricing::Complete; "complete")]
    fn negative_cycle(pricing: Pricing) {
        let mut spx = NetworkSimplex::new();
        spx.pricing = pricing;
        spx.add_arcs(&[0, 1, 2], &[1, 2, 0], &[3, 3, 3], &[-1.0, -1.0, -1.0]);
        spx.set_supplies(&[0, 0, 0]);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        assert_eq!(flows(&spx), vec![3, 3, 3]);
        assert_eq!(spx.optimal_cost(), -9.0);
    }

    #[test]
    fn uncapacitated_negative_cycle() {
        let mut spx = NetworkSimplex::new();
        spx.add_arcs(&[0, 1], &[1, 0], &[i64::MAX, i64::MAX], &[-1.0, 0.5]);
        spx.set_supplies(&[0, 0]);
        assert_eq!(spx.solve(), SolutionState::Unbounded);
    }

    #[test]
    fn transshipment() {
        let value = network_simplex(&[0, 1, 0], &[1, 2, 2], &[2, 2, 5], &[1.0, 1.0, 5.0], &[3, 0, -3]);
        assert_eq!(value, Some((9.0, vec![2, 2, 1])));
    }

    #[test]
    fn implicit_nodes() {
        let mut spx = NetworkSimplex::new();
        let a = spx.add_arc(0, 3, 4, 2.0);
        assert_eq!(spx.num_nodes(), 4);
        spx.set_supply(0, 4);
        spx.set_supply(3, -4);
        assert_eq!(spx.solve(), SolutionState::Optimal);
        assert_eq!(spx.flow(a), 4);
        assert_eq!(spx.optimal_cost(), 8.0);
    }

    #[test]
    #[should_panic]
    fn mismatched_arc_slices() {
        let mut spx = NetworkSimplex::new();
        spx.add_arcs(&[0, 1], &[1, 2], &[1], &[1.0, 1.0]);
    }
}
