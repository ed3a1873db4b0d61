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

//! Minimum Cost Flow solvers.
//!
//! The [`MinCostFlow`] trait is the only thing the problem runner
//! knows about a solver: arcs and supplies go in, a
//! [`SolutionState`] and per-arc flows come out. Flows and
//! capacities are integral, unit costs are floating point.

pub mod simplex;
pub use simplex::{NetworkSimplex, Pricing};

use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// Handle of an arc registered with a solver.
///
/// Arcs are numbered consecutively in registration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ArcId(pub(crate) usize);

impl ArcId {
    /// The position of the arc in registration order.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SolutionState {
    /// The problem has not been solved, yet
    NotSolved,
    /// The problem has been solved to optimality
    Optimal,
    /// The problem is infeasible
    Infeasible,
    /// Supplies and demands do not sum to zero
    Unbalanced,
    /// The problem is unbounded
    Unbounded,
    /// Some arc has a negative capacity or a non-finite cost, or a
    /// demand is out of range
    BadInput,
}

impl SolutionState {
    pub fn is_optimal(self) -> bool {
        self == SolutionState::Optimal
    }
}

impl fmt::Display for SolutionState {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, fmt)
    }
}

/// A min-cost-flow solver.
pub trait MinCostFlow {
    /// Add an arc `tail -> head`.
    ///
    /// Nodes are created implicitly; a node that never gets a supply
    /// is a transshipment node.
    fn add_arc(&mut self, tail: usize, head: usize, capacity: i64, unit_cost: f64) -> ArcId;

    /// Add arcs in bulk from four parallel slices.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length.
    fn add_arcs(&mut self, tails: &[usize], heads: &[usize], capacities: &[i64], unit_costs: &[f64]) -> Vec<ArcId> {
        assert!(
            tails.len() == heads.len() && tails.len() == capacities.len() && tails.len() == unit_costs.len(),
            "arc slices differ in length"
        );
        tails
            .iter()
            .zip(heads)
            .zip(capacities.iter().zip(unit_costs))
            .map(|((&u, &v), (&cap, &cost))| self.add_arc(u, v, cap, cost))
            .collect()
    }

    /// Set the supply (positive) or demand (negative) of a node.
    fn set_supply(&mut self, node: usize, supply: i64);

    /// Set the supplies of the nodes `0..supplies.len()`.
    fn set_supplies(&mut self, supplies: &[i64]) {
        for (u, &b) in supplies.iter().enumerate() {
            self.set_supply(u, b);
        }
    }

    /// Solve the min-cost-flow problem.
    fn solve(&mut self) -> SolutionState;

    fn num_nodes(&self) -> usize;

    fn num_arcs(&self) -> usize;

    fn tail(&self, a: ArcId) -> usize;

    fn head(&self, a: ArcId) -> usize;

    fn capacity(&self, a: ArcId) -> i64;

    fn unit_cost(&self, a: ArcId) -> f64;

    /// The flow on an arc in the latest solution.
    fn flow(&self, a: ArcId) -> i64;

    /// The total cost of the latest solution.
    fn optimal_cost(&self) -> f64;
}
