// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Solving a transportation problem end to end.
//!
//! The runner translates a [`Problem`] into the flat arc arrays of a
//! [`MinCostFlow`] solver, solves it and translates the flows back
//! into named [`FlowRecord`]s.

use std::path::Path;

use log::{debug, info, warn};
use serde_derive::{Deserialize, Serialize};

use crate::mcf::{MinCostFlow, NetworkSimplex, Pricing, SolutionState};
use crate::problem::{self, NodeRole, Problem, Result};
use crate::report::{FlowRecord, Report};

/// Parameters of the network simplex solver.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub pricing: Pricing,
    /// Tolerance for negative reduced costs.
    pub zero: f64,
    /// Cost of the artificial arcs, chosen automatically if `None`.
    pub artificial_cost: Option<f64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            pricing: Pricing::Block,
            zero: 1e-9,
            artificial_cost: None,
        }
    }
}

impl RunConfig {
    pub fn solver(&self) -> NetworkSimplex {
        let mut spx = NetworkSimplex::new();
        spx.pricing = self.pricing;
        spx.zero = self.zero;
        spx.artificial_cost = self.artificial_cost;
        spx
    }
}

/// The result of a single run.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// An optimal solution has been found.
    Solved(Report),
    /// The solver stopped with a non-optimal state.
    NotOptimal(SolutionState),
}

impl Outcome {
    pub fn state(&self) -> SolutionState {
        match self {
            Outcome::Solved(report) => report.status,
            Outcome::NotOptimal(state) => *state,
        }
    }

    /// The process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Solved(_) => 0,
            Outcome::NotOptimal(_) => 1,
        }
    }
}

/// Read the problem in `data_file` and solve it with a network simplex.
pub fn solve<P: AsRef<Path>>(data_file: P, config: &RunConfig) -> Result<Outcome> {
    let path = data_file.as_ref();
    let problem = problem::read_from_file(path)?;
    info!(
        "Read {} ({} nodes, {} arcs, total supply {})",
        path.display(),
        problem.num_nodes(),
        problem.num_arcs(),
        problem.total_supply()
    );

    let mut spx = config.solver();
    let outcome = solve_problem(&problem, &mut spx)?;
    debug!(
        "Network simplex finished with {} after {} iterations",
        outcome.state(),
        spx.num_iterations()
    );
    Ok(outcome)
}

/// Solve a problem with the given (empty) solver.
pub fn solve_problem<S: MinCostFlow>(problem: &Problem, solver: &mut S) -> Result<Outcome> {
    problem.validate()?;
    let imbalance = problem.total_supply();
    if imbalance != 0 {
        warn!("Supplies and demands differ by {}", imbalance);
    }

    let arcs = solver.add_arcs(
        &problem.start_nodes,
        &problem.end_nodes,
        &problem.capacities,
        &problem.unit_costs,
    );
    solver.set_supplies(&problem.supplies);

    let state = solver.solve();
    if !state.is_optimal() {
        return Ok(Outcome::NotOptimal(state));
    }

    let flows = arcs
        .into_iter()
        .map(|a| {
            let shipped = solver.flow(a);
            Ok(FlowRecord {
                source: problem.node_name(NodeRole::Source, solver.tail(a))?.to_string(),
                customer: problem.node_name(NodeRole::Customer, solver.head(a))?.to_string(),
                capacity: solver.capacity(a),
                shipped,
                cost: shipped as f64 * solver.unit_cost(a),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Outcome::Solved(Report::new(state, flows)))
}
