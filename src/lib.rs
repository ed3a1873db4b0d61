// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Solving transportation problems as minimum cost flow problems.
//!
//! A transportation problem is read from a JSON file
//! ([`problem`]), solved with a min-cost-flow solver ([`mcf`]) and
//! reported as a table of shipped flows ([`report`]).

// # Data

pub mod problem;
pub use self::problem::Problem;

// # Algorithms

pub mod mcf;
pub use self::mcf::{MinCostFlow, NetworkSimplex, SolutionState};

// # Driver

pub mod cli;
pub mod io;
pub mod report;
pub mod runner;
pub use self::report::Report;
pub use self::runner::{solve, Outcome, RunConfig};
