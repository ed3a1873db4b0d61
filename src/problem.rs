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

//! Transportation problem instances.
//!
//! An instance is a JSON object with four parallel arc arrays, a
//! supply vector indexed by node and two name tables:
//!
//! ```json
//! {
//!   "start_nodes": [0, 0, 1],
//!   "end_nodes": [2, 3, 3],
//!   "capacities": [5, 5, 5],
//!   "unit_costs": [1.5, 2.0, 1.25],
//!   "supplies": [4, 2, -3, -3],
//!   "start_nodes_names": { "0": "Arn", "1": "Gou" },
//!   "end_nodes_names": { "2": "Lon", "3": "Ber" }
//! }
//! ```
//!
//! Node names are looked up by the decimal string of the node index.

use std::collections::BTreeMap;
use std::error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

/// Error when reading or interpreting a problem instance.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Data { msg: String },
    MissingName { role: NodeRole, node: usize },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Io(err) => err.fmt(fmt),
            Json(err) => write!(fmt, "Format error: {}", err),
            Data { msg } => write!(fmt, "Data error: {}", msg),
            MissingName { role, node } => write!(fmt, "Data error: no name for {} node {}", role, node),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Which name table a node is looked up in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeRole {
    Source,
    Customer,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeRole::Source => write!(fmt, "source"),
            NodeRole::Customer => write!(fmt, "customer"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Tail node of each arc.
    pub start_nodes: Vec<usize>,
    /// Head node of each arc.
    pub end_nodes: Vec<usize>,
    /// Maximal flow on each arc.
    pub capacities: Vec<i64>,
    /// Cost per unit of flow on each arc.
    pub unit_costs: Vec<f64>,
    /// Supply (positive) or demand (negative) of each node.
    pub supplies: Vec<i64>,
    pub start_nodes_names: BTreeMap<String, String>,
    pub end_nodes_names: BTreeMap<String, String>,
}

impl Problem {
    pub fn num_arcs(&self) -> usize {
        self.start_nodes.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.supplies.len()
    }

    /// Sum of all supplies and demands, zero for a balanced instance.
    pub fn total_supply(&self) -> i128 {
        self.supplies.iter().map(|&b| i128::from(b)).sum()
    }

    /// Check that the arc arrays fit together.
    ///
    /// All arc arrays must have the same length, arcs must connect
    /// nodes that have an entry in `supplies`, capacities must be
    /// non-negative and costs finite.
    pub fn validate(&self) -> Result<()> {
        let m = self.start_nodes.len();
        for (key, len) in &[
            ("end_nodes", self.end_nodes.len()),
            ("capacities", self.capacities.len()),
            ("unit_costs", self.unit_costs.len()),
        ] {
            if *len != m {
                return Err(Error::Data {
                    msg: format!("'{}' has {} entries, but 'start_nodes' has {}", key, len, m),
                });
            }
        }

        let n = self.supplies.len();
        for (eid, (&u, &v)) in self.start_nodes.iter().zip(&self.end_nodes).enumerate() {
            if u >= n || v >= n {
                return Err(Error::Data {
                    msg: format!("invalid arc {} ({},{}) (nodes must be in 0..{})", eid, u, v, n),
                });
            }
        }

        if let Some(eid) = self.capacities.iter().position(|&c| c < 0) {
            return Err(Error::Data {
                msg: format!("negative capacity {} on arc {}", self.capacities[eid], eid),
            });
        }

        if let Some(eid) = self.unit_costs.iter().position(|c| !c.is_finite()) {
            return Err(Error::Data {
                msg: format!("invalid unit cost {} on arc {}", self.unit_costs[eid], eid),
            });
        }

        Ok(())
    }

    /// The display name of a node.
    pub fn node_name(&self, role: NodeRole, node: usize) -> Result<&str> {
        let names = match role {
            NodeRole::Source => &self.start_nodes_names,
            NodeRole::Customer => &self.end_nodes_names,
        };
        names
            .get(&node.to_string())
            .map(String::as_str)
            .ok_or(Error::MissingName { role, node })
    }
}

pub fn read<R: Read>(r: R) -> Result<Problem> {
    Ok(serde_json::from_reader(BufReader::new(r))?)
}

pub fn read_from_file<P: AsRef<Path>>(filename: P) -> Result<Problem> {
    read(File::open(filename)?)
}

#[cfg(test)]
mod tests {
    use super::{read, Error, NodeRole, Problem};
    use std::io::Cursor;

    const INSTANCE: &str = r#"{
        "start_nodes": [0, 0, 1],
        "end_nodes": [2, 3, 3],
        "capacities": [5, 5, 5],
        "unit_costs": [1.5, 2, 1.25],
        "supplies": [4, 2, -3, -3],
        "start_nodes_names": { "0": "Arn", "1": "Gou" },
        "end_nodes_names": { "2": "Lon", "3": "Ber" },
        "comment": "unknown keys are ignored"
    }"#;

    fn instance() -> Problem {
        read(Cursor::new(INSTANCE)).unwrap()
    }

    #[test]
    fn parse_instance() {
        let p = instance();
        assert_eq!(p.num_arcs(), 3);
        assert_eq!(p.num_nodes(), 4);
        assert_eq!(p.total_supply(), 0);
        assert_eq!(p.unit_costs, vec![1.5, 2.0, 1.25]);
        assert_eq!(p.node_name(NodeRole::Source, 1).unwrap(), "Gou");
        assert_eq!(p.node_name(NodeRole::Customer, 3).unwrap(), "Ber");
        assert!(p.validate().is_ok());
    }

    #[test]
    fn total_supply_does_not_overflow() {
        let mut p = instance();
        p.supplies = vec![i64::MAX, i64::MAX, -3, -3];
        assert_eq!(p.total_supply(), 2 * i128::from(i64::MAX) - 6);
        p.supplies = vec![i64::MIN, -1];
        assert_eq!(p.total_supply(), i128::from(i64::MIN) - 1);
    }

    #[test]
    fn missing_name() {
        let p = instance();
        match p.node_name(NodeRole::Customer, 0) {
            Err(Error::MissingName { role, node }) => {
                assert_eq!(role, NodeRole::Customer);
                assert_eq!(node, 0);
            }
            r => panic!("unexpected result: {:?}", r),
        }
    }

    #[test]
    fn missing_key() {
        let r = read(Cursor::new(r#"{ "start_nodes": [0], "end_nodes": [1] }"#));
        assert!(matches!(r, Err(Error::Json(_))));
    }

    #[test]
    fn malformed_json() {
        let r = read(Cursor::new("{ \"start_nodes\": [0,"));
        assert!(matches!(r, Err(Error::Json(_))));
    }

    #[test]
    fn length_mismatch() {
        let mut p = instance();
        p.capacities.pop();
        assert!(matches!(p.validate(), Err(Error::Data { .. })));
    }

    #[test]
    fn node_out_of_range() {
        let mut p = instance();
        p.end_nodes[2] = 4;
        assert!(matches!(p.validate(), Err(Error::Data { .. })));
    }

    #[test]
    fn negative_capacity() {
        let mut p = instance();
        p.capacities[0] = -1;
        assert!(matches!(p.validate(), Err(Error::Data { .. })));
    }

    #[test]
    fn missing_file() {
        let r = super::read_from_file("does/not/exist.json");
        assert!(matches!(r, Err(Error::Io(_))));
    }
}
