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

//! Solution reports.
//!
//! A [`Report`] prints as
//!
//! ```text
//! Status: Optimal
//!
//! Minimum cost: 17.5
//!
//! Flows:
//!   Source Customer Capacity Shipped Cost
//! 0    Arn      Ber        5       4  6.0
//! ...
//! ```

use std::fmt;

use serde_derive::Serialize;

use crate::mcf::SolutionState;

/// The solution on a single arc.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FlowRecord {
    pub source: String,
    pub customer: String,
    pub capacity: i64,
    pub shipped: i64,
    pub cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub status: SolutionState,
    pub minimum_cost: f64,
    /// One record per arc, in arc order.
    pub flows: Vec<FlowRecord>,
}

impl Report {
    pub fn new(status: SolutionState, flows: Vec<FlowRecord>) -> Self {
        Report {
            status,
            minimum_cost: flows.iter().fold(0.0, |total, r| total + r.cost),
            flows,
        }
    }

    /// Total flow shipped over all arcs.
    pub fn total_shipped(&self) -> i64 {
        self.flows.iter().map(|r| r.shipped).sum()
    }

    fn table(&self) -> Table {
        let mut table = Table::new(&["Source", "Customer", "Capacity", "Shipped", "Cost"]);
        for r in &self.flows {
            table.push(vec![
                r.source.clone(),
                r.customer.clone(),
                r.capacity.to_string(),
                r.shipped.to_string(),
                format_cost(r.cost),
            ]);
        }
        table
    }
}

impl fmt::Display for Report {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "Status: {}", self.status)?;
        writeln!(fmt)?;
        writeln!(fmt, "Minimum cost: {}", format_cost(self.minimum_cost))?;
        writeln!(fmt)?;
        writeln!(fmt, "Flows:")?;
        write!(fmt, "{}", self.table())
    }
}

/// Format a cost value with at least one decimal.
pub fn format_cost(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// A table with a row index column, all cells right aligned.
struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: &[&str]) -> Self {
        Table {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: vec![],
        }
    }

    fn push(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.header.len());
        self.rows.push(row);
    }
}

impl fmt::Display for Table {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = (0..self.header.len())
            .map(|j| {
                self.rows
                    .iter()
                    .map(|row| row[j].chars().count())
                    .chain(Some(self.header[j].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(fmt, "{:w$}", "", w = index_width)?;
        for (h, &w) in self.header.iter().zip(&widths) {
            write!(fmt, " {:>w$}", h, w = w)?;
        }
        writeln!(fmt)?;

        for (i, row) in self.rows.iter().enumerate() {
            write!(fmt, "{:<w$}", i, w = index_width)?;
            for (cell, &w) in row.iter().zip(&widths) {
                write!(fmt, " {:>w$}", cell, w = w)?;
            }
            writeln!(fmt)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{format_cost, FlowRecord, Report};
    use crate::mcf::SolutionState;

    fn record(source: &str, customer: &str, capacity: i64, shipped: i64, cost: f64) -> FlowRecord {
        FlowRecord {
            source: source.to_string(),
            customer: customer.to_string(),
            capacity,
            shipped,
            cost,
        }
    }

    #[test]
    fn cost_format() {
        assert_eq!(format_cost(6.0), "6.0");
        assert_eq!(format_cost(1.25), "1.25");
        assert_eq!(format_cost(0.0), "0.0");
        assert_eq!(format_cost(-4.0), "-4.0");
    }

    #[test]
    fn render() {
        let report = Report::new(
            SolutionState::Optimal,
            vec![record("Arn", "Ber", 5, 4, 6.0), record("Gou", "Lon", 12, 3, 7.5)],
        );
        assert_eq!(report.minimum_cost, 13.5);
        assert_eq!(report.total_shipped(), 7);
        assert_eq!(
            report.to_string(),
            "Status: Optimal\n\
             \n\
             Minimum cost: 13.5\n\
             \n\
             Flows:\n\
             \x20 Source Customer Capacity Shipped Cost\n\
             0    Arn      Ber        5       4  6.0\n\
             1    Gou      Lon       12       3  7.5\n"
        );
    }

    #[test]
    fn empty_table() {
        let report = Report::new(SolutionState::Optimal, vec![]);
        assert_eq!(
            report.to_string(),
            "Status: Optimal\n\nMinimum cost: 0.0\n\nFlows:\n  Source Customer Capacity Shipped Cost\n"
        );
    }

    #[test]
    fn json() {
        let report = Report::new(SolutionState::Optimal, vec![record("Arn", "Ber", 5, 4, 6.0)]);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["Status"], "Optimal");
        assert_eq!(value["MinimumCost"], 6.0);
        assert_eq!(value["Flows"][0]["Customer"], "Ber");
        assert_eq!(value["Flows"][0]["Shipped"], 4);
    }
}
