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

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Solve transportation problems with a network simplex algorithm.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance files, solved in the given order
    #[arg(value_name = "FILE", default_value = "data/data_0.json")]
    pub data_files: Vec<PathBuf>,
    /// Solver configuration (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Write the report of the last instance as JSON
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use log::LevelFilter;
    use std::path::PathBuf;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["transport-flow"]).unwrap();
        assert_eq!(cli.data_files, vec![PathBuf::from("data/data_0.json")]);
        assert_eq!(cli.log_level, LevelFilter::Warn);
        assert!(cli.config_file.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn scenarios() {
        let cli = Cli::try_parse_from([
            "transport-flow",
            "-l",
            "debug",
            "-o",
            "sol.json",
            "data/data_0.json",
            "data/data_1.json",
        ])
        .unwrap();
        assert_eq!(cli.data_files.len(), 2);
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(cli.output, Some(PathBuf::from("sol.json")));
    }
}
