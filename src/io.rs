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

//! Files and logging.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::runner::RunConfig;

/// Read a solver configuration from a JSON file.
pub fn read_config(path: &Path) -> Result<RunConfig> {
    read_json(path).context("incorrect config file format")
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("could not write file: {}", path.display()))?;
    writer.flush()?;
    info!("Solution written to {}", path.display());
    Ok(())
}

/// Log to stderr, stdout is reserved for the reports.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let prefix = format!("[{}] <{}>", record.level(), record.target());
            out.finish(format_args!("{:<32}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_config, read_json, write_json};
    use crate::mcf::Pricing;
    use crate::runner::RunConfig;
    use std::path::Path;

    #[test]
    fn config_round_trip() {
        let path = std::env::temp_dir().join(format!("transport-flow-config-{}.json", std::process::id()));
        let config = RunConfig {
            pricing: Pricing::Complete,
            zero: 1e-6,
            artificial_cost: Some(1000.0),
        };
        write_json(&config, &path).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        let err = read_json::<RunConfig>(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
