use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Opens `path` for reading, or stdin when no path (or `-`) is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file =
                File::open(p).with_context(|| format!("could not open {}", p.display()))?;
            log::debug!("Reading from {}", p.display());
            Ok(Box::new(BufReader::new(file)))
        }
        _ => {
            log::debug!("Reading from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}
