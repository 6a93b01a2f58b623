//! Where DNs come from: arguments, a file, or stdin.

use clap::Args;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

/// Errors reading DNs.
#[derive(Debug, Error)]
pub enum InputError {
    /// The `--input` file could not be read.
    #[error("Failed to read file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Stdin could not be read.
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// DN source shared by every command that takes a list of DNs.
#[derive(Args)]
pub struct Source {
    /// DNs to process (read from --input or stdin if none given)
    pub dns: Vec<String>,
    /// File with one DN per line
    #[arg(long, conflicts_with = "dns")]
    pub input: Option<PathBuf>,
}

impl Source {
    /// Collects the DNs as raw bytes, in input order.
    pub fn read(self) -> Result<Vec<Vec<u8>>, InputError> {
        if !self.dns.is_empty() {
            return Ok(self.dns.into_iter().map(String::into_bytes).collect());
        }
        let data = match self.input {
            Some(path) => std::fs::read(&path).map_err(|source| InputError::File {
                path: path.display().to_string(),
                source,
            })?,
            None => {
                let mut buffer = Vec::new();
                io::stdin()
                    .read_to_end(&mut buffer)
                    .map_err(InputError::Stdin)?;
                buffer
            }
        };
        Ok(split_lines(&data))
    }
}

/// One DN per line; blank lines are skipped and a trailing `\r` is dropped.
fn split_lines(data: &[u8]) -> Vec<Vec<u8>> {
    data.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.iter().all(u8::is_ascii_whitespace))
        .map(<[u8]>::to_vec)
        .collect()
}
