//! This module provides a `ProofEngine` backed by an external program.
//!
//! The program is run once per query: the query command is written on its
//! stdin and its stdout is taken as the raw answer.

use std::io;

use log::{debug, warn};

use crate::hover::ProofEngine;
use crate::query::Query;

#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: String, args: Vec<String>) -> CommandEngine {
        CommandEngine { program, args }
    }

    /// Run the program with `command` as input, and return its output
    /// untouched, trailing newlines included.
    pub fn run(&self, command: &str) -> io::Result<String> {
        let input = format!("{}\n", command);
        let output = duct::cmd(self.program.as_str(), &self.args)
            .stdin_bytes(input)
            .stdout_capture()
            .stderr_null()
            .run()?;

        String::from_utf8(output.stdout)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

impl ProofEngine for CommandEngine {
    fn hover_query(&self, query: &Query) -> Option<String> {
        let command = query.command();
        debug!("running `{}` for `{}`", self.program, command);

        match self.run(&command) {
            Ok(output) => Some(output),
            Err(err) => {
                warn!("`{}` failed on `{}`: {}", self.program, command, err);
                None
            }
        }
    }
}
