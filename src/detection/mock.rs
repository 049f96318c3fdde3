//! Mock command runner for testing.
//!
//! `MockRunner` answers probes from a script and records every invocation
//! for later assertion. Unscripted invocations fail as if the executable
//! were missing.
//!
//! # Example
//!
//! ```
//! use reia_bootstrap::detection::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_success("zig", "version", "0.13.0");
//!
//! assert!(runner.command_exists("zig"));
//! assert_eq!(runner.calls(), vec!["zig --version", "zig version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use super::runner::{CommandRunner, ProbeError};

/// Scripted [`CommandRunner`].
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<(String, String), String>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// A runner on which every probe fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command args` succeed with `stdout`.
    pub fn with_success(mut self, command: &str, args: &str, stdout: &str) -> Self {
        self.responses
            .insert((command.to_string(), args.to_string()), stdout.to_string());
        self
    }

    /// Every invocation so far, formatted as `command args`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of invocations of `command`, with any arguments.
    pub fn call_count(&self, command: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.split_whitespace().next() == Some(command))
            .count()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<String, ProbeError> {
        let args = args.join(" ");
        self.calls.borrow_mut().push(format!("{} {}", command, args));

        self.responses
            .get(&(command.to_string(), args))
            .cloned()
            .ok_or_else(|| ProbeError::Unavailable {
                command: command.to_string(),
                reason: "not scripted".to_string(),
            })
    }
}
