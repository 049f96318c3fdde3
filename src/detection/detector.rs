//! Runs the probes for every toolchain in the catalog.
//!
//! Probes run sequentially on the calling thread. Presence results are
//! cached per command for the lifetime of the detector, so an executable
//! shared by several checks is only probed once.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::{SubCheckSpec, ToolSpec};

use super::runner::{CommandRunner, ProbeError};
use super::status::{SubCheckStatus, ToolStatus};
use super::version::{compare_versions, extract_version};

/// Detects installed toolchains through a [`CommandRunner`].
pub struct Detector<R> {
    runner: R,
    cache: HashMap<String, bool>,
}

impl<R: CommandRunner> Detector<R> {
    /// Create a new detector.
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            cache: HashMap::new(),
        }
    }

    /// The runner probes are sent to.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Whether `command` answers a version probe, using cache when available.
    pub fn check_one(&mut self, command: &str) -> bool {
        if let Some(&cached) = self.cache.get(command) {
            return cached;
        }

        let found = self.runner.command_exists(command);
        self.cache.insert(command.to_string(), found);
        found
    }

    /// Whether `command --version` reports at least `minimum`.
    pub fn version_at_least(&self, command: &str, minimum: &str) -> Result<bool, ProbeError> {
        let output = self.runner.run(command, &["--version"])?;
        let version = extract_version(&output).ok_or_else(|| ProbeError::VersionUnparseable {
            command: command.to_string(),
            output: output.trim().to_string(),
        })?;

        tracing::debug!("{} reports version {} (minimum {})", command, version, minimum);
        Ok(compare_versions(&version, minimum) != Ordering::Less)
    }

    /// Probe one toolchain and its sub-checks.
    pub fn detect(&mut self, spec: &ToolSpec) -> ToolStatus {
        let installed = self.check_one(spec.command);
        let sub_checks = spec
            .sub_checks
            .iter()
            .map(|sub| self.evaluate_sub_check(sub))
            .collect();

        let status = ToolStatus::new(spec, installed, sub_checks);
        tracing::debug!(
            "{}: installed={} ready={}",
            spec.name,
            status.installed(),
            status.is_ready()
        );
        status
    }

    /// Probe every toolchain in order.
    pub fn detect_all(&mut self, specs: &[ToolSpec]) -> Vec<ToolStatus> {
        self.detect_all_with(specs, |_| {})
    }

    /// Probe every toolchain in order, calling `on_tool` before each one.
    pub fn detect_all_with<F>(&mut self, specs: &[ToolSpec], mut on_tool: F) -> Vec<ToolStatus>
    where
        F: FnMut(&ToolSpec),
    {
        let statuses: Vec<ToolStatus> = specs
            .iter()
            .map(|spec| {
                on_tool(spec);
                self.detect(spec)
            })
            .collect();

        let ready = statuses.iter().filter(|s| s.is_ready()).count();
        tracing::info!("{} of {} toolchains ready", ready, statuses.len());
        statuses
    }

    fn evaluate_sub_check(&mut self, sub: &SubCheckSpec) -> SubCheckStatus {
        match *sub {
            SubCheckSpec::Command { label, command } => {
                SubCheckStatus::presence(label, self.check_one(command))
            }
            SubCheckSpec::MinVersion {
                label,
                command,
                minimum,
            } => {
                let passed = self.version_at_least(command, minimum).unwrap_or_else(|e| {
                    tracing::debug!("version check for {} not satisfied: {}", command, e);
                    false
                });
                SubCheckStatus::min_version(label, passed, minimum)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{catalog, Tier};
    use crate::detection::MockRunner;

    fn spec(command: &str) -> &'static ToolSpec {
        catalog().iter().find(|t| t.command == command).unwrap()
    }

    fn healthy_rust() -> MockRunner {
        MockRunner::new()
            .with_success("rustc", "--version", "rustc 1.90.0 (1159e78c4 2025-09-14)")
            .with_success("cargo", "--version", "cargo 1.90.0 (840b83a10 2025-07-30)")
            .with_success("rustup", "--version", "rustup 1.28.2 (e4f3ad6f8 2025-04-28)")
    }

    #[test]
    fn first_successful_probe_skips_second() {
        let runner = MockRunner::new().with_success("docker", "--version", "Docker version 27.0.1");
        let mut detector = Detector::new(runner);

        let status = detector.detect(spec("docker"));
        assert!(status.installed());
        assert_eq!(detector.runner().calls(), vec!["docker --version"]);
    }

    #[test]
    fn both_probes_failing_means_not_installed() {
        let mut detector = Detector::new(MockRunner::new());

        let status = detector.detect(spec("zig"));
        assert!(!status.installed());
        assert_eq!(detector.runner().calls(), vec!["zig --version", "zig version"]);
    }

    #[test]
    fn second_probe_can_rescue_tool() {
        let runner = MockRunner::new().with_success("zig", "version", "0.13.0");
        let mut detector = Detector::new(runner);

        assert!(detector.detect(spec("zig")).installed());
    }

    #[test]
    fn presence_results_are_cached() {
        let mut detector = Detector::new(MockRunner::new());
        assert!(!detector.check_one("godot"));
        assert!(!detector.check_one("godot"));
        assert_eq!(detector.runner().call_count("godot"), 2);
    }

    #[test]
    fn git_reports_lfs_sub_check() {
        let runner = MockRunner::new().with_success("git", "--version", "git version 2.45.0");
        let mut detector = Detector::new(runner);

        let status = detector.detect(spec("git"));
        assert!(status.installed());
        assert_eq!(
            status.sub_checks(),
            &[SubCheckStatus::presence("LFS", false)]
        );
        assert!(!status.is_ready());
    }

    #[test]
    fn healthy_rust_toolchain_is_ready() {
        let mut detector = Detector::new(healthy_rust());

        let status = detector.detect(spec("rustc"));
        assert!(status.is_ready());
        assert_eq!(status.tier(), Tier::Required);
        assert_eq!(
            status.sub_checks().last(),
            Some(&SubCheckStatus::min_version("Rust version", true, "1.88.0"))
        );
    }

    #[test]
    fn rust_at_exact_minimum_passes() {
        let runner = MockRunner::new()
            .with_success("rustc", "--version", "rustc 1.88.0 (6b00bc388 2025-06-23)");
        let detector = Detector::new(runner);
        assert_eq!(detector.version_at_least("rustc", "1.88.0"), Ok(true));
    }

    #[test]
    fn old_rust_fails_version_gate() {
        let runner = MockRunner::new()
            .with_success("rustc", "--version", "rustc 1.75.0 (82e1608df 2023-12-21)");
        let mut detector = Detector::new(runner);

        let status = detector.detect(spec("rustc"));
        assert!(status.installed());
        let gate = status.sub_checks().last().unwrap();
        assert!(!gate.passed);
        assert_eq!(gate.minimum.as_deref(), Some("1.88.0"));
    }

    #[test]
    fn unparseable_version_is_not_satisfied() {
        let runner = MockRunner::new().with_success("rustc", "--version", "rustc");
        let detector = Detector::new(runner);

        let err = detector.version_at_least("rustc", "1.88.0").unwrap_err();
        assert!(matches!(err, ProbeError::VersionUnparseable { .. }));
    }

    #[test]
    fn missing_rustc_fails_version_gate_without_error() {
        let mut detector = Detector::new(MockRunner::new());

        let status = detector.detect(spec("rustc"));
        assert!(!status.installed());
        assert!(status.sub_checks().iter().all(|s| !s.passed));
    }

    #[test]
    fn detect_all_keeps_catalog_order_and_reports_progress() {
        let mut detector = Detector::new(healthy_rust());
        let mut seen = Vec::new();

        let statuses = detector.detect_all_with(catalog(), |spec| seen.push(spec.name));

        let names: Vec<_> = statuses.iter().map(ToolStatus::name).collect();
        assert_eq!(names, vec!["Git / Git LFS", "Rust", "Godot", "Zig", "Docker"]);
        assert_eq!(seen, names);
        assert!(statuses[1].is_ready());
        assert!(!statuses[0].installed());
    }
}
