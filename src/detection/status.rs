//! Detection results.
//!
//! A [`ToolStatus`] is built once per toolchain at startup and never
//! changes afterwards; the menu only reads it.

use crate::config::{Tier, ToolSpec};

/// Outcome of one sub-check nested under a toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCheckStatus {
    /// Label shown next to the glyph (e.g. "Cargo").
    pub label: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Minimum version required, for version-gated checks.
    pub minimum: Option<String>,
}

impl SubCheckStatus {
    /// A presence check.
    pub fn presence(label: impl Into<String>, passed: bool) -> Self {
        Self {
            label: label.into(),
            passed,
            minimum: None,
        }
    }

    /// A minimum-version check.
    pub fn min_version(label: impl Into<String>, passed: bool, minimum: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            passed,
            minimum: Some(minimum.into()),
        }
    }
}

/// Detection result for one monitored toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    name: String,
    label: String,
    tier: Tier,
    description: String,
    installed: bool,
    missing_is_warning: bool,
    sub_checks: Vec<SubCheckStatus>,
}

impl ToolStatus {
    /// Freeze the outcome of probing `spec`.
    pub fn new(spec: &ToolSpec, installed: bool, sub_checks: Vec<SubCheckStatus>) -> Self {
        Self {
            name: spec.name.to_string(),
            label: spec.label.to_string(),
            tier: spec.tier,
            description: spec.description.to_string(),
            installed,
            missing_is_warning: spec.missing_is_warning,
            sub_checks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the primary executable answered a version probe.
    pub fn installed(&self) -> bool {
        self.installed
    }

    /// Whether a missing executable is only worth a warning.
    pub fn missing_is_warning(&self) -> bool {
        self.missing_is_warning
    }

    /// Sub-check outcomes, in catalog order.
    pub fn sub_checks(&self) -> &[SubCheckStatus] {
        &self.sub_checks
    }

    /// Installed and every sub-check passed.
    pub fn is_ready(&self) -> bool {
        self.installed && self.sub_checks.iter().all(|s| s.passed)
    }
}
