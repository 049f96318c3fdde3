//! The catalog of monitored toolchains.
//!
//! Order, tiers and sub-check granularity are data. Adding a toolchain or
//! a sub-check means adding an entry here; nothing else in the crate is
//! keyed on a specific tool.

/// Minimum `rustc` version the Reia workspace builds with.
pub const MIN_RUST_VERSION: &str = "1.88.0";

/// Whether a toolchain is needed to work on Reia at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Needed for everyday development.
    Required,
    /// Only needed for some parts of the project.
    Optional,
}

impl Tier {
    /// Lowercase label shown in front of the status glyphs.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Required => "required",
            Tier::Optional => "optional",
        }
    }
}

/// A secondary check nested under a toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCheckSpec {
    /// Passes when the command answers a version probe.
    Command {
        label: &'static str,
        command: &'static str,
    },
    /// Passes when the command reports at least `minimum`.
    MinVersion {
        label: &'static str,
        command: &'static str,
        minimum: &'static str,
    },
}

impl SubCheckSpec {
    /// Label shown next to the sub-check glyph.
    pub fn label(&self) -> &'static str {
        match self {
            SubCheckSpec::Command { label, .. } | SubCheckSpec::MinVersion { label, .. } => label,
        }
    }
}

/// Static description of one monitored toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Name used in the detail view ("You chose Rust!").
    pub name: &'static str,
    /// Label used for the checkbox row in the listing.
    pub label: &'static str,
    pub tier: Tier,
    /// One-line explanation shown under the status line.
    pub description: &'static str,
    /// Executable probed to decide whether the toolchain is installed.
    pub command: &'static str,
    /// Show a missing executable as a warning rather than a failure.
    pub missing_is_warning: bool,
    pub sub_checks: &'static [SubCheckSpec],
}

const TOOL_CATALOG: &[ToolSpec] = &[
    ToolSpec {
        name: "Git / Git LFS",
        label: "Git / Git LFS",
        tier: Tier::Required,
        description: "Used for version control and large file storage",
        command: "git",
        missing_is_warning: false,
        sub_checks: &[SubCheckSpec::Command {
            label: "LFS",
            command: "git-lfs",
        }],
    },
    ToolSpec {
        name: "Rust",
        label: "Rust",
        tier: Tier::Required,
        description: "Used for building most of the backend and logic for Reia",
        command: "rustc",
        missing_is_warning: false,
        sub_checks: &[
            SubCheckSpec::Command {
                label: "Cargo",
                command: "cargo",
            },
            SubCheckSpec::Command {
                label: "Rustup",
                command: "rustup",
            },
            SubCheckSpec::MinVersion {
                label: "Rust version",
                command: "rustc",
                minimum: MIN_RUST_VERSION,
            },
        ],
    },
    ToolSpec {
        name: "Godot",
        label: "Godot (wip)",
        tier: Tier::Optional,
        description: "Godot CLI -- you may have the engine but not the CLI",
        command: "godot",
        missing_is_warning: true,
        sub_checks: &[],
    },
    ToolSpec {
        name: "Zig",
        label: "Zig (wip)",
        tier: Tier::Optional,
        description: "Zig is used for some low-level tasks but isn't used yet",
        command: "zig",
        missing_is_warning: false,
        sub_checks: &[],
    },
    ToolSpec {
        name: "Docker",
        label: "Docker (wip)",
        tier: Tier::Optional,
        description: "Used for containerization and deployment of Reia services",
        command: "docker",
        missing_is_warning: false,
        sub_checks: &[],
    },
];

/// The monitored toolchains, in display order.
pub fn catalog() -> &'static [ToolSpec] {
    TOOL_CATALOG
}
