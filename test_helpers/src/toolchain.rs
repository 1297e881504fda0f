//! Builders for toolchain records used by integration tests.
//!
//! # Examples
//!
//! ```
//! use crosstool_starlark_test_helpers::{feature, toolchain};
//!
//! let record = toolchain("k8-gcc", "k8", "gcc")
//!     .include_dirs(["/usr/include"])
//!     .feature(feature("opt", true))
//!     .build();
//! assert_eq!(record.features.len(), 1);
//! ```

use crosstool_starlark::ToolchainRecord;
use crosstool_starlark::model::{
    ActionConfig, ArtifactNamePattern, Feature, MakeVariable, ToolPath,
};

/// Fluent builder for [`ToolchainRecord`].
#[derive(Debug, Clone)]
#[must_use = "call `build` to obtain the record"]
pub struct ToolchainBuilder {
    record: ToolchainRecord,
}

/// Starts a record with the given identifier and key; other strings are
/// empty and lists are empty.
pub fn toolchain(id: &str, cpu: &str, compiler: &str) -> ToolchainBuilder {
    ToolchainBuilder {
        record: ToolchainRecord {
            toolchain_identifier: id.to_owned(),
            target_cpu: cpu.to_owned(),
            compiler: compiler.to_owned(),
            ..ToolchainRecord::default()
        },
    }
}

/// Starts a record whose every string field is suffixed with `id`, so that
/// each field differs between records with different ids.
pub fn simple_toolchain(id: &str) -> ToolchainBuilder {
    toolchain(&format!("id-{id}"), &format!("cpu-{id}"), &format!("compiler-{id}"))
        .systems(
            &format!("host-{id}"),
            &format!("target-{id}"),
            &format!("libc-{id}"),
        )
        .abi(&format!("version-{id}"), &format!("libc_version-{id}"))
}

/// Starts a record keyed by `cpu` and `compiler` whose remaining string
/// fields hold fixed placeholder values.
pub fn keyed_toolchain(id: &str, cpu: &str, compiler: &str) -> ToolchainBuilder {
    toolchain(id, cpu, compiler)
        .systems("host", "target", "libc")
        .abi("version", "libc_version")
}

/// Creates a feature with no flag or env sets.
#[must_use]
pub fn feature(name: &str, enabled: bool) -> Feature {
    Feature {
        name: name.to_owned(),
        enabled,
        ..Feature::default()
    }
}

/// Creates an action config whose config name equals its action name.
#[must_use]
pub fn action_config(action_name: &str, enabled: bool) -> ActionConfig {
    ActionConfig {
        config_name: action_name.to_owned(),
        action_name: action_name.to_owned(),
        enabled,
        ..ActionConfig::default()
    }
}

impl ToolchainBuilder {
    /// Sets the host and target system names and the libc.
    pub fn systems(mut self, host: &str, target: &str, libc: &str) -> Self {
        host.clone_into(&mut self.record.host_system_name);
        target.clone_into(&mut self.record.target_system_name);
        libc.clone_into(&mut self.record.target_libc);
        self
    }

    /// Sets the ABI and ABI libc versions.
    pub fn abi(mut self, version: &str, libc_version: &str) -> Self {
        version.clone_into(&mut self.record.abi_version);
        libc_version.clone_into(&mut self.record.abi_libc_version);
        self
    }

    /// Sets `builtin_sysroot`.
    pub fn sysroot(mut self, path: &str) -> Self {
        self.record.builtin_sysroot = Some(path.to_owned());
        self
    }

    /// Sets `cc_target_os`.
    pub fn target_os(mut self, os: &str) -> Self {
        self.record.cc_target_os = Some(os.to_owned());
        self
    }

    /// Replaces the builtin include directories.
    pub fn include_dirs<'s>(mut self, dirs: impl IntoIterator<Item = &'s str>) -> Self {
        self.record.cxx_builtin_include_directories =
            dirs.into_iter().map(str::to_owned).collect();
        self
    }

    /// Appends a make variable.
    pub fn make_variable(mut self, name: &str, value: &str) -> Self {
        self.record.make_variables.push(MakeVariable {
            name: name.to_owned(),
            value: value.to_owned(),
        });
        self
    }

    /// Appends a tool path.
    pub fn tool_path(mut self, name: &str, path: &str) -> Self {
        self.record.tool_paths.push(ToolPath {
            name: name.to_owned(),
            path: path.to_owned(),
        });
        self
    }

    /// Appends an artifact name pattern.
    pub fn artifact_pattern(mut self, category: &str, prefix: &str, extension: &str) -> Self {
        self.record.artifact_name_patterns.push(ArtifactNamePattern {
            category_name: category.to_owned(),
            prefix: prefix.to_owned(),
            extension: extension.to_owned(),
        });
        self
    }

    /// Appends a feature.
    pub fn feature(mut self, feature: Feature) -> Self {
        self.record.features.push(feature);
        self
    }

    /// Appends an action config.
    pub fn action_config(mut self, config: ActionConfig) -> Self {
        self.record.action_configs.push(config);
        self
    }

    /// Finishes the record.
    #[must_use]
    pub fn build(self) -> ToolchainRecord {
        self.record
    }
}
