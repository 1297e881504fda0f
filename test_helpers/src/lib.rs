//! Test helpers shared across crates.
//!
//! Provides builders for toolchain records, golden file access and text
//! comparison helpers for generated Starlark.

pub mod golden;
pub mod text;
pub mod toolchain;

pub use toolchain::{
    ToolchainBuilder, action_config, feature, keyed_toolchain, simple_toolchain, toolchain,
};
