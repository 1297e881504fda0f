//! Command-line interface definitions for `crosstool-to-starlark`.

use camino::Utf8PathBuf;
use clap::Parser;
use crosstool_starlark::RenderOptions;

/// Parsed CLI arguments for `crosstool-to-starlark`.
#[derive(Debug, Parser)]
#[command(name = "crosstool-to-starlark")]
#[command(about = "Convert CROSSTOOL toolchain records into a cc_toolchain_config rule")]
#[command(version)]
pub struct Args {
    /// JSON document of the form `{ "toolchain": [...] }`.
    #[arg(long, value_name = "path")]
    pub input: Utf8PathBuf,
    /// File to write the rule to; standard output when omitted.
    #[arg(long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
    /// Name bound to the generated rule.
    #[arg(long, value_name = "name", default_value = "cc_toolchain_config")]
    pub rule_name: String,
    /// Log merge progress at debug level.
    #[arg(long = "verbose", short = 'v')]
    pub is_verbose: bool,
}

impl Args {
    /// Rendering options selected on the command line.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            rule_name: self.rule_name.clone(),
            ..RenderOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn rule_name_defaults_to_cc_toolchain_config() {
        let args = Args::try_parse_from(["crosstool-to-starlark", "--input", "in.json"])
            .expect("arguments should parse");

        assert_eq!(args.input.as_str(), "in.json");
        assert_eq!(args.output, None);
        assert!(!args.is_verbose);
        assert_eq!(args.render_options().rule_name, "cc_toolchain_config");
    }

    #[test]
    fn flags_map_into_render_options() {
        let args = Args::try_parse_from([
            "crosstool-to-starlark",
            "--input",
            "in.json",
            "--output",
            "out/BUILD.bzl",
            "--rule-name",
            "linux_config",
            "-v",
        ])
        .expect("arguments should parse");

        assert_eq!(args.output.as_deref().map(|path| path.as_str()), Some("out/BUILD.bzl"));
        assert!(args.is_verbose);
        assert_eq!(args.render_options().rule_name, "linux_config");
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["crosstool-to-starlark"]).is_err());
    }
}
