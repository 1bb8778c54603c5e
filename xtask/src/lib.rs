use std::env;
use std::process::Command;

use anyhow::{bail, Result};

/// Cargo feature selection shared by the build, test and bench commands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildConfig {
    pub features: Vec<String>,
    pub no_default_features: bool,
}

impl BuildConfig {
    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }

    fn apply(&self, cmd: &mut Command) {
        if self.no_default_features {
            cmd.arg("--no-default-features");
        }
        if let Some(f) = self.features_arg() {
            cmd.arg("--features").arg(f);
        }
    }
}

/// Read the configuration from `SCIFFT_FEATURES`.
pub fn detect_config() -> BuildConfig {
    let extra = env::var("SCIFFT_FEATURES").unwrap_or_default();
    compute_config(&extra)
}

/// Build a [`BuildConfig`] from a whitespace separated feature list.
///
/// The pseudo-feature `no-std` turns off default features instead of being
/// passed through to cargo.
pub fn compute_config(extra: &str) -> BuildConfig {
    let mut cfg = BuildConfig::default();
    for feat in extra.split_whitespace() {
        if feat == "no-std" {
            cfg.no_default_features = true;
        } else if !cfg.features.iter().any(|f| f == feat) {
            cfg.features.push(feat.to_string());
        }
    }
    cfg
}

pub fn build_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("build");
    cfg.apply(&mut cmd);
    cmd
}

pub fn test_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");
    cfg.apply(&mut cmd);
    cmd
}

/// `cargo test` with the proptest suites switched on.
pub fn property_test_command(cfg: &BuildConfig) -> Command {
    let mut with_props = cfg.clone();
    if !with_props.features.iter().any(|f| f == "internal-tests") {
        with_props.features.push("internal-tests".into());
    }
    test_command(&with_props)
}

/// Library-only build without `std`.
pub fn no_std_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "--lib", "--no-default-features"]);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command(cfg: &BuildConfig) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", "bench_fft"]);
    cfg.apply(&mut cmd);
    cmd
}

pub fn demo_command(name: &str) -> Result<Command> {
    let mut cmd = Command::new("cargo");
    match name {
        "basic_usage" => {
            cmd.args(["run", "--example", "basic_usage"]);
        }
        "verbose_logging" => {
            cmd.env("RUST_LOG", "debug").args([
                "run",
                "--example",
                "verbose_logging",
                "--features",
                "verbose-logging",
            ]);
        }
        other => bail!("unknown demo `{}`", other),
    }
    Ok(cmd)
}

/// Run each command in order, stopping at the first failure.
pub fn run_all(commands: impl IntoIterator<Item = Command>) -> Result<()> {
    for mut cmd in commands {
        let status = cmd.status()?;
        if !status.success() {
            bail!("{:?} exited with {}", cmd.get_program(), status);
        }
    }
    Ok(())
}
