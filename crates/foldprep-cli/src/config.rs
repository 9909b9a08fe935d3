mod defaults;
mod file;

use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use file::FileConfig;
use std::path::PathBuf;

/// Final output configuration: CLI arguments win over the config file, which
/// wins over the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub jobs_per_file: usize,
}

pub fn build_output_config(args: &GenerateArgs) -> Result<OutputConfig> {
    let defaults = DefaultsConfig::default();

    let mut file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    let output_file = file_config.output.take().unwrap_or_default();

    let dir = args
        .output
        .clone()
        .or(output_file.dir)
        .unwrap_or(defaults.output_dir);
    let jobs_per_file = args
        .jobs_per_file
        .or(output_file.jobs_per_file)
        .unwrap_or(defaults.jobs_per_file);

    if !(1..=100).contains(&jobs_per_file) {
        return Err(CliError::Config(format!(
            "`output.jobs-per-file` must be within 1 and 100, got {}",
            jobs_per_file
        )));
    }

    Ok(OutputConfig { dir, jobs_per_file })
}
