use foldprep::core::io::writer::DEFAULT_JOBS_PER_FILE;
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub output_dir: PathBuf,
    pub jobs_per_file: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./output/af_input"),
            jobs_per_file: DEFAULT_JOBS_PER_FILE,
        }
    }
}
