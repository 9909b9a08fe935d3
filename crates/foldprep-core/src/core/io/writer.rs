use super::IoError;
use crate::core::models::job::{Af3Job, Cycles, FastaJob};
use std::fs;
use std::path::Path;
use tracing::info;

/// Default number of AlphaFold3 jobs bundled into one JSON file.
pub const DEFAULT_JOBS_PER_FILE: usize = 20;

/// Writes each cycle's AlphaFold3 jobs as JSON array files of at most
/// `jobs_per_file` jobs, named `{cycle}_set_{i}.json` under a per-cycle
/// subdirectory.
pub fn write_af3_cycles(
    cycles: &Cycles<Af3Job>,
    output_dir: &Path,
    jobs_per_file: usize,
) -> Result<(), IoError> {
    if !(1..=100).contains(&jobs_per_file) {
        return Err(IoError::JobsPerFile(jobs_per_file));
    }

    for (cycle, jobs) in cycles {
        let cycle_dir = output_dir.join(cycle);
        create_dir(&cycle_dir)?;

        for (i, job_set) in jobs.chunks(jobs_per_file).enumerate() {
            let path = cycle_dir.join(format!("{cycle}_set_{i}.json"));
            let content =
                serde_json::to_string_pretty(job_set).map_err(|e| IoError::Serialize {
                    path: path.to_string_lossy().to_string(),
                    source: e,
                })?;
            write_file(&path, &content)?;
            info!("{} job(s) written to {:?}", job_set.len(), path);
        }
    }

    info!("All job files written to {:?}", output_dir);
    Ok(())
}

/// Writes each job as one FASTA file, `{jobName}.fasta` under a per-cycle
/// subdirectory.
pub fn write_fasta_cycles(cycles: &Cycles<FastaJob>, output_dir: &Path) -> Result<(), IoError> {
    for (cycle, jobs) in cycles {
        let cycle_dir = output_dir.join(cycle);
        create_dir(&cycle_dir)?;

        for job in jobs {
            let path = cycle_dir.join(format!("{}.fasta", job.name));
            let mut content = String::new();
            for record in &job.records {
                content.push_str(&format!(">{}\n{}\n", record.header, record.sequence));
            }
            write_file(&path, &content)?;
            info!("Fasta file written to {:?}", path);
        }
    }

    info!("All job files written to {:?}", output_dir);
    Ok(())
}

fn create_dir(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path).map_err(|e| IoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(|e| IoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
