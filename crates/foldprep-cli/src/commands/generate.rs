use super::load_inputs;
use crate::cli::{Format, GenerateArgs};
use crate::config;
use crate::error::Result;
use foldprep::core::io::writer;
use foldprep::workflows;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    let output = config::build_output_config(&args)?;
    let inputs = load_inputs(&args.inputs)?;
    let catalogs = inputs.catalogs();

    let job_count = match args.format {
        Format::Af3 => {
            let mut rng = match args.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let cycles = workflows::alphafold3::build_job_cycles(&inputs.spec, &catalogs, &mut rng)?;
            writer::write_af3_cycles(&cycles, &output.dir, output.jobs_per_file)?;
            cycles.iter().map(|(_, jobs)| jobs.len()).sum::<usize>()
        }
        Format::Af2 => {
            let cycles = workflows::alphafold2::build_job_cycles(&inputs.spec, &catalogs)?;
            writer::write_fasta_cycles(&cycles, &output.dir)?;
            cycles.iter().map(|(_, jobs)| jobs.len()).sum::<usize>()
        }
        Format::Colabfold => {
            let cycles = workflows::colabfold::build_job_cycles(&inputs.spec, &catalogs)?;
            writer::write_fasta_cycles(&cycles, &output.dir)?;
            cycles.iter().map(|(_, jobs)| jobs.len()).sum::<usize>()
        }
    };

    info!("Wrote {} job(s) under {:?}", job_count, output.dir);
    println!(
        "✓ {} job(s) written to: {}",
        job_count,
        output.dir.display()
    );

    Ok(())
}
