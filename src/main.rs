use std::num::NonZeroUsize;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

mod error;
mod generator;
mod output;
mod template;
mod vocabulary;

use crate::vocabulary::Vocabulary;

/// Generate batches of fitness model image prompts from fixed word lists.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Number of standard prompts
    #[arg(long, env = "GYMPROMPTS_STANDARD_COUNT", default_value_t = 700)]
    standard_count: usize,
    /// Number of extended prompts, which add an explicit descriptor
    #[arg(long, env = "GYMPROMPTS_EXTENDED_COUNT", default_value_t = 300)]
    extended_count: usize,
    /// Directory the three prompt files are written to
    #[arg(long, env = "GYMPROMPTS_OUTPUT_DIR", default_value = "prompts")]
    output_dir: PathBuf,
    /// Seed for a reproducible run; random if omitted
    #[arg(long, env = "GYMPROMPTS_SEED")]
    seed: Option<u64>,
    /// JSON file mapping category names to word lists, replacing the built-in lists it names
    #[arg(long, env = "GYMPROMPTS_VOCABULARY")]
    vocabulary: Option<PathBuf>,
    /// Number of independent random streams to generate with
    #[arg(long, env = "GYMPROMPTS_WORKERS", default_value = "1")]
    workers: NonZeroUsize,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    info!(?cli);

    match run(cli) {
        Ok(summary) => {
            print!("{summary}");
            Ok(())
        }
        Err(error) => {
            let stage = if error.is_configuration() {
                "invalid configuration"
            } else {
                "writing output failed"
            };
            Err(anyhow::Error::new(error).context(stage))
        }
    }
}

#[instrument(skip_all)]
fn run(cli: Cli) -> error::Result<output::Summary> {
    let Cli {
        standard_count,
        extended_count,
        output_dir,
        seed,
        vocabulary,
        workers,
    } = cli;
    let vocabulary = load_vocabulary(vocabulary.as_deref())?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "seeding");
    let mut rng = StdRng::seed_from_u64(seed);
    let batch = generator::generate_parallel(
        standard_count,
        extended_count,
        workers,
        &vocabulary,
        &mut rng,
    )?;
    output::write(&output_dir, &batch)
}

fn load_vocabulary(path: Option<&Path>) -> error::Result<Vocabulary> {
    let builtin = Vocabulary::builtin();
    match path {
        Some(path) => Ok(builtin.overlay(Vocabulary::from_json_file(path)?)),
        None => Ok(builtin),
    }
}
