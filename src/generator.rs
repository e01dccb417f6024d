use std::num::NonZeroUsize;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::info;
use tracing::instrument;

use crate::error::Result;
use crate::template::Template;
use crate::vocabulary::Category;
use crate::vocabulary::Vocabulary;

/// The lines produced by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub standard: Vec<String>,
    pub extended: Vec<String>,
}

impl Batch {
    /// Standard lines followed by extended lines.
    pub fn combined(&self) -> impl Iterator<Item = &str> {
        self.standard
            .iter()
            .chain(&self.extended)
            .map(String::as_str)
    }
}

/// Categories that must be present for the given counts.
pub fn required_categories(standard_count: usize, extended_count: usize) -> Vec<Category> {
    let mut required = Vec::new();
    if standard_count > 0 || extended_count > 0 {
        required.extend(Category::BASE);
    }
    if extended_count > 0 {
        required.push(Category::ExplicitDescriptor);
    }
    required
}

/// Generate `standard_count` standard lines, then `extended_count` extended lines.
#[instrument(skip(vocabulary, rng))]
pub fn generate(
    standard_count: usize,
    extended_count: usize,
    vocabulary: &Vocabulary,
    rng: &mut impl Rng,
) -> Result<Batch> {
    vocabulary.validate(required_categories(standard_count, extended_count))?;
    let standard = lines(Template::Standard, standard_count, vocabulary, rng)?;
    let extended = lines(Template::Extended, extended_count, vocabulary, rng)?;
    info!(standard = standard.len(), extended = extended.len(), "generated");
    Ok(Batch { standard, extended })
}

/// Like [`generate`], but spreads each template's lines over `workers` independent streams.
///
/// Each worker gets a contiguous chunk and its own `StdRng` seeded from `rng` in chunk order,
/// so the result is reproducible for a given seed and worker count.
#[instrument(skip(vocabulary, rng))]
pub fn generate_parallel(
    standard_count: usize,
    extended_count: usize,
    workers: NonZeroUsize,
    vocabulary: &Vocabulary,
    rng: &mut impl Rng,
) -> Result<Batch> {
    if workers.get() == 1 {
        return generate(standard_count, extended_count, vocabulary, rng);
    }
    vocabulary.validate(required_categories(standard_count, extended_count))?;
    let standard = par_lines(Template::Standard, standard_count, workers, vocabulary, rng)?;
    let extended = par_lines(Template::Extended, extended_count, workers, vocabulary, rng)?;
    info!(standard = standard.len(), extended = extended.len(), "generated");
    Ok(Batch { standard, extended })
}

fn lines(
    template: Template,
    count: usize,
    vocabulary: &Vocabulary,
    rng: &mut impl Rng,
) -> Result<Vec<String>> {
    (0..count).map(|_| template.rand(rng, vocabulary)).collect()
}

fn par_lines(
    template: Template,
    count: usize,
    workers: NonZeroUsize,
    vocabulary: &Vocabulary,
    rng: &mut impl Rng,
) -> Result<Vec<String>> {
    let chunks: Vec<(usize, StdRng)> = chunk_sizes(count, workers)
        .map(|size| (size, StdRng::seed_from_u64(rng.random())))
        .collect();
    chunks
        .into_par_iter()
        .map(|(size, mut rng)| lines(template, size, vocabulary, &mut rng))
        .collect::<Result<Vec<_>>>()
        .map(|chunks| chunks.concat())
}

/// Split `count` into `workers` sizes differing by at most one, larger first.
fn chunk_sizes(count: usize, workers: NonZeroUsize) -> impl Iterator<Item = usize> {
    let workers = workers.get();
    let base = count / workers;
    let extra = count % workers;
    (0..workers).map(move |i| base + usize::from(i < extra))
}
