use rand::Rng;
use thiserror::Error;
use tracing::{instrument, trace};

#[derive(Debug, Error, PartialEq)]
pub enum SamplingError {
    #[error("Invalid frequency: {0}. Frequency must be between 0.0 and 1.0")]
    InvalidFrequency(f64),
    #[error("Weights list is empty, cannot perform sampling")]
    EmptyWeights,
}

/// Walks `weights` in order and returns the index of the first non-zero weight at which the
/// running total reaches `r`.
///
/// When rounding leaves the total short of `r`, the last index is returned.
pub fn cumulative_index(weights: &[f64], r: f64) -> Result<usize, SamplingError> {
    if weights.is_empty() {
        return Err(SamplingError::EmptyWeights);
    }
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        if cumulative >= r {
            return Ok(i);
        }
    }
    Ok(weights.len() - 1)
}

/// Draws `r` uniformly from `[0, 1)` and resolves it with [`cumulative_index`].
pub fn cumulative_sample(weights: &[f64], rng: &mut impl Rng) -> Result<usize, SamplingError> {
    let r: f64 = rng.r#gen();
    trace!(r, "cumulative draw");
    cumulative_index(weights, r)
}

/// Accepts frequencies in `[0, 1]`; anything else, NaN included, is rejected.
pub fn validate_frequency(frequency: f64) -> Result<(), SamplingError> {
    if (0.0..=1.0).contains(&frequency) {
        Ok(())
    } else {
        Err(SamplingError::InvalidFrequency(frequency))
    }
}

/// Draws `floor(frequency * len)` items from `candidates` with replacement.
#[instrument(
    level = "trace",
    skip_all,
    fields(frequency = frequency, candidates = candidates.len())
)]
pub fn sample_with_replacement<T: Copy>(
    candidates: &[T],
    frequency: f64,
    rng: &mut impl Rng,
) -> Result<Vec<T>, SamplingError> {
    validate_frequency(frequency)?;
    let count = (frequency * candidates.len() as f64).floor() as usize;
    Ok((0..count)
        .map(|_| candidates[rng.gen_range(0..candidates.len())])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cumulative_index_returns_first_crossing() {
        let weights = [0.25, 0.25, 0.5];
        assert_eq!(cumulative_index(&weights, 0.0), Ok(0));
        assert_eq!(cumulative_index(&weights, 0.25), Ok(0));
        assert_eq!(cumulative_index(&weights, 0.3), Ok(1));
        assert_eq!(cumulative_index(&weights, 0.75), Ok(2));
        assert_eq!(cumulative_index(&weights, 0.99), Ok(2));
    }

    #[test]
    fn cumulative_index_skips_zero_weights() {
        let weights = [0.0, 0.0, 1.0, 0.0];
        assert_eq!(cumulative_index(&weights, 0.0), Ok(2));
        assert_eq!(cumulative_index(&weights, 0.5), Ok(2));
    }

    #[test]
    fn cumulative_index_falls_back_to_last_index_when_mass_is_short() {
        let weights = [0.3, 0.3, 0.3];
        assert_eq!(cumulative_index(&weights, 0.95), Ok(2));
        assert_eq!(cumulative_index(&[0.0, 0.0], 0.1), Ok(1));
    }

    #[test]
    fn cumulative_index_rejects_empty_weights() {
        assert_eq!(cumulative_index(&[], 0.5), Err(SamplingError::EmptyWeights));
    }

    #[test]
    fn cumulative_sample_follows_distribution() {
        let mut rng = StdRng::seed_from_u64(3);
        let weights = [0.0, 1.0, 0.0];
        for _ in 0..50 {
            assert_eq!(cumulative_sample(&weights, &mut rng), Ok(1));
        }
    }

    #[test]
    fn sample_with_replacement_draws_floor_of_frequency_times_len() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates: Vec<usize> = (0..7).collect();
        for (frequency, expected) in [(0.0, 0), (0.1, 0), (0.15, 1), (0.5, 3), (1.0, 7)] {
            let drawn = sample_with_replacement(&candidates, frequency, &mut rng).unwrap();
            assert_eq!(drawn.len(), expected, "frequency {}", frequency);
            assert!(drawn.iter().all(|d| candidates.contains(d)));
        }
    }

    #[test]
    fn sample_with_replacement_allows_duplicates() {
        let mut rng = StdRng::seed_from_u64(5);
        let drawn = sample_with_replacement(&[42usize], 1.0, &mut rng).unwrap();
        assert_eq!(drawn, vec![42]);

        let candidates = [1usize, 2];
        let drawn = sample_with_replacement(&candidates, 1.0, &mut rng).unwrap();
        assert_eq!(drawn.len(), 2);
    }

    #[test]
    fn sample_with_replacement_rejects_out_of_range_frequency() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            sample_with_replacement(&[1usize, 2], 1.5, &mut rng),
            Err(SamplingError::InvalidFrequency(1.5))
        );
        assert!(sample_with_replacement(&[1usize], -0.1, &mut rng).is_err());
        assert!(sample_with_replacement(&[1usize], f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn sample_with_replacement_handles_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = sample_with_replacement::<usize>(&[], 1.0, &mut rng).unwrap();
        assert!(drawn.is_empty());
    }
}
