use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoachError, Result};
use crate::resolver::CandidateSet;

// ---------------------------------------------------------------------------
// Picker
// ---------------------------------------------------------------------------

/// Source of uniformly distributed indices.
pub trait Picker {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`Picker`] backed by any `rand` generator.
pub struct RngPicker<R>(pub R);

impl RngPicker<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Picker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Choose the next holder from `candidates`.
///
/// With more than one candidate the requester is excluded. A single candidate
/// is returned as-is, even when it is the requester.
pub fn select<P>(candidates: &CandidateSet, requester: &str, picker: &mut P) -> Result<String>
where
    P: Picker + ?Sized,
{
    if candidates.is_empty() {
        return Err(CoachError::NoCandidates);
    }

    let pool: Vec<&String> = if candidates.len() > 1 {
        candidates.iter().filter(|c| c.as_str() != requester).collect()
    } else {
        candidates.iter().collect()
    };

    let index = picker.pick(pool.len());
    pool.get(index)
        .map(|c| c.to_string())
        .ok_or(CoachError::NoCandidates)
}
