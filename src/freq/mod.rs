use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::ops::Deref;
use twox_hash::XxHash64;

mod aggregate;
mod calculator;

pub use aggregate::{average_frequencies, average_frequency_pair};

/// Mapping from allele code to its relative frequency. When the source contained at least one
/// call, the values sum to 1.0 within floating tolerance; a source without any call produces an
/// empty map. The fixed-seed hasher keeps iteration order reproducible between runs on the same
/// input.
pub type FrequencyMap<A> = HashMap<A, f64, BuildHasherDefault<XxHash64>>;

/// Mapping from a distinct genotype call to its relative frequency among the non-missing calls
/// of a genotype array.
pub type GenotypeFrequencyMap<A> = HashMap<crate::genotypes::Genotype<A>, f64, BuildHasherDefault<XxHash64>>;

/// An order-free vector of allele frequencies. The values are the same proportions a
/// [`FrequencyMap`] would hold, without the allele identities; entries appear in the order the
/// alleles were first encountered, which callers must not assign meaning to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrequencyVector(Vec<f64>);

impl FrequencyVector {
    /// Create a frequency vector from raw proportions.
    pub fn from_vec(frequencies: Vec<f64>) -> Self {
        Self(frequencies)
    }

    /// Sum of all entries. For a vector produced by the projector this is 1.0 within floating
    /// tolerance.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Decay into the underlying frequency slice
impl Deref for FrequencyVector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
