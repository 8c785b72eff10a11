use crate::genotypes::{AlleleCode, Genotype};
use std::ops::{Deref, Index};

/// All genotype calls for a single locus across an ordered set of samples. Entries are `None`
/// where the sample has no call at the locus, so the array length always equals the sample count
/// of the group it was taken from, regardless of missing data.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenotypeArray<A>(Vec<Option<Genotype<A>>>);

impl<A: AlleleCode> GenotypeArray<A> {
    /// Create a new empty array.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an array from a vector of calls, where `None` marks a missing call.
    pub fn from_vec(calls: Vec<Option<Genotype<A>>>) -> Self {
        Self(calls)
    }

    /// Append a call (or a missing entry) for the next sample.
    pub fn push(&mut self, call: Option<Genotype<A>>) {
        self.0.push(call);
    }

    /// Iterate over every allele slot of every non-missing call, in array order. Missing entries
    /// contribute nothing.
    pub fn alleles(&self) -> impl Iterator<Item = A> + '_ {
        self.0
            .iter()
            .flatten()
            .flat_map(|genotype| genotype.iter().copied())
    }

    /// The number of missing entries in the array.
    pub fn missing_count(&self) -> usize {
        self.0.iter().filter(|call| call.is_none()).count()
    }

    /// Whether the array holds no call at all, either because it is empty or because every entry
    /// is missing.
    pub fn is_all_missing(&self) -> bool {
        self.0.iter().all(|call| call.is_none())
    }
}

/// Decay into the underlying call vector
impl<A: AlleleCode> Deref for GenotypeArray<A> {
    type Target = [Option<Genotype<A>>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<A: AlleleCode> Index<usize> for GenotypeArray<A> {
    type Output = Option<Genotype<A>>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<A: AlleleCode> FromIterator<Option<Genotype<A>>> for GenotypeArray<A> {
    fn from_iter<I: IntoIterator<Item = Option<Genotype<A>>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<A: AlleleCode> IntoIterator for GenotypeArray<A> {
    type Item = Option<Genotype<A>>;
    type IntoIter = <Vec<Self::Item> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
