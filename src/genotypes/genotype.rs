use crate::genotypes::AlleleCode;
use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index};

/// A single genotype call: an ordered tuple of allele codes whose length is the ploidy of the
/// locus it was called at. The slot order is preserved as stored (it may carry phase information
/// from the source format), but frequency counting treats every slot independently.
///
/// A missing call is not a state of this type. Collections that admit missing data hold
/// `Option<Genotype<A>>` instead, so "no call" and "call" cannot be confused.
#[derive(Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Genotype<A>(Vec<A>);

impl<A: AlleleCode> Genotype<A> {
    /// Create a genotype from an ordered allele vector.
    ///
    /// # Panics
    /// - if the allele vector is empty, since a present call has at least one slot
    pub fn new(alleles: Vec<A>) -> Self {
        assert!(!alleles.is_empty());
        Self(alleles)
    }

    /// Convenience constructor for the common diploid case.
    pub fn diploid(first: A, second: A) -> Self {
        Self(vec![first, second])
    }

    /// The number of allele slots in this call.
    pub fn ploidy(&self) -> usize {
        self.0.len()
    }

    /// The ordered allele slots of this call.
    pub fn alleles(&self) -> &[A] {
        &self.0
    }
}

/// Decay into the underlying allele slice
impl<A: AlleleCode> Deref for Genotype<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<A: AlleleCode> Index<usize> for Genotype<A> {
    type Output = A;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Render the call in the conventional slash-separated notation, e.g. `120/124`.
impl<A: AlleleCode> Display for Genotype<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut slots = self.0.iter();
        if let Some(first) = slots.next() {
            write!(f, "{}", first)?;
        }
        for allele in slots {
            write!(f, "/{}", allele)?;
        }
        Ok(())
    }
}
