use std::fmt::{Display, Formatter};

mod builder;
mod data;

pub use builder::GenotypeTableBuilder;
pub use data::{GenotypeRow, GenotypeTable};

/// An index into the table's locus name list. The newtype ensures locus indices aren't mixed up
/// with population or sample indices.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct LocusId(pub(crate) u32);

impl LocusId {
    /// Create a new locus id from a usize.
    pub(crate) fn from_usize(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the underlying index value of the locus id.
    pub fn unwrap(&self) -> u32 {
        self.0
    }
}

impl Display for LocusId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// An index into the table's population name list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct PopId(pub(crate) u32);

impl PopId {
    pub(crate) fn from_usize(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the underlying index value of the population id.
    pub fn unwrap(&self) -> u32 {
        self.0
    }
}

impl Display for PopId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// An index into the table's sample name list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct SampleId(pub(crate) u32);

impl SampleId {
    pub(crate) fn from_usize(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the underlying index value of the sample id.
    pub fn unwrap(&self) -> u32 {
        self.0
    }
}

impl Display for SampleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
