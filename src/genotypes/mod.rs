use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

mod array;
mod genotype;

pub use array::GenotypeArray;
pub use genotype::Genotype;

/// An integer allele code. Datasets encode alleles with different integer widths (microsatellite
/// data commonly uses 8-bit codes, SNP panels with many alternate alleles may need 16-bit codes),
/// so the engine is generic over the code type instead of fixing one width.
/// Codes carry no meaning beyond equality; the `Ord` bound only exists so distinct alleles can be
/// reported in a stable sorted order.
pub trait AlleleCode:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr + Send + Sync + 'static
{
}

impl AlleleCode for i8 {}
impl AlleleCode for i16 {}
impl AlleleCode for i32 {}
impl AlleleCode for u8 {}
impl AlleleCode for u16 {}
