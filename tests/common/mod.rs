use popfreq::genotypes::Genotype;
use popfreq::table::{GenotypeTable, GenotypeTableBuilder};

/// A small two-population microsatellite dataset used across the integration tests.
///
/// Locus `fca8`: e1 = 135/135, e2 = 135/143, w1 = 143/143, w2 = missing.
/// Locus `fca23`: e1 = 200/202, every other call missing (so the `west` group has no call at
/// all for it).
#[allow(dead_code)]
pub fn two_population_table() -> GenotypeTable<u16> {
    let mut builder = GenotypeTableBuilder::new();

    builder.add_row("e1", "east", "fca8", Some(Genotype::diploid(135, 135)));
    builder.add_row("e2", "east", "fca8", Some(Genotype::diploid(135, 143)));
    builder.add_row("w1", "west", "fca8", Some(Genotype::diploid(143, 143)));
    builder.add_row("w2", "west", "fca8", None);

    builder.add_row("e1", "east", "fca23", Some(Genotype::diploid(200, 202)));
    builder.add_row("e2", "east", "fca23", None);
    builder.add_row("w1", "west", "fca23", None);
    builder.add_row("w2", "west", "fca23", None);

    builder.finalize()
}
