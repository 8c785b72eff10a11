use crate::freq::FrequencyMap;
use crate::genotypes::{AlleleCode, Genotype, GenotypeArray};
use crate::table::{LocusId, PopId, SampleId};
use indexset::BTreeSet;
use rayon::iter::ParallelIterator;
use rayon::prelude::IntoParallelRefIterator;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use twox_hash::XxHash64;

/// The atomic unit of a [`GenotypeTable`]: one call (or missing call) of one sample at one locus,
/// tagged with the population the sample belongs to. Identifiers are interned indices into the
/// table's name lists.
#[derive(Clone, Debug)]
pub struct GenotypeRow<A: AlleleCode> {
    pub(crate) locus: LocusId,
    pub(crate) population: PopId,
    pub(crate) sample: SampleId,
    pub(crate) genotype: Option<Genotype<A>>,
}

impl<A: AlleleCode> GenotypeRow<A> {
    pub fn locus(&self) -> LocusId {
        self.locus
    }

    pub fn population(&self) -> PopId {
        self.population
    }

    pub fn sample(&self) -> SampleId {
        self.sample
    }

    /// The call of this row, or `None` for a missing call.
    pub fn genotype(&self) -> Option<&Genotype<A>> {
        self.genotype.as_ref()
    }
}

/// A row-oriented genotype dataset: one row per (sample, locus) pair, in the order the rows were
/// added. The table is the single source of truth for a loaded dataset. It is built once by a
/// [`super::GenotypeTableBuilder`] (normally fed by one of the [`crate::io`] readers) and
/// read-only afterwards; all grouping produces views over the stored rows, never copies that
/// could drift from the source.
pub struct GenotypeTable<A: AlleleCode> {
    rows: Vec<GenotypeRow<A>>,
    locus_names: Vec<String>,
    locus_index: HashMap<String, LocusId, BuildHasherDefault<XxHash64>>,
    population_names: Vec<String>,
    sample_names: Vec<String>,
    // row indices per locus, preserving row order within the group
    locus_rows: Vec<Vec<u32>>,
    // ploidy per locus, None while no call has been seen for the locus
    ploidies: Vec<Option<usize>>,
    // distinct alleles observed per locus, in sorted order
    alleles: Vec<BTreeSet<A>>,
}

impl<A: AlleleCode> GenotypeTable<A> {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        rows: Vec<GenotypeRow<A>>,
        locus_names: Vec<String>,
        locus_index: HashMap<String, LocusId, BuildHasherDefault<XxHash64>>,
        population_names: Vec<String>,
        sample_names: Vec<String>,
        locus_rows: Vec<Vec<u32>>,
        ploidies: Vec<Option<usize>>,
        alleles: Vec<BTreeSet<A>>,
    ) -> Self {
        Self {
            rows,
            locus_names,
            locus_index,
            population_names,
            sample_names,
            locus_rows,
            ploidies,
            alleles,
        }
    }

    /// The number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate through all rows in insertion order.
    pub fn iter<'s>(&'s self) -> impl Iterator<Item = &'s GenotypeRow<A>> + ExactSizeIterator + 's {
        self.rows.iter()
    }

    /// Locus names in first-appearance order.
    pub fn loci(&self) -> &[String] {
        &self.locus_names
    }

    /// Population names in first-appearance order.
    pub fn populations(&self) -> &[String] {
        &self.population_names
    }

    /// Sample names in first-appearance order.
    pub fn samples(&self) -> &[String] {
        &self.sample_names
    }

    /// Resolve a locus name to its interned id.
    pub fn locus_id(&self, locus: &str) -> Option<LocusId> {
        self.locus_index.get(locus).copied()
    }

    pub fn locus_name(&self, locus: LocusId) -> &str {
        &self.locus_names[locus.0 as usize]
    }

    pub fn population_name(&self, population: PopId) -> &str {
        &self.population_names[population.0 as usize]
    }

    pub fn sample_name(&self, sample: SampleId) -> &str {
        &self.sample_names[sample.0 as usize]
    }

    /// The ploidy of a locus, learned from its first non-missing call. `None` if the locus is
    /// unknown or has no call at all.
    pub fn ploidy(&self, locus: &str) -> Option<usize> {
        self.locus_id(locus)
            .and_then(|id| self.ploidies[id.0 as usize])
    }

    /// The distinct alleles observed at a locus, in sorted order. `None` for an unknown locus; a
    /// locus without any call yields an empty vector.
    pub fn alleles_at(&self, locus: &str) -> Option<Vec<A>> {
        self.locus_id(locus)
            .map(|id| self.alleles[id.0 as usize].iter().copied().collect())
    }

    /// The number of missing calls at a locus. `None` for an unknown locus.
    pub fn missing_count(&self, locus: &str) -> Option<usize> {
        self.locus_id(locus).map(|id| {
            self.rows_of(id)
                .filter(|row| row.genotype.is_none())
                .count()
        })
    }

    /// Iterate through the rows of one locus group, preserving row order. `None` for an unknown
    /// locus.
    pub fn locus_rows<'s>(
        &'s self,
        locus: &str,
    ) -> Option<impl Iterator<Item = &'s GenotypeRow<A>> + ExactSizeIterator + 's> {
        self.locus_id(locus).map(|id| self.rows_of(id))
    }

    fn rows_of<'s>(
        &'s self,
        locus: LocusId,
    ) -> impl Iterator<Item = &'s GenotypeRow<A>> + ExactSizeIterator + 's {
        self.locus_rows[locus.0 as usize]
            .iter()
            .map(|&row| &self.rows[row as usize])
    }

    /// Materialize the genotype array of one locus, pooled across all populations. The array is a
    /// short-lived value for the frequency calculators; the table itself stays untouched.
    pub fn genotype_array(&self, locus: &str) -> Option<GenotypeArray<A>> {
        self.locus_id(locus)
            .map(|id| self.rows_of(id).map(|row| row.genotype.clone()).collect())
    }

    /// Materialize one genotype array per population at a locus, in first-appearance order of the
    /// populations within the locus group. Row order is preserved within each array.
    pub fn genotype_arrays_by_population(
        &self,
        locus: &str,
    ) -> Option<Vec<(&str, GenotypeArray<A>)>> {
        let id = self.locus_id(locus)?;
        let mut groups: Vec<(PopId, GenotypeArray<A>)> = Vec::new();
        for row in self.rows_of(id) {
            match groups.iter_mut().find(|(pop, _)| *pop == row.population) {
                Some((_, array)) => array.push(row.genotype.clone()),
                None => {
                    let mut array = GenotypeArray::new();
                    array.push(row.genotype.clone());
                    groups.push((row.population, array));
                }
            }
        }

        Some(
            groups
                .into_iter()
                .map(|(pop, array)| (self.population_name(pop), array))
                .collect(),
        )
    }

    /// Allele frequencies of one locus, pooled across all populations. A locus where every call
    /// is missing yields an empty map; only an unknown locus name yields `None`.
    pub fn locus_frequencies(&self, locus: &str) -> Option<FrequencyMap<A>> {
        self.genotype_array(locus)
            .map(|array| array.allele_frequencies())
    }

    /// Allele frequencies of one locus, one map per population in first-appearance order.
    /// Populations without any call at the locus are reported with an empty map, which the
    /// cross-group aggregator in [`crate::freq`] discards.
    pub fn locus_frequencies_by_population(
        &self,
        locus: &str,
    ) -> Option<Vec<(&str, FrequencyMap<A>)>> {
        self.genotype_arrays_by_population(locus).map(|groups| {
            groups
                .into_iter()
                .map(|(population, array)| (population, array.allele_frequencies()))
                .collect()
        })
    }

    /// Pooled allele frequencies for every locus in the table, computed in parallel across loci.
    /// Each locus is independent and every worker only reads its own row group, so the
    /// parallelism does not change any result.
    pub fn frequencies_by_locus(&self) -> Vec<(&str, FrequencyMap<A>)> {
        let maps: Vec<FrequencyMap<A>> = self
            .locus_rows
            .par_iter()
            .map(|rows| {
                rows.iter()
                    .map(|&row| self.rows[row as usize].genotype.clone())
                    .collect::<GenotypeArray<A>>()
                    .allele_frequencies()
            })
            .collect();

        self.locus_names
            .iter()
            .map(String::as_str)
            .zip(maps)
            .collect()
    }
}
