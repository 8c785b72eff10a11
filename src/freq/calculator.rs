use crate::freq::{FrequencyMap, FrequencyVector, GenotypeFrequencyMap};
use crate::genotypes::{AlleleCode, Genotype, GenotypeArray};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use twox_hash::XxHash64;

impl<A: AlleleCode> Genotype<A> {
    /// Compute the allele frequencies of this single call. Each of the N slots contributes a
    /// weight of 1/N, so an allele appearing k times accumulates k/N. For a one-genotype array
    /// this matches [`GenotypeArray::allele_frequencies`] up to float precision.
    pub fn allele_frequencies(&self) -> FrequencyMap<A> {
        let weight = 1.0 / self.ploidy() as f64;
        let mut frequencies = FrequencyMap::default();
        for &allele in self.alleles() {
            *frequencies.entry(allele).or_insert(0.0) += weight;
        }
        frequencies
    }
}

impl<A: AlleleCode> GenotypeArray<A> {
    /// Compute the allele frequencies over all non-missing calls in the array: every call is
    /// flattened into its allele slots and each distinct allele's share of the flattened total is
    /// reported. Counting is integral and the division happens once per allele in `f64`, so the
    /// values sum to 1.0 within floating tolerance whenever at least one call is present.
    ///
    /// An array without any call yields an empty map, not an error.
    pub fn allele_frequencies(&self) -> FrequencyMap<A> {
        let mut counts: HashMap<A, u64, BuildHasherDefault<XxHash64>> = HashMap::default();
        let mut total = 0u64;
        for allele in self.alleles() {
            *counts.entry(allele).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return FrequencyMap::default();
        }

        counts
            .into_iter()
            .map(|(allele, count)| (allele, count as f64 / total as f64))
            .collect()
    }

    /// Project the allele frequency distribution of the array without allele identities. Distinct
    /// alleles are discovered by a linear equality scan, so entries appear in first-encounter
    /// order; callers must not rely on that order.
    ///
    /// Unlike [`Self::allele_frequencies`], a fully missing array propagates as `None` here. The
    /// distinction between "no data" and "computed empty result" is deliberate, downstream
    /// consumers depend on it.
    pub fn frequency_vector(&self) -> Option<FrequencyVector> {
        let mut seen: Vec<A> = Vec::new();
        let mut counts: Vec<u64> = Vec::new();
        let mut total = 0u64;

        for allele in self.alleles() {
            total += 1;
            match seen.iter().position(|&known| known == allele) {
                Some(index) => counts[index] += 1,
                None => {
                    seen.push(allele);
                    counts.push(1);
                }
            }
        }

        if total == 0 {
            return None;
        }

        Some(FrequencyVector::from_vec(
            counts
                .into_iter()
                .map(|count| count as f64 / total as f64)
                .collect(),
        ))
    }

    /// Look up the frequency of a specific allele in this array. An allele that never appears
    /// yields 0.0, absence is not an error here.
    pub fn frequency_of(&self, allele: A) -> f64 {
        self.allele_frequencies()
            .get(&allele)
            .copied()
            .unwrap_or(0.0)
    }

    /// Compute the frequency of each distinct genotype call among the non-missing calls. Slot
    /// order distinguishes genotypes, a `120/124` call and a `124/120` call are counted
    /// separately. An array without any call yields an empty map.
    pub fn genotype_frequencies(&self) -> GenotypeFrequencyMap<A> {
        let mut counts: HashMap<&Genotype<A>, u64, BuildHasherDefault<XxHash64>> =
            HashMap::default();
        let mut total = 0u64;
        for call in self.iter().flatten() {
            *counts.entry(call).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return GenotypeFrequencyMap::default();
        }

        counts
            .into_iter()
            .map(|(call, count)| (call.clone(), count as f64 / total as f64))
            .collect()
    }
}
