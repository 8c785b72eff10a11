use crate::genotypes::{AlleleCode, Genotype};
use crate::table::data::GenotypeRow;
use crate::table::{GenotypeTable, LocusId, PopId, SampleId};
use indexset::BTreeSet;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use twox_hash::XxHash64;

/// A builder for [`GenotypeTable`] instances. Names are interned in the order they first appear,
/// per-locus row groups and allele sets are maintained incrementally, so finalizing is cheap.
pub struct GenotypeTableBuilder<A: AlleleCode> {
    rows: Vec<GenotypeRow<A>>,
    locus_names: Vec<String>,
    locus_index: HashMap<String, LocusId, BuildHasherDefault<XxHash64>>,
    population_names: Vec<String>,
    population_index: HashMap<String, PopId, BuildHasherDefault<XxHash64>>,
    sample_names: Vec<String>,
    sample_index: HashMap<String, SampleId, BuildHasherDefault<XxHash64>>,
    locus_rows: Vec<Vec<u32>>,
    ploidies: Vec<Option<usize>>,
    alleles: Vec<BTreeSet<A>>,
}

impl<A: AlleleCode> GenotypeTableBuilder<A> {
    /// A new empty builder.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            locus_names: Vec::new(),
            locus_index: HashMap::default(),
            population_names: Vec::new(),
            population_index: HashMap::default(),
            sample_names: Vec::new(),
            sample_index: HashMap::default(),
            locus_rows: Vec::new(),
            ploidies: Vec::new(),
            alleles: Vec::new(),
        }
    }

    /// Add one row: the call (or missing call) of `sample` at `locus`, with the sample assigned
    /// to `population`. Unknown names are interned on first use.
    ///
    /// # Panics
    /// - if a present call has a different ploidy than an earlier call at the same locus. The
    /// readers in [`crate::io`] validate ploidy before adding rows and report a
    /// [`crate::io::ParseError`] instead, so this panic only fires on programmatic misuse.
    pub fn add_row(
        &mut self,
        sample: &str,
        population: &str,
        locus: &str,
        genotype: Option<Genotype<A>>,
    ) {
        let locus = self.intern_locus(locus);
        let population = self.intern_population(population);
        let sample = self.intern_sample(sample);

        if let Some(call) = &genotype {
            let slot = &mut self.ploidies[locus.0 as usize];
            match slot {
                Some(ploidy) => assert!(
                    *ploidy == call.ploidy(),
                    "locus {} has ploidy {}, genotype has {} slots",
                    self.locus_names[locus.0 as usize],
                    ploidy,
                    call.ploidy()
                ),
                None => *slot = Some(call.ploidy()),
            }

            for &allele in call.alleles() {
                self.alleles[locus.0 as usize].insert(allele);
            }
        }

        self.locus_rows[locus.0 as usize].push(self.rows.len() as u32);
        self.rows.push(GenotypeRow {
            locus,
            population,
            sample,
            genotype,
        });
    }

    /// The ploidy recorded for a locus so far, if any call has been seen for it. Readers use
    /// this to validate input before [`Self::add_row`].
    pub fn ploidy(&self, locus: &str) -> Option<usize> {
        self.locus_index
            .get(locus)
            .and_then(|id| self.ploidies[id.0 as usize])
    }

    /// Generate a [`GenotypeTable`] from the current builder state.
    pub fn finalize(self) -> GenotypeTable<A> {
        GenotypeTable::new(
            self.rows,
            self.locus_names,
            self.locus_index,
            self.population_names,
            self.sample_names,
            self.locus_rows,
            self.ploidies,
            self.alleles,
        )
    }

    fn intern_locus(&mut self, name: &str) -> LocusId {
        match self.locus_index.get(name) {
            Some(&id) => id,
            None => {
                let id = LocusId::from_usize(self.locus_names.len());
                self.locus_names.push(name.to_string());
                self.locus_index.insert(name.to_string(), id);
                self.locus_rows.push(Vec::new());
                self.ploidies.push(None);
                self.alleles.push(BTreeSet::new());
                id
            }
        }
    }

    fn intern_population(&mut self, name: &str) -> PopId {
        match self.population_index.get(name) {
            Some(&id) => id,
            None => {
                let id = PopId::from_usize(self.population_names.len());
                self.population_names.push(name.to_string());
                self.population_index.insert(name.to_string(), id);
                id
            }
        }
    }

    fn intern_sample(&mut self, name: &str) -> SampleId {
        match self.sample_index.get(name) {
            Some(&id) => id,
            None => {
                let id = SampleId::from_usize(self.sample_names.len());
                self.sample_names.push(name.to_string());
                self.sample_index.insert(name.to_string(), id);
                id
            }
        }
    }
}

impl<A: AlleleCode> Default for GenotypeTableBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
