use crate::genotypes::{AlleleCode, Genotype};
use crate::io::{add_validated, parse_allele, ParseError, ParseResult};
use crate::table::{GenotypeTable, GenotypeTableBuilder};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a Structure file: a whitespace-delimited locus-name header, then one row per allele copy
/// (ploidy consecutive rows per sample) of the form `sample population a1 a2 ...`. Rows of the
/// same sample must be consecutive and share the population column; the number of rows per
/// sample is the ploidy. An allele equal to `missing` (conventionally `-9`) marks the call of
/// that sample at that locus missing.
pub fn read_structure<A: AlleleCode, P: AsRef<Path>>(
    path: P,
    missing: &str,
) -> ParseResult<GenotypeTable<A>> {
    let reader = BufReader::new(File::open(path)?);

    let mut loci: Vec<String> = Vec::new();
    let mut builder = GenotypeTableBuilder::new();
    // allele rows of the sample currently being collected
    let mut current: Option<SampleRows> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        if loci.is_empty() {
            loci = tokens.into_iter().map(str::to_string).collect();
            continue;
        }

        if tokens.len() != loci.len() + 2 {
            return Err(ParseError::Malformed {
                line: number,
                message: format!(
                    "expected sample, population and {} allele columns, found {} columns",
                    loci.len(),
                    tokens.len()
                ),
            });
        }

        let name = tokens[0];
        let population = tokens[1];
        let alleles: Vec<String> = tokens[2..].iter().map(|token| token.to_string()).collect();

        match &mut current {
            Some(rows) if rows.sample == name => {
                if rows.population != population {
                    return Err(ParseError::Malformed {
                        line: number,
                        message: format!(
                            "sample {} changes population from {} to {}",
                            name, rows.population, population
                        ),
                    });
                }
                rows.copies.push(alleles);
            }
            _ => {
                if let Some(rows) = current.take() {
                    flush_sample(&mut builder, &loci, rows, missing)?;
                }
                current = Some(SampleRows {
                    sample: name.to_string(),
                    population: population.to_string(),
                    copies: vec![alleles],
                    first_line: number,
                });
            }
        }
    }

    if loci.is_empty() {
        return Err(ParseError::UnexpectedEof("the locus-name header"));
    }
    if let Some(rows) = current.take() {
        flush_sample(&mut builder, &loci, rows, missing)?;
    }

    let table = builder.finalize();
    debug!(
        "read {} structure rows across {} loci",
        table.len(),
        table.loci().len()
    );
    Ok(table)
}

struct SampleRows {
    sample: String,
    population: String,
    copies: Vec<Vec<String>>,
    first_line: usize,
}

/// Turn the collected allele-copy rows of one sample into one genotype per locus.
fn flush_sample<A: AlleleCode>(
    builder: &mut GenotypeTableBuilder<A>,
    loci: &[String],
    rows: SampleRows,
    missing: &str,
) -> ParseResult<()> {
    for (index, locus) in loci.iter().enumerate() {
        let slots: Vec<&str> = rows
            .copies
            .iter()
            .map(|copy| copy[index].as_str())
            .collect();

        let genotype = if slots.iter().any(|&slot| slot == missing) {
            None
        } else {
            let mut alleles = Vec::with_capacity(slots.len());
            for slot in slots {
                alleles.push(parse_allele(slot, rows.first_line)?);
            }
            Some(Genotype::new(alleles))
        };

        add_validated(
            builder,
            &rows.sample,
            &rows.population,
            locus,
            genotype,
            rows.first_line,
        )?;
    }
    Ok(())
}
