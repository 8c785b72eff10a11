use crate::genotypes::{AlleleCode, Genotype};
use crate::io::{add_validated, parse_allele, ParseError, ParseResult};
use crate::table::{GenotypeTable, GenotypeTableBuilder};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read genotype calls from a VCF file. Only the GT subfield is used: allele codes are the GT
/// integer indices, split on `|` or `/`, and a `.` in any slot marks the call missing. The locus
/// name is the record's `ID`, or `CHROM:POS` when the `ID` column is `.`. Records whose FORMAT
/// has no GT key are skipped with a warning.
///
/// VCF carries no population metadata. Samples are looked up in `populations` when given;
/// unmapped samples (and all samples when `populations` is `None`) fall into population `1`.
pub fn read_vcf<A: AlleleCode, P: AsRef<Path>>(
    path: P,
    populations: Option<&HashMap<String, String>>,
) -> ParseResult<GenotypeTable<A>> {
    let reader = BufReader::new(File::open(path)?);

    let mut samples: Vec<String> = Vec::new();
    let mut builder = GenotypeTableBuilder::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if line.starts_with("##") || line.trim().is_empty() {
            continue;
        }

        if line.starts_with('#') {
            let fields: Vec<&str> = line.trim_end().split('\t').collect();
            if fields.len() < 10 {
                return Err(ParseError::Malformed {
                    line: number,
                    message: "#CHROM header has no sample columns".to_string(),
                });
            }
            samples = fields[9..].iter().map(|name| name.to_string()).collect();
            continue;
        }

        if samples.is_empty() {
            return Err(ParseError::Malformed {
                line: number,
                message: "record before the #CHROM header".to_string(),
            });
        }

        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        if fields.len() != samples.len() + 9 {
            return Err(ParseError::Malformed {
                line: number,
                message: format!(
                    "expected {} columns, found {}",
                    samples.len() + 9,
                    fields.len()
                ),
            });
        }

        let locus = if fields[2] == "." {
            format!("{}:{}", fields[0], fields[1])
        } else {
            fields[2].to_string()
        };

        let gt_index = match fields[8].split(':').position(|key| key == "GT") {
            Some(index) => index,
            None => {
                warn!("line {}: record {} has no GT key, skipping", number, locus);
                skipped += 1;
                continue;
            }
        };

        for (sample, field) in samples.iter().zip(&fields[9..]) {
            let call = field.split(':').nth(gt_index).unwrap_or(".");
            let genotype = decode_gt(call, number)?;
            let population = populations
                .and_then(|map| map.get(sample))
                .map(String::as_str)
                .unwrap_or("1");
            add_validated(&mut builder, sample, population, &locus, genotype, number)?;
        }
    }

    if samples.is_empty() {
        return Err(ParseError::UnexpectedEof("the #CHROM header"));
    }

    let table = builder.finalize();
    debug!(
        "read {} vcf genotype rows across {} loci ({} records skipped)",
        table.len(),
        table.loci().len(),
        skipped
    );
    Ok(table)
}

fn decode_gt<A: AlleleCode>(call: &str, line: usize) -> ParseResult<Option<Genotype<A>>> {
    if call.is_empty() || call == "." {
        return Ok(None);
    }

    let mut alleles = Vec::new();
    for token in call.split(['|', '/']) {
        // a single uncalled slot makes the whole call missing
        if token == "." {
            return Ok(None);
        }
        alleles.push(parse_allele(token, line)?);
    }
    Ok(Some(Genotype::new(alleles)))
}
