use crate::genotypes::{AlleleCode, Genotype};
use crate::io::{add_validated, parse_allele, ParseError, ParseResult};
use crate::table::{GenotypeTable, GenotypeTableBuilder};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a Genepop file: a title line, locus names (one per line or comma-separated), then
/// population blocks separated by `POP` marker lines. Sample lines have the form
/// `name ,  0102 0303 ...` with a fixed 2- or 3-digit encoding per allele; the digit width and
/// ploidy (diploid or haploid) are detected from the first genotype block of the file. An
/// all-zero allele block marks the call missing. Populations are unnamed in the format and get
/// ordinal names `pop_1`, `pop_2`, ...
pub fn read_genepop<A: AlleleCode, P: AsRef<Path>>(path: P) -> ParseResult<GenotypeTable<A>> {
    let reader = BufReader::new(File::open(path)?);

    let mut loci: Vec<String> = Vec::new();
    let mut population = 0usize;
    // digit width per allele and ploidy, detected from the first genotype block
    let mut layout: Option<(usize, usize)> = None;
    let mut builder = GenotypeTableBuilder::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if number == 1 {
            // title line, content is free-form and ignored
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.eq_ignore_ascii_case("pop") {
            if loci.is_empty() {
                return Err(ParseError::Malformed {
                    line: number,
                    message: "POP marker before any locus name".to_string(),
                });
            }
            population += 1;
            continue;
        }

        if population == 0 {
            loci.extend(
                trimmed
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty()),
            );
            continue;
        }

        let (name, calls) = trimmed.split_once(',').ok_or_else(|| ParseError::Malformed {
            line: number,
            message: "sample line without ',' separator".to_string(),
        })?;
        let name = name.trim();
        let blocks: Vec<&str> = calls.split_whitespace().collect();
        if blocks.len() != loci.len() {
            return Err(ParseError::Malformed {
                line: number,
                message: format!(
                    "expected {} genotype blocks, found {}",
                    loci.len(),
                    blocks.len()
                ),
            });
        }

        let population_name = format!("pop_{}", population);
        for (locus, block) in loci.iter().zip(blocks) {
            let genotype = decode_block(block, &mut layout, number)?;
            add_validated(&mut builder, name, &population_name, locus, genotype, number)?;
        }
    }

    if population == 0 {
        return Err(ParseError::UnexpectedEof("a POP marker"));
    }

    let table = builder.finalize();
    debug!(
        "read {} genepop rows across {} loci and {} populations",
        table.len(),
        table.loci().len(),
        table.populations().len()
    );
    Ok(table)
}

fn decode_block<A: AlleleCode>(
    block: &str,
    layout: &mut Option<(usize, usize)>,
    line: usize,
) -> ParseResult<Option<Genotype<A>>> {
    let (width, ploidy) = match layout {
        Some(layout) => *layout,
        None => {
            let detected = match block.len() {
                4 => (2, 2),
                6 => (3, 2),
                2 => (2, 1),
                3 => (3, 1),
                _ => {
                    return Err(ParseError::Malformed {
                        line,
                        message: format!(
                            "genotype block '{}' is not a 2- or 3-digit encoding",
                            block
                        ),
                    })
                }
            };
            *layout = Some(detected);
            detected
        }
    };

    if block.len() != width * ploidy || !block.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::Malformed {
            line,
            message: format!(
                "genotype block '{}' does not match the {}-digit encoding",
                block, width
            ),
        });
    }

    let mut alleles = Vec::with_capacity(ploidy);
    for slot in 0..ploidy {
        let token = &block[slot * width..(slot + 1) * width];
        if token.chars().all(|c| c == '0') {
            // an all-zero slot marks the whole call missing
            return Ok(None);
        }
        alleles.push(parse_allele(token, line)?);
    }
    Ok(Some(Genotype::new(alleles)))
}
