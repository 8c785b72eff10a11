use crate::genotypes::{AlleleCode, Genotype};
use crate::io::{add_validated, parse_allele, ParseError, ParseResult};
use crate::table::{GenotypeTable, GenotypeTableBuilder};
use log::debug;
use std::path::Path;

/// Read a delimited-text genotype file. The header row is `name`, `population`, then one column
/// per locus; each genotype cell holds the allele codes joined by `allele_separator` (for example
/// `120/124`). An empty cell, a `.` cell, or a `.`/empty allele slot marks the call missing.
///
/// # Parameters
/// - `delimiter` the field delimiter, e.g. `b','` for CSV or `b'\t'` for TSV
/// - `allele_separator` the character between allele codes inside a genotype cell
pub fn read_delimited<A: AlleleCode, P: AsRef<Path>>(
    path: P,
    delimiter: u8,
    allele_separator: char,
) -> ParseResult<GenotypeTable<A>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.len() < 3 {
        return Err(ParseError::Malformed {
            line: 1,
            message: "expected name, population and at least one locus column".to_string(),
        });
    }
    let loci: Vec<String> = headers.iter().skip(2).map(str::to_string).collect();

    let mut builder = GenotypeTableBuilder::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        if record.len() != headers.len() {
            return Err(ParseError::Malformed {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    headers.len(),
                    record.len()
                ),
            });
        }

        let sample = &record[0];
        let population = &record[1];
        for (locus, cell) in loci.iter().zip(record.iter().skip(2)) {
            let genotype = decode_cell(cell, allele_separator, line)?;
            add_validated(&mut builder, sample, population, locus, genotype, line)?;
        }
    }

    let table = builder.finalize();
    debug!(
        "read {} delimited genotype rows across {} loci",
        table.len(),
        table.loci().len()
    );
    Ok(table)
}

fn decode_cell<A: AlleleCode>(
    cell: &str,
    allele_separator: char,
    line: usize,
) -> ParseResult<Option<Genotype<A>>> {
    if cell.is_empty() || cell == "." {
        return Ok(None);
    }

    let mut alleles = Vec::new();
    for token in cell.split(allele_separator) {
        let token = token.trim();
        // a single unreadable slot makes the whole call missing
        if token.is_empty() || token == "." {
            return Ok(None);
        }
        alleles.push(parse_allele(token, line)?);
    }
    Ok(Some(Genotype::new(alleles)))
}
