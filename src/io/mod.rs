use crate::genotypes::{AlleleCode, Genotype};
use crate::table::GenotypeTableBuilder;

mod delimited;
mod genepop;
mod structure;
mod vcf;

pub use delimited::read_delimited;
pub use genepop::read_genepop;
pub use structure::read_structure;
pub use vcf::read_vcf;

pub type ParseResult<T> = Result<T, ParseError>;

/// Errors reported by the file-format readers. The frequency engine itself never produces these;
/// degenerate-but-valid inputs (all calls missing) are handled by the data model, not by errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("line {line}: locus {locus} has ploidy {expected}, genotype has {found} slots")]
    PloidyMismatch {
        line: usize,
        locus: String,
        expected: usize,
        found: usize,
    },
    #[error("unexpected end of file, missing {0}")]
    UnexpectedEof(&'static str),
}

/// Parse a single allele token into the target code type.
pub(crate) fn parse_allele<A: AlleleCode>(token: &str, line: usize) -> ParseResult<A> {
    token.parse::<A>().map_err(|_| ParseError::Malformed {
        line,
        message: format!("invalid allele code '{}'", token),
    })
}

/// Add a row to the builder after checking the call against the ploidy already recorded for the
/// locus. Readers go through this so file defects surface as [`ParseError`] instead of tripping
/// the builder's invariant panic.
pub(crate) fn add_validated<A: AlleleCode>(
    builder: &mut GenotypeTableBuilder<A>,
    sample: &str,
    population: &str,
    locus: &str,
    genotype: Option<Genotype<A>>,
    line: usize,
) -> ParseResult<()> {
    if let Some(call) = &genotype {
        if let Some(expected) = builder.ploidy(locus) {
            if expected != call.ploidy() {
                return Err(ParseError::PloidyMismatch {
                    line,
                    locus: locus.to_string(),
                    expected,
                    found: call.ploidy(),
                });
            }
        }
    }

    builder.add_row(sample, population, locus, genotype);
    Ok(())
}
