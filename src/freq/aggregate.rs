use crate::freq::FrequencyMap;
use crate::genotypes::AlleleCode;

/// Average an ordered collection of per-group frequency maps (one per population or other
/// grouping, for a fixed locus) into a single map, raising each averaged value to `power`.
/// Pass `power = 1` for a plain average; higher powers feed differentiation statistics that need
/// higher-moment averages.
///
/// Groups with an empty map had no call for the locus and are discarded before anything else, so
/// they neither contribute zero entries nor inflate the divisor. Every remaining group
/// participates in the divisor for every allele of the key union; a group lacking an allele
/// contributes 0.0 for it but still counts as a participating group. Alleles whose final value
/// is exactly 0.0 are dropped from the result, absence represents zero.
pub fn average_frequencies<A: AlleleCode>(groups: &[FrequencyMap<A>], power: i32) -> FrequencyMap<A> {
    average_participating(groups.iter().filter(|group| !group.is_empty()).collect(), power)
}

/// Average exactly two frequency maps, the pairwise shape used for two-population comparisons.
/// The aggregation is identical to [`average_frequencies`], only the way the groups are supplied
/// differs.
pub fn average_frequency_pair<A: AlleleCode>(
    first: &FrequencyMap<A>,
    second: &FrequencyMap<A>,
    power: i32,
) -> FrequencyMap<A> {
    average_participating(
        [first, second]
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect(),
        power,
    )
}

/// Shared aggregation over the groups that survived the empty-map filter. Sums are accumulated
/// in `f64` before the single division per allele.
fn average_participating<A: AlleleCode>(
    groups: Vec<&FrequencyMap<A>>,
    power: i32,
) -> FrequencyMap<A> {
    if groups.is_empty() {
        return FrequencyMap::default();
    }

    let participants = groups.len() as f64;
    let mut sums = FrequencyMap::default();
    for group in &groups {
        for (&allele, &frequency) in group.iter() {
            *sums.entry(allele).or_insert(0.0) += frequency;
        }
    }

    sums.into_iter()
        .map(|(allele, sum)| (allele, (sum / participants).powi(power)))
        .filter(|&(_, frequency)| frequency != 0.0)
        .collect()
}
