use approx::assert_relative_eq;
use popfreq::freq::{average_frequencies, average_frequency_pair};

mod common;

#[test]
fn averaging_per_population_maps() {
    let table = common::two_population_table();
    let groups: Vec<_> = table
        .locus_frequencies_by_population("fca8")
        .unwrap()
        .into_iter()
        .map(|(_, frequencies)| frequencies)
        .collect();

    // east carries 135 at 0.75 and 143 at 0.25, west carries only 143; west still participates
    // in the divisor for 135
    let averaged = average_frequencies(&groups, 1);
    assert_relative_eq!(averaged[&135], 0.375);
    assert_relative_eq!(averaged[&143], 0.625);
}

#[test]
fn group_without_calls_is_excluded_from_participation() {
    let table = common::two_population_table();
    let groups: Vec<_> = table
        .locus_frequencies_by_population("fca23")
        .unwrap()
        .into_iter()
        .map(|(_, frequencies)| frequencies)
        .collect();

    // west has no call at fca23, so the average is exactly the east map
    let averaged = average_frequencies(&groups, 1);
    assert_relative_eq!(averaged[&200], 0.5);
    assert_relative_eq!(averaged[&202], 0.5);
}

#[test]
fn squared_average_keeps_private_alleles() {
    let table = common::two_population_table();
    let groups: Vec<_> = table
        .locus_frequencies_by_population("fca8")
        .unwrap()
        .into_iter()
        .map(|(_, frequencies)| frequencies)
        .collect();

    // power is applied after averaging, before the zero-drop filter, so an allele private to one
    // population survives squaring
    let averaged = average_frequencies(&groups, 2);
    assert_relative_eq!(averaged[&135], 0.375 * 0.375);
    assert_relative_eq!(averaged[&143], 0.625 * 0.625);
}

#[test]
fn pairwise_comparison_matches_the_list_form() {
    let table = common::two_population_table();
    let groups = table.locus_frequencies_by_population("fca8").unwrap();

    for power in [1, 2, 3] {
        let pairwise = average_frequency_pair(&groups[0].1, &groups[1].1, power);
        let listed = average_frequencies(
            &[groups[0].1.clone(), groups[1].1.clone()],
            power,
        );
        assert_eq!(pairwise, listed);
    }
}
