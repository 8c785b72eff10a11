use approx::assert_relative_eq;
use popfreq::io::{read_delimited, read_genepop, read_structure, read_vcf, ParseError};
use std::collections::HashMap;
use std::fs;

const DELIMITED: &str = "\
name,population,fca8,fca23
e1,east,135/135,200/202
e2,east,135/143,.
w1,west,143/143,
w2,west,,.
";

const GENEPOP: &str = "\
Wild cats, two sampling sites
fca8,fca23
POP
e1 ,  135135 200202
e2 ,  135143 000000
POP
w1 ,  143143 000000
w2 ,  000000 000000
";

const STRUCTURE: &str = "\
fca8 fca23
e1 east 135 200
e1 east 135 202
e2 east 135 -9
e2 east 143 -9
w1 west 143 -9
w1 west 143 -9
w2 west -9 -9
w2 west -9 -9
";

#[test]
fn delimited_reader_builds_the_expected_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cats.csv");
    fs::write(&path, DELIMITED).unwrap();

    let table = read_delimited::<u16, _>(&path, b',', '/').unwrap();

    assert_eq!(table.loci(), &["fca8".to_string(), "fca23".to_string()]);
    assert_eq!(table.populations(), &["east".to_string(), "west".to_string()]);
    assert_eq!(table.samples().len(), 4);
    assert_eq!(table.missing_count("fca8"), Some(1));
    assert_eq!(table.missing_count("fca23"), Some(3));

    let frequencies = table.locus_frequencies("fca8").unwrap();
    assert_relative_eq!(frequencies[&135], 0.5);
    assert_relative_eq!(frequencies[&143], 0.5);
}

#[test]
fn genepop_reader_agrees_with_the_delimited_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let delimited_path = dir.path().join("cats.csv");
    let genepop_path = dir.path().join("cats.gen");
    fs::write(&delimited_path, DELIMITED).unwrap();
    fs::write(&genepop_path, GENEPOP).unwrap();

    let delimited = read_delimited::<u16, _>(&delimited_path, b',', '/').unwrap();
    let genepop = read_genepop::<u16, _>(&genepop_path).unwrap();

    // populations are ordinal in genepop, but the dataset is the same
    assert_eq!(genepop.populations(), &["pop_1".to_string(), "pop_2".to_string()]);
    for locus in ["fca8", "fca23"] {
        assert_eq!(
            genepop.locus_frequencies(locus).unwrap(),
            delimited.locus_frequencies(locus).unwrap()
        );
    }
}

#[test]
fn structure_reader_groups_allele_rows_per_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cats.str");
    fs::write(&path, STRUCTURE).unwrap();

    let table = read_structure::<u16, _>(&path, "-9").unwrap();

    assert_eq!(table.samples().len(), 4);
    assert_eq!(table.ploidy("fca8"), Some(2));

    let groups = table.locus_frequencies_by_population("fca8").unwrap();
    assert_relative_eq!(groups[0].1[&135], 0.75);
    assert_relative_eq!(groups[0].1[&143], 0.25);
    assert_relative_eq!(groups[1].1[&143], 1.0);

    // every fca23 call except e1's is the missing sentinel
    assert_eq!(table.missing_count("fca23"), Some(3));
}

#[test]
fn vcf_reader_uses_gt_only_and_skips_records_without_it() {
    let vcf = "\
##fileformat=VCFv4.2
##source=test
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\ts1\ts2\ts3
1\t100\trs1\tA\tT\t.\tPASS\t.\tGT:DP\t0|0:10\t0/1:8\t1/1:7
1\t200\t.\tG\tC\t.\tPASS\t.\tDP\t5\t5\t5
1\t300\trs3\tG\tC\t.\tPASS\t.\tGT\t.\t0/0\t./1
";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cats.vcf");
    fs::write(&path, vcf).unwrap();

    let mut populations = HashMap::new();
    populations.insert("s1".to_string(), "east".to_string());
    populations.insert("s2".to_string(), "east".to_string());
    populations.insert("s3".to_string(), "west".to_string());

    let table = read_vcf::<u8, _>(&path, Some(&populations)).unwrap();

    // the DP-only record at 1:200 is skipped
    assert_eq!(table.loci(), &["rs1".to_string(), "rs3".to_string()]);
    assert_eq!(table.populations(), &["east".to_string(), "west".to_string()]);

    let rs1 = table.locus_frequencies("rs1").unwrap();
    assert_relative_eq!(rs1[&0], 0.5);
    assert_relative_eq!(rs1[&1], 0.5);

    // s1 is uncalled and s3 is half-called at rs3, both count as missing
    assert_eq!(table.missing_count("rs3"), Some(2));
    let rs3 = table.locus_frequencies("rs3").unwrap();
    assert_relative_eq!(rs3[&0], 1.0);
}

#[test]
fn vcf_without_population_mapping_pools_everything() {
    let vcf = "\
##fileformat=VCFv4.2
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\ts1\ts2
1\t100\t.\tA\tT\t.\tPASS\t.\tGT\t0/1\t1/1
";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.vcf");
    fs::write(&path, vcf).unwrap();

    let table = read_vcf::<u8, _>(&path, None).unwrap();

    assert_eq!(table.populations(), &["1".to_string()]);
    assert_eq!(table.loci(), &["1:100".to_string()]);
}

#[test]
fn malformed_genepop_block_is_reported_with_its_line() {
    let broken = "\
Title
fca8
POP
e1 ,  13513
";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.gen");
    fs::write(&path, broken).unwrap();

    match read_genepop::<u16, _>(&path) {
        Err(ParseError::Malformed { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected a malformed-input error, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn inconsistent_ploidy_is_a_parse_error_not_a_panic() {
    let broken = "\
fca8
s1 east 135
s1 east 135
s2 east 143
s2 east 143
s2 east 143
";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.str");
    fs::write(&path, broken).unwrap();

    match read_structure::<u16, _>(&path, "-9") {
        Err(ParseError::PloidyMismatch {
            expected, found, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("expected a ploidy mismatch, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn ragged_delimited_record_is_rejected() {
    let broken = "\
name,population,fca8
e1,east,135/135,999/999
";
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, broken).unwrap();

    assert!(read_delimited::<u16, _>(&path, b',', '/').is_err());
}
