//! Tests for the Needleman-Wunsch aligner in `global-align`.

use global_align::{errors::Sequence, Aligner, Alignment, AlignmentError, ScoringMatrix};
use rand::prelude::*;
use test_case::test_case;

/// Generate random sequences over `alphabet` with lengths in `min_len..=max_len`.
fn random_sequences(cardinality: usize, min_len: usize, max_len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect::<String>()
        })
        .collect()
}

/// Checks the structural invariants of an alignment of `x` and `y`.
fn check_alignment(alignment: &Alignment<i32>, x: &str, y: &str, matrix: &ScoringMatrix<i32>, gap_penalty: i32) {
    let [row_x, row_y] = alignment.rows();
    assert_eq!(row_x.len(), row_y.len());
    assert_eq!(alignment.ungapped(), [x.as_bytes().to_vec(), y.as_bytes().to_vec()]);
    assert_eq!(alignment.rescore(matrix, gap_penalty), Some(alignment.score()));
}

#[test]
fn pleasantly_meanly() {
    let matrix = ScoringMatrix::blosum62();
    let aligner = Aligner::<i32>::new(&matrix, 5).unwrap();

    let alignment = aligner.align(&"PLEASANTLY", &"MEANLY").unwrap();
    assert_eq!(alignment.score(), 8);
    check_alignment(&alignment, "PLEASANTLY", "MEANLY", &matrix, 5);

    // One of several optimal alignments.
    let [aligned_x, aligned_y] = alignment.to_strings();
    assert_eq!(aligned_x, "PLEASANTLY");
    assert_eq!(aligned_y, "-ME--AN-LY");

    let reversed = aligner.align(&"MEANLY", &"PLEASANTLY").unwrap();
    assert_eq!(reversed.score(), 8);
    check_alignment(&reversed, "MEANLY", "PLEASANTLY", &matrix, 5);

    // Ties can break the mirror in general, but not for this pair.
    assert_eq!(reversed.to_strings(), [aligned_y, aligned_x]);
}

#[test_case("", "ACD", 5 ; "empty first")]
#[test_case("ACD", "", 5 ; "empty second")]
#[test_case("W", "", 0 ; "zero gap penalty")]
fn gap_only(x: &str, y: &str, gap_penalty: i32) {
    let matrix = ScoringMatrix::blosum62();
    let aligner = Aligner::new(&matrix, gap_penalty).unwrap();

    let alignment = aligner.align(&x, &y).unwrap();
    let n = x.len().max(y.len());
    assert_eq!(alignment.score(), -i32::try_from(n).unwrap() * gap_penalty);
    assert_eq!(alignment.len(), n);

    let gaps = "-".repeat(n);
    let expected = if x.is_empty() {
        [gaps, y.to_string()]
    } else {
        [x.to_string(), gaps]
    };
    assert_eq!(alignment.to_strings(), expected);
    check_alignment(&alignment, x, y, &matrix, gap_penalty);
}

#[test]
fn both_empty() {
    let matrix = ScoringMatrix::blosum62();
    let aligner = Aligner::new(&matrix, 5).unwrap();

    let alignment = aligner.align(&"", &"").unwrap();
    assert_eq!(alignment.score(), 0);
    assert!(alignment.is_empty());
    assert_eq!(aligner.score(&"", &"").unwrap(), 0);
}

#[test_case(b'A', 4 ; "alanine")]
#[test_case(b'W', 11 ; "tryptophan")]
#[test_case(b'C', 9 ; "cysteine")]
fn single_symbol(symbol: u8, self_score: i32) {
    let matrix = ScoringMatrix::blosum62();
    let aligner = Aligner::new(&matrix, 5).unwrap();

    let seq = [symbol];
    let alignment = aligner.align(&seq, &seq).unwrap();
    assert_eq!(alignment.score(), self_score);
    assert_eq!(alignment.rows(), [&seq[..], &seq[..]]);
    assert_eq!(alignment.gaps(), [Vec::<usize>::new(), Vec::new()]);
}

#[test]
fn invalid_symbols() {
    let matrix = ScoringMatrix::blosum62();
    let aligner = Aligner::<i32>::new(&matrix, 5).unwrap();

    assert_eq!(
        aligner.align(&"PLEASANTLY", &"MEANXLY").unwrap_err(),
        AlignmentError::InvalidSymbol {
            symbol: 'X',
            sequence: Sequence::Second,
            position: 4,
        }
    );
    assert_eq!(
        aligner.score(&"PLEA-SANTLY", &"MEANLY").unwrap_err(),
        AlignmentError::InvalidSymbol {
            symbol: '-',
            sequence: Sequence::First,
            position: 4,
        }
    );
    assert!(aligner.dp_table(&"B", &"A").is_err());

    // Lowercase letters share the rows of their uppercase counterparts.
    let alignment = aligner.align(&"pleasantly", &"meanly").unwrap();
    assert_eq!(alignment.score(), 8);
}

#[test_case("ACGT", 1, -1, 2 ; "dna unit")]
#[test_case("ACGT", 2, -3, 4 ; "dna harsh")]
#[test_case("ACDEFGHIKLMNPQRSTVWY", 5, -4, 8 ; "protein")]
fn random_identity(alphabet: &str, match_: i32, mismatch: i32, gap_penalty: i32) {
    let matrix = ScoringMatrix::identity(alphabet, match_, mismatch).unwrap();
    let aligner = Aligner::new(&matrix, gap_penalty).unwrap();
    let sequences = random_sequences(12, 0, 40, alphabet, 42);

    for x in &sequences {
        for y in &sequences {
            let alignment = aligner.align(x, y).unwrap();
            check_alignment(&alignment, x, y, &matrix, gap_penalty);
            assert_eq!(aligner.score(x, y).unwrap(), alignment.score());
            assert_eq!(aligner.align(y, x).unwrap().score(), alignment.score());
        }
    }
}

#[test_case(ScoringMatrix::blosum62() ; "blosum62")]
#[test_case(ScoringMatrix::pam250() ; "pam250")]
fn random_proteins(matrix: ScoringMatrix<i32>) {
    let aligner = Aligner::new(&matrix, 5).unwrap();
    let sequences = random_sequences(10, 1, 60, "ACDEFGHIKLMNPQRSTVWY", 7);

    for x in &sequences {
        for y in &sequences {
            let alignment = aligner.align(x, y).unwrap();
            check_alignment(&alignment, x, y, &matrix, 5);
            assert_eq!(aligner.align(y, x).unwrap().score(), alignment.score());
        }
        // The best self-alignment is the ungapped one.
        let self_score = x.bytes().filter_map(|c| matrix.score(c, c)).sum::<i32>();
        assert_eq!(aligner.score(x, x).unwrap(), self_score);
    }
}

#[test]
fn parallel_matches_sequential() {
    let matrix = ScoringMatrix::blosum62();
    let aligner = Aligner::<i32>::new(&matrix, 5).unwrap();

    let sequences = random_sequences(8, 0, 50, "ACDEFGHIKLMNPQRSTVWY", 3);
    let mut pairs = sequences
        .iter()
        .flat_map(|x| sequences.iter().map(move |y| (x.clone(), y.clone())))
        .collect::<Vec<_>>();
    pairs.push(("MEANLY".to_string(), "MEAN?LY".to_string()));

    let parallel = aligner.par_align(&pairs);
    assert_eq!(parallel.len(), pairs.len());
    for ((x, y), result) in pairs.iter().zip(parallel) {
        assert_eq!(result, aligner.align(x, y));
    }
}

#[test]
fn wider_score_types() {
    let matrix = ScoringMatrix::<i64>::pam250();
    let aligner = Aligner::new(&matrix, 5).unwrap();
    assert_eq!(aligner.align(&"W", &"W").unwrap().score(), 17_i64);

    let matrix = ScoringMatrix::<i16>::blosum62();
    let aligner = Aligner::new(&matrix, 5).unwrap();
    assert_eq!(aligner.score(&"PLEASANTLY", &"MEANLY").unwrap(), 8_i16);
}
