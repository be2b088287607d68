use super::*;
use crate::{Blocked, Dna, Memo, Tabulation};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One below, at, and above typical tile divisors, plus one exceeding every
/// table dimension used in these tests.
const BLOCK_SIZES: &[usize] = &[1, 2, 3, 7, 8, 100];

fn engines(cm: CostModel) -> Vec<Box<dyn Aligner>> {
    let mut v: Vec<Box<dyn Aligner>> = vec![
        Box::new(Memo::new(cm, Dna::new())),
        Box::new(Tabulation::new(cm, Dna::new())),
    ];
    for &b in BLOCK_SIZES {
        v.push(Box::new(Blocked::new(cm, Dna::new(), b)));
    }
    v
}

/// Assert that every engine, in both argument orders, returns the same
/// distance for `(a, b)`, and return it.
fn distance(cm: CostModel, a: Seq, b: Seq) -> Cost {
    let engines = engines(cm);
    let d = engines[0].cost(a, b);
    for e in &engines {
        assert_eq!(e.cost(a, b), d);
        assert_eq!(e.cost(b, a), d);
    }
    d
}

fn cost_models() -> Vec<CostModel> {
    vec![
        CostModel::default(),
        CostModel::new(2, 1, 2),
        CostModel::new(1, 1, 1),
        CostModel::new(3, 2, 5),
    ]
}

fn random_seq(rng: &mut ChaCha8Rng, len: usize, alphabet: &[u8]) -> Sequence {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn both_empty() {
    for cm in cost_models() {
        assert_eq!(distance(cm, b"", b""), 0);
    }
}

#[test]
fn one_empty() {
    for cm in cost_models() {
        // k recognized bases against nothing: k insertions.
        assert_eq!(distance(cm, b"ACGTA", b""), 5 * cm.indel);
        // Non-base characters do not count.
        assert_eq!(distance(cm, b"AC\nGT>A", b""), 5 * cm.indel);
        assert_eq!(distance(cm, b"\n\n", b""), 0);
    }
}

#[test]
fn identity() {
    for cm in cost_models() {
        assert_eq!(distance(cm, b"GATTACA", b"GATTACA"), 0);
        assert_eq!(distance(cm, b"gattaca", b"GATTACA"), 0);
    }
}

#[test]
fn appended_base_costs_one_indel() {
    for cm in cost_models() {
        assert_eq!(distance(cm, b"GATTACA", b"GATTACAG"), cm.indel);
    }
}

#[test]
fn single_substitution() {
    for cm in cost_models() {
        assert_eq!(
            distance(cm, b"GATTACA", b"GATTATA"),
            cm.sub.min(2 * cm.indel)
        );
    }
}

#[test]
fn non_base_characters_are_free() {
    for cm in cost_models() {
        let d = distance(cm, b"GATTACA", b"GCATGCT");
        // A FASTA-ish rendering of the same sequences.
        assert_eq!(distance(cm, b">r1\nGATT\nACA\n", b">r2\nGCATGCT\n"), d);
        assert_eq!(distance(cm, b"G A T T A C A", b"GCATGCT"), d);
    }
}

/// The hand-traced scenario: `sub = 2`, `indel = 2`, `sub_unknown = 1`.
/// Tracing the recurrence, the best alignment matches G/C/A and pairs the
/// trailing A with the ambiguous U: three substitutions at 2 plus one
/// unknown-pair at 1.
#[test]
fn gattaca_scenario() {
    let cm = CostModel::new(2, 1, 2);
    assert_eq!(distance(cm, b"GATTACA", b"GCATGCU"), 7);
}

#[test]
fn ambiguous_base_is_priced_not_skipped() {
    let cm = CostModel::new(2, 1, 2);
    // N aligns against A for `sub_unknown`...
    assert_eq!(distance(cm, b"A", b"N"), 1);
    // ...but still costs an indel against the empty sequence.
    assert_eq!(distance(cm, b"", b"N"), 2);
}

#[test]
fn blocked_size_one_matches_tabulation() {
    let mut rng = ChaCha8Rng::seed_from_u64(31415);
    for cm in cost_models() {
        let tab = Tabulation::new(cm, Dna::new());
        let blocked = Blocked::new(cm, Dna::new(), 1);
        for _ in 0..20 {
            let a_len = rng.gen_range(0..50);
            let a = random_seq(&mut rng, a_len, b"ACGTN");
            let b_len = rng.gen_range(0..50);
            let b = random_seq(&mut rng, b_len, b"ACGTN");
            assert_eq!(blocked.cost(&a, &b), tab.cost(&a, &b));
        }
    }
}

#[test]
#[should_panic(expected = "block_size must be positive")]
fn blocked_size_zero_panics() {
    Blocked::new(CostModel::default(), Dna::new(), 0);
}

/// Engine agreement on random inputs over a noisy alphabet: lowercase and
/// uppercase bases, ambiguity codes, and FASTA formatting characters.
#[test]
fn engine_agreement_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(2718);
    let alphabet = b"ACGTacgtNU>;\n .";
    for cm in cost_models() {
        for _ in 0..30 {
            let a_len = rng.gen_range(0..60);
            let a = random_seq(&mut rng, a_len, alphabet);
            let b_len = rng.gen_range(0..60);
            let b = random_seq(&mut rng, b_len, alphabet);
            distance(cm, &a, &b);
        }
    }
}

/// Inserting runs of non-base characters anywhere never changes the result.
#[test]
fn non_base_insertion_invariance() {
    let mut rng = ChaCha8Rng::seed_from_u64(999);
    for cm in cost_models() {
        for _ in 0..20 {
            let a_len = rng.gen_range(0..30);
            let a = random_seq(&mut rng, a_len, b"ACGTN");
            let b_len = rng.gen_range(0..30);
            let b = random_seq(&mut rng, b_len, b"ACGTN");
            let d = distance(cm, &a, &b);

            let mut noisy = a.clone();
            let at = rng.gen_range(0..=noisy.len());
            noisy.splice(at..at, b">seq 1\n".iter().copied());
            assert_eq!(distance(cm, &noisy, &b), d);
        }
    }
}

/// A length-asymmetric pair exercises the longer-first orientation in both
/// argument orders; `distance` already checks both.
#[test]
fn symmetry_with_unequal_lengths() {
    for cm in cost_models() {
        distance(cm, b"ACGTACGTACGT", b"TGCA");
        distance(cm, b"A", b"ACGTACGTACGTACGTACGT");
    }
}

/// The worklist-based memo engine is not limited by call-stack depth; a
/// recursive descent of depth `M + N` would be fragile here.
#[test]
fn memo_handles_long_sequences() {
    let cm = CostModel::default();
    let memo = Memo::new(cm, Dna::new());
    let a = vec![b'A'; 1_500];
    let b = vec![b'A'; 1_500];
    assert_eq!(memo.cost(&a, &b), 0);
    assert_eq!(memo.cost(&a, &b[..1_499]), cm.indel);
}
