//! Classification of input characters into bases.
//!
//! The engines never look at characters directly; they ask a
//! [`BaseClassifier`] whether a character is a base at all, whether it is an
//! ambiguous ("unknown") base, and whether two bases are the same. Anything
//! that is not a base (FASTA headers, newlines, ...) is skipped for free.

/// The oracle the distance engines consume.
///
/// `is_unknown_base` and `is_same_base` are only meaningful for characters
/// for which `is_base` holds.
pub trait BaseClassifier {
    /// Is `c` a recognized nucleotide symbol?
    fn is_base(&self, c: u8) -> bool;

    /// Is `c` a recognized but ambiguous symbol (a wildcard code)?
    fn is_unknown_base(&self, c: u8) -> bool;

    /// Are two recognized bases the same, up to normalization?
    fn is_same_base(&self, c1: u8, c2: u8) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseClass {
    /// Not part of the alphabet; skipped at zero cost.
    Other,
    /// An unambiguous base, stored as its uppercase code.
    Known(u8),
    /// An ambiguity code, stored as its uppercase code.
    Ambiguous(u8),
}

/// Classifier for the DNA alphabet, case-insensitive.
///
/// `A`, `C`, `G`, `T` are the unambiguous bases; the any-base wildcard `N`
/// and `U` are recognized but ambiguous. Everything else, including FASTA
/// header and formatting characters, is not a base. Construction
/// builds the 256-entry lookup table; there is no further initialization
/// step.
#[derive(Clone)]
pub struct Dna {
    classes: [BaseClass; 256],
}

const KNOWN: &[u8] = b"ACGT";
const AMBIGUOUS: &[u8] = b"NU";

impl Dna {
    pub fn new() -> Self {
        let mut classes = [BaseClass::Other; 256];
        for &c in KNOWN {
            classes[c as usize] = BaseClass::Known(c);
            classes[c.to_ascii_lowercase() as usize] = BaseClass::Known(c);
        }
        for &c in AMBIGUOUS {
            classes[c as usize] = BaseClass::Ambiguous(c);
            classes[c.to_ascii_lowercase() as usize] = BaseClass::Ambiguous(c);
        }
        Dna { classes }
    }

    /// The uppercase code of a recognized base, or `None` for other characters.
    fn normalized(&self, c: u8) -> Option<u8> {
        match self.classes[c as usize] {
            BaseClass::Other => None,
            BaseClass::Known(n) | BaseClass::Ambiguous(n) => Some(n),
        }
    }
}

impl Default for Dna {
    fn default() -> Self {
        Dna::new()
    }
}

impl BaseClassifier for Dna {
    fn is_base(&self, c: u8) -> bool {
        self.classes[c as usize] != BaseClass::Other
    }

    fn is_unknown_base(&self, c: u8) -> bool {
        matches!(self.classes[c as usize], BaseClass::Ambiguous(_))
    }

    fn is_same_base(&self, c1: u8, c2: u8) -> bool {
        match (self.normalized(c1), self.normalized(c2)) {
            (Some(n1), Some(n2)) => n1 == n2,
            _ => false,
        }
    }
}
