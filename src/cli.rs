//! Command line interface: argument parsing and input handling.
//!
//! The core engines only ever see `(Seq, Seq)` pairs. FASTA parsing, pair
//! generation, and skipped-character reporting all stay on this side of
//! that boundary.

use crate::{Aligner, Blocked, Cost, CostModel, Dna, Memo, Seq, Sequence, Tabulation};
use bio::io::fasta;
use clap::{value_parser, Parser, ValueEnum};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    ops::ControlFlow,
    path::PathBuf,
};

#[derive(ValueEnum, Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EngineType {
    Memo,
    #[default]
    Tabulation,
    Blocked,
}

impl EngineType {
    pub fn build(&self, cm: CostModel, block_size: usize) -> Box<dyn Aligner> {
        match self {
            EngineType::Memo => Box::new(Memo::new(cm, Dna::new())),
            EngineType::Tabulation => Box::new(Tabulation::new(cm, Dna::new())),
            EngineType::Blocked => Box::new(Blocked::new(cm, Dna::new(), block_size)),
        }
    }
}

/// Options to generate a random input pair.
#[derive(clap::Args, Serialize, Deserialize)]
pub struct GenerateArgs {
    /// Length of the generated sequences.
    #[clap(short = 'n', long, default_value_t = 0, help_heading = "Generated input")]
    pub length: usize,

    /// Error rate between the generated pair.
    #[clap(short, long, default_value_t = 0.05, help_heading = "Generated input")]
    pub error_rate: f32,

    /// Number of pairs to generate.
    #[clap(long, default_value_t = 1, help_heading = "Generated input")]
    pub cnt: usize,

    /// Seed of the generator. Chosen and printed when not given.
    #[clap(long, help_heading = "Generated input", hide_short_help = true)]
    pub seed: Option<u64>,
}

impl GenerateArgs {
    fn generate_pair(&self, rng: &mut ChaCha8Rng) -> (Sequence, Sequence) {
        let base = |rng: &mut ChaCha8Rng| b"ACGT"[rng.gen_range(0..4)];
        let a: Sequence = (0..self.length).map(|_| base(rng)).collect();
        // Mutate `a` with uniform substitutions, insertions, and deletions.
        let mut b = Sequence::with_capacity(a.len());
        for &c in &a {
            if rng.gen::<f32>() < self.error_rate {
                match rng.gen_range(0..3) {
                    0 => b.push(base(rng)),
                    1 => {
                        b.push(base(rng));
                        b.push(c);
                    }
                    _ => {}
                }
            } else {
                b.push(c);
            }
        }
        (a, b)
    }
}

/// Compute the edit distance between pairs of genetic sequences.
#[derive(Parser, Serialize, Deserialize)]
#[clap(author, about, disable_version_flag(true))]
#[clap(group(
    clap::ArgGroup::new("input_type")
        .required(true)
        .args(&["input", "length"]),
))]
pub struct Cli {
    /// A .seq, .txt, or Fasta file with sequence pairs to align.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub input: Option<PathBuf>,

    /// Write a .tsv of `{len_a}\t{len_b}\t{distance}` lines.
    #[clap(short, long, value_parser = value_parser!(PathBuf), display_order = 1)]
    pub output: Option<PathBuf>,

    /// The engine to use.
    #[clap(long, default_value = "tabulation")]
    pub engine: EngineType,

    /// Tile edge length for the blocked engine.
    #[clap(long, default_value_t = 256)]
    pub block_size: usize,

    /// Print less. Once: no skipped-character diagnostics. Twice: no
    /// per-pair output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub silent: u8,

    #[clap(flatten)]
    pub costs: CostModel,

    #[clap(flatten)]
    pub generate: GenerateArgs,
}

impl Cli {
    /// Count of characters the engines will skip, for diagnostics only.
    pub fn skipped_characters(seq: Seq) -> usize {
        use crate::BaseClassifier;
        let bases = Dna::new();
        seq.iter().filter(|&&c| !bases.is_base(c)).count()
    }

    /// Call the given function for each pair in the input.
    pub fn process_input_pairs(&self, mut run_pair: impl FnMut(Seq, Seq) -> ControlFlow<()>) {
        if let Some(input) = &self.input {
            // Parse file
            let files = if input.is_file() {
                vec![input.clone()]
            } else {
                input
                    .read_dir()
                    .unwrap_or_else(|_| panic!("{} is not a file or directory", input.display()))
                    .map(|x| x.unwrap().path())
                    .collect_vec()
            };

            'outer: for f in files {
                match f.extension().expect("Unknown file extension") {
                    ext if ext == "seq" || ext == "txt" => {
                        let f = std::fs::File::open(&f).unwrap();
                        let f = BufReader::new(f);
                        for (mut a, mut b) in f.lines().map(|l| l.unwrap().into_bytes()).tuples() {
                            if ext == "seq" {
                                assert_eq!(a.remove(0), b'>');
                                assert_eq!(b.remove(0), b'<');
                            }
                            if let ControlFlow::Break(()) = run_pair(&a, &b) {
                                break 'outer;
                            }
                        }
                    }
                    ext if ext == "fna" || ext == "fa" || ext == "fasta" => {
                        for (a, b) in fasta::Reader::new(BufReader::new(File::open(&f).unwrap()))
                            .records()
                            .tuples()
                        {
                            if let ControlFlow::Break(()) =
                                run_pair(a.unwrap().seq(), b.unwrap().seq())
                            {
                                break 'outer;
                            }
                        }
                    }
                    ext => {
                        unreachable!(
                            "Unknown file extension {ext:?}. Must be in {{seq,txt,fna,fa,fasta}}."
                        )
                    }
                };
            }
        } else {
            // Generate random input.
            let seed = self.generate.seed.unwrap_or_else(|| {
                let seed = ChaCha8Rng::from_entropy().gen_range(0..1_000);
                eprintln!("Seed: {seed}");
                seed
            });
            let ref mut rng = ChaCha8Rng::seed_from_u64(seed);
            for _ in 0..self.generate.cnt {
                let (a, b) = self.generate.generate_pair(rng);
                if let ControlFlow::Break(()) = run_pair(&a, &b) {
                    break;
                }
            }
        }
    }
}

/// One computed pair, for the optional `-o` file.
pub struct PairResult {
    pub len_a: usize,
    pub len_b: usize,
    pub distance: Cost,
}
