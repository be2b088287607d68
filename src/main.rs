use clap::Parser;
use itertools::Itertools;
use nwdist::cli::{Cli, PairResult};
use nwdist::Aligner;
use std::ops::ControlFlow;

fn main() {
    let args = Cli::parse();
    let engine = args.engine.build(args.costs, args.block_size);

    let mut results = Vec::new();
    args.process_input_pairs(|a, b| {
        let distance = engine.cost(a, b);

        if args.silent == 0 {
            let skipped = Cli::skipped_characters(a) + Cli::skipped_characters(b);
            if skipped > 0 {
                eprintln!("skipped {skipped} non-base characters");
            }
        }
        if args.silent <= 1 {
            println!("{distance}");
        }

        results.push(PairResult {
            len_a: a.len(),
            len_b: b.len(),
            distance,
        });
        ControlFlow::Continue(())
    });

    if let Some(output) = &args.output {
        std::fs::write(
            output,
            results
                .iter()
                .map(|r| format!("{}\t{}\t{}\n", r.len_a, r.len_b, r.distance))
                .join(""),
        )
        .unwrap();
    }
}
