// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the mask search strategies.
//!
//! One subcommand per strategy, each parameterized by the alphabet size `k`
//! and window length `n`. The library returns structured results; all
//! rendering happens here.

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};

use mask_search::search::debruijn::{build_mask, naive_mask};
use mask_search::search::exhaustive::ExhaustiveSearch;
use mask_search::search::random::RandomSearch;
use mask_search::{DigitOrder, Mask, PatternSpace, SearchEvent};

#[derive(Parser, Debug)]
#[command(name = "mask")]
#[command(about = "Search for the shortest sliding mask covering every dot pattern", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the optimal mask constructively from a de Bruijn sequence.
    Debruijn(SpaceArgs),

    /// Enumerate every mask per length until complete masks appear.
    Exhaustive {
        #[command(flatten)]
        space: SpaceArgs,

        /// First length to try (defaults to the window length).
        #[arg(long)]
        min_len: Option<usize>,

        /// Give up past this length.
        #[arg(long, default_value_t = 24)]
        max_len: usize,
    },

    /// Hunt for short masks by random trials below a shrinking bound.
    Random {
        #[command(flatten)]
        space: SpaceArgs,

        /// Initial length bound (defaults to the naive mask length).
        #[arg(long)]
        bound: Option<usize>,

        /// Stop after this many trials (runs until killed otherwise).
        #[arg(long)]
        attempts: Option<u64>,
    },

    /// Build the naive baseline mask (all patterns back to back).
    Naive(SpaceArgs),
}

#[derive(Args, Debug)]
struct SpaceArgs {
    /// Alphabet size (2 for a dot column, 4 for a dot row).
    #[arg(short = 'k', long, default_value_t = 2)]
    alphabet: usize,

    /// Window length (dots per column / rows per cell).
    #[arg(short = 'n', long, default_value_t = 3)]
    window: usize,
}

impl SpaceArgs {
    /// The dot-row reading packs row i into bits [2i, 2i+1], so quaternary
    /// spaces use the least-significant-first digit order; everything else
    /// uses the binary-string convention.
    fn space(&self) -> PatternSpace {
        if self.alphabet == 4 {
            PatternSpace::with_order(self.alphabet, self.window, DigitOrder::LeastSignificantFirst)
        } else {
            PatternSpace::new(self.alphabet, self.window)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Debruijn(args) => run_debruijn(&args.space()),
        Command::Exhaustive {
            space,
            min_len,
            max_len,
        } => run_exhaustive(&space.space(), min_len, max_len),
        Command::Random {
            space,
            bound,
            attempts,
        } => run_random(&space.space(), bound, attempts),
        Command::Naive(args) => run_naive(&args.space()),
    }
}

fn run_debruijn(space: &PatternSpace) -> Result<()> {
    let mask = build_mask(space.alphabet(), space.window());
    if !space.is_complete(&mask)? {
        bail!("constructed mask failed the completeness check");
    }
    println!(
        "Optimal mask for k={}, n={} ({} patterns):",
        space.alphabet(),
        space.window(),
        space.pattern_count()
    );
    print_mask(&mask, space);
    println!(
        "Length {} = {} patterns + {} overlap symbols; naive baseline is {}.",
        mask.len(),
        space.pattern_count(),
        space.window() - 1,
        space.window() * space.pattern_count()
    );
    Ok(())
}

fn run_exhaustive(space: &PatternSpace, min_len: Option<usize>, max_len: usize) -> Result<()> {
    if space.pattern_count() > 64 {
        eprintln!(
            "[Exhaustive] Warning: {} patterns; expect k^L candidates per length. \
             The constructive or random strategy is a better fit.",
            space.pattern_count()
        );
    }
    let min_len = min_len.unwrap_or(space.window());
    let mut search = ExhaustiveSearch::new(*space);
    let outcome = search.run(min_len, max_len)?;
    match outcome.length {
        Some(length) => {
            println!(
                "{} complete mask(s) at the shortest length {}:",
                outcome.masks.len(),
                length
            );
            for mask in &outcome.masks {
                print_mask(mask, space);
            }
        }
        None => {
            println!(
                "No complete mask up to length {}; raise --max-len or switch strategy.",
                max_len
            );
        }
    }
    Ok(())
}

fn run_random(space: &PatternSpace, bound: Option<usize>, attempts: Option<u64>) -> Result<()> {
    let bound = bound.unwrap_or(space.window() * space.pattern_count());
    let mut search = RandomSearch::new(*space, bound);
    if let Some(cap) = attempts {
        search = search.max_attempts(cap);
    }
    println!(
        "Random hunt for k={}, n={}: lengths in [{}, {}], improvements below reported as found.",
        space.alphabet(),
        space.window(),
        space.optimal_mask_len(),
        bound
    );
    for event in search {
        match event {
            SearchEvent::Improvement {
                mask,
                length,
                attempts,
            } => {
                println!("New complete mask of length {} after {} trials:", length, attempts);
                print_mask(&mask, space);
            }
            SearchEvent::Progress { attempts, best } => {
                eprintln!("[Random] {} trials, best length {}.", attempts, best);
            }
        }
    }
    Ok(())
}

fn run_naive(space: &PatternSpace) -> Result<()> {
    let mask = naive_mask(space);
    if !space.is_complete(&mask)? {
        bail!("naive mask failed the completeness check");
    }
    println!(
        "Naive baseline for k={}, n={} (length {}):",
        space.alphabet(),
        space.window(),
        mask.len()
    );
    print_mask(&mask, space);
    Ok(())
}

fn print_mask(mask: &Mask, space: &PatternSpace) {
    match mask.transition_count(space.alphabet()) {
        Ok(transitions) => println!("  {}  (len {}, {} transitions)", mask, mask.len(), transitions),
        Err(_) => println!("  {}  (len {})", mask, mask.len()),
    }
}
