use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use treewise::bst::{self, Bst, BstOp};
use treewise::{
    arrays::{four_number_sum, three_number_sum, two_number_sum},
    right_smaller_than, same_bsts, same_bsts_optimized,
};

#[derive(Parser, Debug)]
#[command(name = "treewise", about = "Binary search tree toolkit and classic array exercises")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check whether two insertion sequences build the same BST.
    SameBsts {
        /// First sequence (comma-separated integers).
        first: String,
        /// Second sequence (comma-separated integers).
        second: String,
        /// Use the naive partition-copying checker.
        #[arg(long)]
        naive: bool,
    },
    /// Count, for each element, the strictly smaller elements to its right.
    RightSmallerThan {
        /// Input sequence (comma-separated integers).
        sequence: String,
    },
    /// Find the stored value closest to a target in the BST the sequence builds.
    ClosestValue {
        /// Insertion sequence (comma-separated integers).
        sequence: String,
        /// Target value.
        target: i32,
    },
    /// Replay a BST operations file (`insert 10` / `contains 5` / `remove 10` per line).
    ConstructBst {
        /// Operations file.
        operations: PathBuf,
    },
    /// Find two elements summing to a target.
    TwoSum {
        /// Input sequence (comma-separated integers).
        sequence: String,
        /// Target sum.
        target: i32,
    },
    /// Find all triplets summing to a target.
    ThreeSum {
        /// Input sequence (comma-separated integers).
        sequence: String,
        /// Target sum.
        target: i32,
    },
    /// Find all quadruplets summing to a target.
    FourSum {
        /// Input sequence (comma-separated integers).
        sequence: String,
        /// Target sum.
        target: i32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::SameBsts {
            first,
            second,
            naive,
        } => run_same_bsts(&first, &second, naive)?,
        Commands::RightSmallerThan { sequence } => run_right_smaller_than(&sequence)?,
        Commands::ClosestValue { sequence, target } => run_closest_value(&sequence, target)?,
        Commands::ConstructBst { operations } => run_construct_bst(operations)?,
        Commands::TwoSum { sequence, target } => run_two_sum(&sequence, target)?,
        Commands::ThreeSum { sequence, target } => run_three_sum(&sequence, target)?,
        Commands::FourSum { sequence, target } => run_four_sum(&sequence, target)?,
    }

    Ok(())
}

fn run_same_bsts(first: &str, second: &str, naive: bool) -> Result<()> {
    let first = parse_sequence(first).context("failed to parse first sequence")?;
    let second = parse_sequence(second).context("failed to parse second sequence")?;

    let same = if naive {
        same_bsts(&first, &second)
    } else {
        same_bsts_optimized(&first, &second)
    };

    println!("{same}");
    Ok(())
}

fn run_right_smaller_than(sequence: &str) -> Result<()> {
    let sequence = parse_sequence(sequence).context("failed to parse sequence")?;
    println!("{:?}", right_smaller_than(&sequence));
    Ok(())
}

fn run_closest_value(sequence: &str, target: i32) -> Result<()> {
    let sequence = parse_sequence(sequence).context("failed to parse sequence")?;
    let tree = Bst::from_values(&sequence);

    match tree.closest_value(target) {
        Some(value) => println!("{value}"),
        None => println!("tree is empty"),
    }
    Ok(())
}

fn run_construct_bst(operations_path: PathBuf) -> Result<()> {
    let reader = BufReader::new(File::open(&operations_path).with_context(|| {
        format!(
            "failed to open operations file {}",
            operations_path.display()
        )
    })?);

    let mut operations = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let op: BstOp = line
            .parse()
            .with_context(|| format!("invalid operation on line {}", line_no + 1))?;
        operations.push(op);
    }

    let tree = bst::construct(&operations);
    println!("{tree}");
    Ok(())
}

fn run_two_sum(sequence: &str, target: i32) -> Result<()> {
    let sequence = parse_sequence(sequence).context("failed to parse sequence")?;

    match two_number_sum(&sequence, target) {
        Some((a, b)) => println!("[{a}, {b}]"),
        None => println!("no pair sums to {target}"),
    }
    Ok(())
}

fn run_three_sum(sequence: &str, target: i32) -> Result<()> {
    let sequence = parse_sequence(sequence).context("failed to parse sequence")?;
    for triplet in three_number_sum(&sequence, target) {
        println!("{triplet:?}");
    }
    Ok(())
}

fn run_four_sum(sequence: &str, target: i32) -> Result<()> {
    let sequence = parse_sequence(sequence).context("failed to parse sequence")?;
    for quadruplet in four_number_sum(&sequence, target) {
        println!("{quadruplet:?}");
    }
    Ok(())
}

fn parse_sequence(text: &str) -> Result<Vec<i32>> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse()
                .with_context(|| format!("invalid integer '{token}'"))
        })
        .collect()
}
