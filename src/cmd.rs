use argh::FromArgs;
use log::{error, info};
use std::io;

use crate::permutation::permutation;
use crate::stats::{uniformity, SampleMode};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(description = "CLI for randqueue")]
struct Global {
    #[argh(subcommand)]
    nested: SubCommands,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommands {
    Permutation(Permutation),
    Uniformity(Uniformity),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "permutation",
    description = "print <count> tokens from stdin, picked uniformly at random"
)]
struct Permutation {
    #[argh(positional, description = "number of tokens to print")]
    count: usize,

    #[argh(
        option,
        short = 's',
        long = "seed",
        description = "seed for the queue's random source"
    )]
    seed: Option<u64>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "uniformity",
    description = "check that queue draws are uniform over many trials"
)]
struct Uniformity {
    #[argh(
        option,
        short = 's',
        long = "seed",
        description = "base seed, trial t uses seed + t"
    )]
    seed: Option<u64>,

    #[argh(
        option,
        short = 'n',
        long = "items",
        description = "number of items in each queue"
    )]
    items: Option<usize>,

    #[argh(
        option,
        short = 't',
        long = "trials",
        description = "number of independent trials"
    )]
    trials: Option<u64>,

    #[argh(
        option,
        short = 'm',
        long = "mode",
        description = "operation used to draw (dequeue, sample or iterate)"
    )]
    mode: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct PermutationOptions {
    pub count: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
pub struct UniformityOptions {
    pub seed: u64,
    pub items: usize,
    pub trials: u64,
    pub mode: SampleMode,
}

impl Default for UniformityOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            items: 10,
            trials: 100_000,
            mode: SampleMode::Dequeue,
        }
    }
}

impl From<Uniformity> for UniformityOptions {
    fn from(args: Uniformity) -> Self {
        let mut options = UniformityOptions::default();
        if let Some(seed) = args.seed {
            options.seed = seed;
        }
        if let Some(items) = args.items {
            options.items = items;
        }
        if let Some(trials) = args.trials {
            options.trials = trials;
        }
        if let Some(mode) = args.mode {
            match mode.parse() {
                Ok(mode) => options.mode = mode,
                Err(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            }
        }
        options
    }
}

pub fn run() {
    let args: Global = argh::from_env();
    match args.nested {
        SubCommands::Permutation(args) => {
            let options = PermutationOptions {
                count: args.count,
                seed: args.seed,
            };
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            if let Err(e) = permutation(stdin.lock(), &mut stdout, &options) {
                error!("Error running permutation: {}", e);
                std::process::exit(1);
            }
        }
        SubCommands::Uniformity(args) => {
            let options = UniformityOptions::from(args);
            info!("Running uniformity trials with options: {:?}", options);

            match uniformity(&options) {
                Ok(report) => {
                    for (item, count) in report.counts.iter().enumerate() {
                        println!(
                            "{:>6} {:>10} {:.5}",
                            item,
                            count,
                            report.frequency(item)
                        );
                    }
                    info!(
                        "Expected frequency {:.5}, max deviation {:.5}",
                        report.expected(),
                        report.max_deviation()
                    );
                }
                Err(e) => {
                    error!("Error running uniformity trials: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
