use crate::cmd::UniformityOptions;
use crate::queue::{QueueError, RandomizedQueue};
use hashbrown::HashMap;
use log::debug;
use rayon::prelude::*;
use std::str::FromStr;

// Which queue operation a trial uses to pick its item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    Dequeue,
    Sample,
    Iterate,
}

impl FromStr for SampleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dequeue" => Ok(SampleMode::Dequeue),
            "sample" => Ok(SampleMode::Sample),
            "iterate" => Ok(SampleMode::Iterate),
            other => Err(format!("Invalid mode: {}", other)),
        }
    }
}

/// The `UniformityReport` struct holds how often each item was picked across all trials.
///
/// # Fields
///
/// * `counts`: Pick count per item, indexed by the item value.
/// * `trials`: Number of trials that were run.
#[derive(Debug)]
pub struct UniformityReport {
    pub counts: Vec<u64>,
    pub trials: u64,
}

impl UniformityReport {
    pub fn expected(&self) -> f64 {
        1.0 / self.counts.len() as f64
    }

    pub fn frequency(&self, item: usize) -> f64 {
        self.counts[item] as f64 / self.trials as f64
    }

    /// Largest absolute gap between an item's empirical frequency and `1/n`.
    pub fn max_deviation(&self) -> f64 {
        let expected = self.expected();
        (0..self.counts.len())
            .map(|item| (self.frequency(item) - expected).abs())
            .fold(0.0, f64::max)
    }
}

// A fresh queue per trial, seeded from the base seed and the trial number
fn draw(options: &UniformityOptions, trial: u64) -> Result<usize, QueueError> {
    let mut queue = RandomizedQueue::with_seed(options.seed.wrapping_add(trial));
    queue.extend(0..options.items);

    let picked = match options.mode {
        SampleMode::Dequeue => queue.dequeue(),
        SampleMode::Sample => queue.sample().copied(),
        SampleMode::Iterate => queue.iter().advance().copied(),
    };
    picked
}

/// Runs independent single-pick trials in parallel and tallies which item each one picked.
///
/// # Returns
///
/// The tally, or `QueueError::Empty` when `options.items` is zero.
pub fn uniformity(options: &UniformityOptions) -> Result<UniformityReport, QueueError> {
    debug!(
        "Running {} {:?} trials over {} items",
        options.trials, options.mode, options.items
    );

    let tally = (0..options.trials)
        .into_par_iter()
        .map(|trial| draw(options, trial))
        .try_fold(HashMap::<usize, u64>::new, |mut tally, picked| {
            *tally.entry(picked?).or_insert(0) += 1;
            Ok::<_, QueueError>(tally)
        })
        .try_reduce(HashMap::new, |mut merged, partial| {
            for (item, count) in partial {
                *merged.entry(item).or_insert(0) += count;
            }
            Ok(merged)
        })?;

    let counts = (0..options.items)
        .map(|item| tally.get(&item).copied().unwrap_or(0))
        .collect();

    Ok(UniformityReport {
        counts,
        trials: options.trials,
    })
}
