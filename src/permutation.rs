use crate::cmd::PermutationOptions;
use crate::queue::{QueueError, RandomizedQueue};
use log::debug;
use std::io::{BufRead, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PermutationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("queue error: {0}")]
    Queue(#[from] QueueError),
    #[error("asked for {requested} items but only {available} were read")]
    NotEnoughItems { requested: usize, available: usize },
}

// Reads every whitespace-separated token from `input` and writes `options.count` of them,
// chosen uniformly at random without replacement, one per line.
pub fn permutation<I: BufRead, W: Write>(
    mut input: I,
    output: &mut W,
    options: &PermutationOptions,
) -> Result<usize, PermutationError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let mut queue = match options.seed {
        Some(seed) => RandomizedQueue::with_seed(seed),
        None => RandomizedQueue::new(),
    };
    queue.extend(text.split_whitespace());
    debug!("Read {} tokens into the queue", queue.len());

    if options.count > queue.len() {
        return Err(PermutationError::NotEnoughItems {
            requested: options.count,
            available: queue.len(),
        });
    }

    for _ in 0..options.count {
        writeln!(output, "{}", queue.dequeue()?)?;
    }
    output.flush()?;

    Ok(options.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(count: usize) -> PermutationOptions {
        PermutationOptions {
            count,
            seed: Some(42),
        }
    }

    #[test]
    fn prints_distinct_tokens_from_input() {
        let input = "AA BB BB BB BB BB CC CC\nDD EE";
        let mut output = Vec::new();

        let written = permutation(input.as_bytes(), &mut output, &options(4)).unwrap();
        assert_eq!(written, 4);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);

        let mut pool: Vec<&str> = input.split_whitespace().collect();
        for line in lines {
            let position = pool.iter().position(|token| *token == line).unwrap();
            pool.swap_remove(position);
        }
    }

    #[test]
    fn zero_count_prints_nothing() {
        let mut output = Vec::new();
        let written = permutation("A B C".as_bytes(), &mut output, &options(0)).unwrap();
        assert_eq!(written, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn whole_input_is_a_permutation() {
        let mut output = Vec::new();
        permutation("1 2 3 4 5 6 7 8".as_bytes(), &mut output, &options(8)).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines: Vec<&str> = text.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn too_large_count_fails_before_writing() {
        let mut output = Vec::new();
        let result = permutation("A B".as_bytes(), &mut output, &options(3));
        assert!(matches!(
            result,
            Err(PermutationError::NotEnoughItems {
                requested: 3,
                available: 2
            })
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn same_seed_same_output() {
        let run = || {
            let mut output = Vec::new();
            permutation("a b c d e f g h i j".as_bytes(), &mut output, &options(5)).unwrap();
            output
        };
        assert_eq!(run(), run());
    }
}
