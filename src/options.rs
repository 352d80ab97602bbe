//! Search configuration.

use crate::error::{invalid_parameter, Result};
use std::env;

/// Environment variable holding the worker count for [`SolveOptions::from_env`].
pub const WORKERS_VAR: &str = "POLYPACK_WORKERS";

/// Environment variable toggling pruning for [`SolveOptions::from_env`].
pub const PRUNING_VAR: &str = "POLYPACK_PRUNING";

/// How the first level of the search is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Run the whole search lazily on the calling thread.
    #[default]
    Sequential,
    /// Split the placements of the first piece across a pool of this many
    /// worker threads. Zero lets the pool pick one thread per CPU.
    Workers(usize),
}

/// Options for [`Engine::solve_with`](crate::Engine::solve_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Where the search runs.
    pub parallelism: Parallelism,
    /// Whether to discard boards with a region smaller than the smallest
    /// remaining piece. When the pieces cover the board exactly, turning this
    /// off never changes the solutions, only how long it takes to find them.
    /// Otherwise pruning also drops solutions that leave a small region
    /// uncovered.
    pub pruning: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            parallelism: Parallelism::Sequential,
            pruning: true,
        }
    }
}

impl SolveOptions {
    /// Create the default options: sequential search with pruning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parallelism.
    pub fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Use a pool of `workers` threads for the first level of the search.
    pub fn workers(self, workers: usize) -> Self {
        self.parallelism(Parallelism::Workers(workers))
    }

    /// Enable or disable connectivity pruning.
    pub fn pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Read options from the `POLYPACK_WORKERS` and `POLYPACK_PRUNING`
    /// environment variables.
    ///
    /// A positive worker count selects a parallel search, while `0` or an
    /// unset variable keeps it sequential. Pruning accepts
    /// `1/true/on/yes` and `0/false/off/no`.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidParameter`](crate::PuzzleError) if a
    /// variable is set to a value that cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(WORKERS_VAR).ok(), env::var(PRUNING_VAR).ok())
    }

    fn from_vars(workers: Option<String>, pruning: Option<String>) -> Result<Self> {
        let mut options = Self::default();

        if let Some(value) = workers {
            let count = value
                .trim()
                .parse::<usize>()
                .map_err(|err| invalid_parameter(WORKERS_VAR, &value, &err))?;
            if count > 0 {
                options = options.workers(count);
            }
        }

        if let Some(value) = pruning {
            let enabled = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => true,
                "0" | "false" | "off" | "no" => false,
                _ => {
                    return Err(invalid_parameter(
                        PRUNING_VAR,
                        &value,
                        &"expected one of 1/true/on/yes or 0/false/off/no",
                    ))
                }
            };
            options = options.pruning(enabled);
        }

        log::debug!("Loaded solve options [{:?}].", options);

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PuzzleError;

    #[test]
    fn defaults() {
        let options = SolveOptions::new();
        assert_eq!(options.parallelism, Parallelism::Sequential);
        assert!(options.pruning);
    }

    #[test]
    fn builder() {
        let options = SolveOptions::new().workers(4).pruning(false);
        assert_eq!(options.parallelism, Parallelism::Workers(4));
        assert!(!options.pruning);
    }

    #[test]
    fn unset_vars_give_defaults() {
        assert_eq!(
            SolveOptions::from_vars(None, None).unwrap(),
            SolveOptions::default()
        );
    }

    #[test]
    fn vars_are_parsed() {
        let options =
            SolveOptions::from_vars(Some(" 8 ".to_string()), Some("off".to_string())).unwrap();
        assert_eq!(options.parallelism, Parallelism::Workers(8));
        assert!(!options.pruning);

        let options = SolveOptions::from_vars(Some("0".to_string()), Some("TRUE".to_string()))
            .unwrap();
        assert_eq!(options.parallelism, Parallelism::Sequential);
        assert!(options.pruning);
    }

    #[test]
    fn bad_vars_are_errors() {
        let err = SolveOptions::from_vars(Some("lots".to_string()), None).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InvalidParameter {
                parameter: WORKERS_VAR,
                ..
            }
        ));

        let err = SolveOptions::from_vars(None, Some("maybe".to_string())).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::InvalidParameter {
                parameter: PRUNING_VAR,
                ..
            }
        ));
    }
}
