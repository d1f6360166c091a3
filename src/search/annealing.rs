//! Simulated Annealing Search.
//!
//! A temperature-driven random walk from start toward goal. Worsening
//! moves are accepted with probability `exp(-delta / T)`, where `delta`
//! compares the candidate edge against the cost accumulated so far and
//! `T` cools geometrically after every step that does not reach the
//! goal. A run that cools out (or strands itself on visited nodes)
//! fails; the search is the best of several independent restarts.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

use std::fmt::Display;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::SearchAgent;
use super::types::{Route, SearchError};

/// Configuration for Simulated Annealing Search.
///
/// # Examples
///
/// ```
/// use u_pathsearch::search::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_restarts(20)
///     .with_initial_temperature(50.0)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Number of independent runs; the cheapest converged run wins.
    pub restarts: usize,

    /// Initial temperature. Higher values accept more uphill moves.
    pub initial_temperature: f64,

    /// Minimum temperature. A run that cools below this without reaching
    /// the goal has failed.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied after every step that
    /// does not land on the goal.
    pub alpha: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            restarts: 10,
            initial_temperature: 100.0,
            min_temperature: 1e-5,
            alpha: 0.9,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.restarts == 0 {
            return Err("restarts must be at least 1".into());
        }
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        Ok(())
    }
}

/// Result of a full annealing search: the best run plus convergence
/// statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealingOutcome<N> {
    /// Path of the best run. Ends at the goal only when converged.
    pub path: Vec<N>,

    /// Cost of the best run; `f64::INFINITY` when no run converged.
    pub cost: f64,

    /// How many runs reached the goal.
    pub converged_runs: usize,

    /// Total number of runs executed.
    pub restarts: usize,
}

impl<N> AnnealingOutcome<N> {
    /// Whether the best run reached the goal.
    pub fn converged(&self) -> bool {
        self.cost.is_finite()
    }

    /// Converts into a [`Route`], mapping a fully failed search to
    /// [`SearchError::NoPathFound`].
    pub fn into_route(self) -> Result<Route<N>, SearchError> {
        if self.cost.is_finite() {
            Ok(Route {
                path: self.path,
                cost: self.cost,
            })
        } else {
            Err(SearchError::NoPathFound)
        }
    }
}

impl<N: Clone + Ord + Display> SearchAgent<'_, N> {
    /// Runs Simulated Annealing Search, seeding the generator from
    /// `config.seed` (or entropy when unset).
    pub fn simulated_annealing(&self, config: &AnnealingConfig) -> Result<Route<N>, SearchError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.simulated_annealing_with_rng(config, &mut rng)
    }

    /// Runs Simulated Annealing Search with a caller-supplied generator.
    pub fn simulated_annealing_with_rng<R: Rng>(
        &self,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<Route<N>, SearchError> {
        self.anneal(config, rng).into_route()
    }

    /// Executes all restarts and returns the best run with statistics.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn anneal<R: Rng>(&self, config: &AnnealingConfig, rng: &mut R) -> AnnealingOutcome<N> {
        config.validate().expect("invalid AnnealingConfig");

        let mut best_path: Vec<N> = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut converged_runs = 0;

        for run in 0..config.restarts {
            let (path, cost) = self.anneal_once(config, rng);
            if cost.is_finite() {
                converged_runs += 1;
            }
            // Strict improvement only: ties keep the earliest run.
            if run == 0 || cost < best_cost {
                best_path = path;
                best_cost = cost;
            }
        }

        AnnealingOutcome {
            path: best_path,
            cost: best_cost,
            converged_runs,
            restarts: config.restarts,
        }
    }

    /// One annealing run. Returns the walked path and its cost, infinite
    /// when the run did not end on the goal.
    fn anneal_once<R: Rng>(&self, config: &AnnealingConfig, rng: &mut R) -> (Vec<N>, f64) {
        let goal = self.goal();

        let mut current = self.start().clone();
        let mut path = vec![current.clone()];
        let mut cost = 0.0;
        let mut temperature = config.initial_temperature;

        if current == *goal {
            return (path, cost);
        }

        while temperature > config.min_temperature {
            let mut neighbors: Vec<N> = self.graph().neighbors(&current).cloned().collect();
            if neighbors.is_empty() {
                break;
            }

            let mut next = neighbors[rng.random_range(0..neighbors.len())].clone();

            // One resample, excluding an already-visited pick.
            if path.contains(&next) && neighbors.len() > 1 {
                let revisit = next;
                neighbors.retain(|n| *n != revisit);
                next = neighbors[rng.random_range(0..neighbors.len())].clone();
            }

            // Still visited and nowhere else to go: the run is stranded.
            if path.contains(&next) && neighbors.len() == 1 {
                break;
            }

            let next_cost = match self.graph().cost(&current, &next) {
                Some(weight) => weight,
                None => break,
            };

            // The candidate edge is weighed against the accumulated path
            // cost, not the previous edge.
            let delta = next_cost - cost;
            if delta < 0.0 || (-delta / temperature).exp() > rng.random::<f64>() {
                path.push(next.clone());
                cost += next_cost;
                current = next;
            }

            if current == *goal {
                break;
            }
            temperature *= config.alpha;
        }

        if current == *goal {
            (path, cost)
        } else {
            (path, f64::INFINITY)
        }
    }
}
