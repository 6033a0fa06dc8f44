use ndarray::prelude::*;

use super::{GameError, Simplex, Solve, SolverConfig};

/// Payoff matrix of a two-player zero-sum game, seen from the row player.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGame {
    payoff: Array2<f64>,
}

/// Mixed strategy profile: row player's distribution, column player's distribution.
#[derive(Debug, Clone)]
pub struct Strategy(pub Array1<f64>, pub Array1<f64>);

impl PartialEq for Strategy {
    fn eq(&self, other: &Strategy) -> bool {
        self.0.abs_diff_eq(&other.0, 1e-6) && self.1.abs_diff_eq(&other.1, 1e-6)
    }
}

impl MatrixGame {
    pub fn new(payoff: Array2<f64>) -> Result<Self, GameError> {
        let (rows, cols) = payoff.dim();
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        if let Some(((row, col), _)) = payoff.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(GameError::NonFinitePayoff { row, col });
        }
        Ok(MatrixGame { payoff })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, GameError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(GameError::RaggedRow {
                row,
                expected: num_cols,
                found: r.len(),
            });
        }
        let entries: Vec<f64> = rows.into_iter().flatten().collect();
        let payoff = Array2::from_shape_vec((num_rows, num_cols), entries).map_err(|_| {
            GameError::InvalidDimensions {
                rows: num_rows,
                cols: num_cols,
            }
        })?;
        Self::new(payoff)
    }

    pub fn num_strategies(&self) -> (usize, usize) {
        self.payoff.dim()
    }

    pub fn payoff_matrix(&self) -> &Array2<f64> {
        &self.payoff
    }

    pub fn min_payoff(&self) -> f64 {
        self.payoff.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Expected payoff to the row player when both players follow `strategy`.
    pub fn strategy_payoff(&self, strategy: &Strategy) -> f64 {
        self.payoff.dot(&strategy.1).dot(&strategy.0)
    }

    /// Gain each player would get by switching to a best pure response.
    pub fn regret(&self, strategy: &Strategy) -> (f64, f64) {
        let strategy_payoff = self.strategy_payoff(strategy);
        let row_payoffs = self.payoff.dot(&strategy.1);
        let col_payoffs = strategy.0.dot(&self.payoff);

        let best_row = row_payoffs.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        let best_col = col_payoffs.fold(f64::INFINITY, |acc, &v| acc.min(v));
        (best_row - strategy_payoff, strategy_payoff - best_col)
    }

    pub fn is_equilibrium(&self, strategy: &Strategy, epsilon: f64) -> bool {
        let r = self.regret(strategy);

        r.0 < epsilon && r.1 < epsilon
    }

    pub fn solve(&self, config: &SolverConfig) -> Result<Solve, GameError> {
        Simplex::new(config.clone()).solve(self)
    }
}
