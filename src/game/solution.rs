use ndarray::prelude::*;

use super::{GameError, Strategy, Tableau, Variable};

/// Value of the game and an optimal strategy for each player.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    value: f64,
    strategy: Strategy,
    pivot_rows: Vec<usize>,
}

impl Solution {
    /// Reads value and strategies from an optimal tableau.
    ///
    /// The objective right-hand side `v` equals `1 / (value + shift)`. The row
    /// player's strategy is the objective row over the slack block, the column
    /// player's the right-hand side of each row where a decision variable is
    /// basic, both scaled by `1 / v`.
    pub fn extract(tableau: &Tableau, pivot_rows: Vec<usize>) -> Result<Self, GameError> {
        let v = tableau.objective_value();
        if !v.is_finite() || v.abs() <= f64::EPSILON {
            return Err(GameError::DegenerateSolution);
        }

        let n = tableau.decision_count();
        let m = tableau.slack_count();

        let player1 = tableau.objective_row().slice(s![n..n + m]).mapv(|p| p / v);

        let rhs = tableau.rhs();
        let mut player2 = Array1::<f64>::zeros(n);
        for (row, variable) in tableau.basis().iter().enumerate() {
            if let Variable::Decision(col) = *variable {
                player2[col] = rhs[row] / v;
            }
        }

        Ok(Solution {
            value: 1. / v - tableau.shift(),
            strategy: Strategy(player1, player2),
            pivot_rows,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn player1(&self) -> &Array1<f64> {
        &self.strategy.0
    }

    pub fn player2(&self) -> &Array1<f64> {
        &self.strategy.1
    }

    /// Row of every pivot, in the order they were taken.
    pub fn pivot_rows(&self) -> &[usize] {
        &self.pivot_rows
    }
}
