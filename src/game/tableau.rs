use std::fmt;

use ndarray::prelude::*;

use super::MatrixGame;

/// Variable of the linear program, used to label the basic variable of each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// Weight on one of the column player's pure strategies.
    Decision(usize),
    /// Slack of one of the row player's constraints.
    Slack(usize),
}

/// Simplex table for the game's linear program.
///
/// The first `decision_count` columns hold the shifted payoffs, the next
/// `slack_count` columns the slack identity block and the last column the
/// right-hand side. The last row is the objective row.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    coefficients: Array2<f64>,
    basis: Vec<Variable>,
    slack_count: usize,
    decision_count: usize,
    shift: f64,
}

impl Tableau {
    /// Builds the first tableau of a game.
    ///
    /// Every payoff is shifted by `max(0, 1 - min payoff)` so all payoff
    /// entries are at least 1, which keeps the ratio test well defined.
    pub fn initial(game: &MatrixGame) -> Tableau {
        let (m, n) = game.num_strategies();
        let min_payoff = game.min_payoff();
        let shift = if min_payoff < 1. { 1. - min_payoff } else { 0. };
        // `p + (1 - min)` may round below 1, `(p - min) + 1` cannot.
        let shifted = if shift > 0. {
            game.payoff_matrix().mapv(|p| (p - min_payoff) + 1.)
        } else {
            game.payoff_matrix().clone()
        };

        let mut coefficients = Array2::<f64>::zeros((m + 1, n + m + 1));

        coefficients.slice_mut(s![0..m, 0..n]).assign(&shifted);
        coefficients
            .slice_mut(s![0..m, n..n + m])
            .assign(&Array2::eye(m));
        coefficients.slice_mut(s![0..m, n + m]).fill(1.);
        coefficients.slice_mut(s![m, 0..n]).fill(-1.);

        Tableau {
            coefficients,
            basis: (0..m).map(Variable::Slack).collect(),
            slack_count: m,
            decision_count: n,
            shift,
        }
    }

    pub(super) fn from_parts(
        coefficients: Array2<f64>,
        basis: Vec<Variable>,
        slack_count: usize,
        decision_count: usize,
        shift: f64,
    ) -> Tableau {
        Tableau {
            coefficients,
            basis,
            slack_count,
            decision_count,
            shift,
        }
    }

    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coefficients
    }

    pub fn basis(&self) -> &[Variable] {
        &self.basis
    }

    pub fn rows(&self) -> usize {
        self.coefficients.nrows()
    }

    pub fn cols(&self) -> usize {
        self.coefficients.ncols()
    }

    pub fn slack_count(&self) -> usize {
        self.slack_count
    }

    pub fn decision_count(&self) -> usize {
        self.decision_count
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn objective_row(&self) -> ArrayView1<'_, f64> {
        self.coefficients.row(self.rows() - 1)
    }

    pub fn rhs(&self) -> ArrayView1<'_, f64> {
        self.coefficients.column(self.cols() - 1)
    }

    /// Right-hand side of the objective row.
    pub fn objective_value(&self) -> f64 {
        self.coefficients[[self.rows() - 1, self.cols() - 1]]
    }

    /// Variable owning tableau column `col`, `None` for the right-hand side.
    pub fn variable(&self, col: usize) -> Option<Variable> {
        if col < self.decision_count {
            Some(Variable::Decision(col))
        } else if col < self.decision_count + self.slack_count {
            Some(Variable::Slack(col - self.decision_count))
        } else {
            None
        }
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = "-".repeat(7 * self.cols() + 2);
        for (row, values) in self.coefficients.rows().into_iter().enumerate() {
            if row == self.slack_count {
                writeln!(f, "{divider}")?;
            }
            for (col, value) in values.iter().enumerate() {
                if col == self.decision_count || col == self.decision_count + self.slack_count {
                    write!(f, "|")?;
                }
                write!(f, "{value:6.2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
