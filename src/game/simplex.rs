use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::{GameError, MatrixGame, Pivot, PivotOutcome, Solution, Tableau};

/// Pivots allowed per tableau cell when no explicit cap is configured.
pub const PIVOTS_PER_CELL: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Pivot cap before giving up with `NonConvergence`. Defaults to
    /// `PIVOTS_PER_CELL * rows * cols` of the initial tableau.
    pub max_pivots: Option<usize>,
    /// Objective entries must be below `-tolerance` to enter the basis, and
    /// pivot entries above `tolerance`.
    pub tolerance: f64,
    /// Retain every intermediate tableau in the solve history.
    pub keep_history: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_pivots: None,
            tolerance: 1e-12,
            keep_history: true,
        }
    }
}

/// Tableaux and pivot cells of one solve, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolveHistory {
    tableaux: Vec<Tableau>,
    pivots: Vec<(usize, usize)>,
}

impl SolveHistory {
    /// Initial tableau first, terminal tableau last. Empty when history
    /// retention is disabled.
    pub fn tableaux(&self) -> &[Tableau] {
        &self.tableaux
    }

    /// `(row, column)` of every pivot.
    pub fn pivots(&self) -> &[(usize, usize)] {
        &self.pivots
    }

    pub fn pivot_rows(&self) -> Vec<usize> {
        self.pivots.iter().map(|(row, _)| *row).collect()
    }

    pub fn num_pivots(&self) -> usize {
        self.pivots.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solve {
    pub solution: Solution,
    pub history: SolveHistory,
}

/// Drives the pivot engine from the initial tableau to an optimal one.
#[derive(Debug, Clone, Default)]
pub struct Simplex {
    config: SolverConfig,
}

impl Simplex {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn max_pivots(&self, tableau: &Tableau) -> usize {
        self.config
            .max_pivots
            .unwrap_or(PIVOTS_PER_CELL * tableau.rows() * tableau.cols())
    }

    /// Pivots until no objective entry is negative. Returns the terminal
    /// tableau and the history of the run.
    pub fn run(&self, initial: Tableau) -> Result<(Tableau, SolveHistory), GameError> {
        let max_pivots = self.max_pivots(&initial);
        let mut history = SolveHistory::default();
        let mut current = initial;

        loop {
            match current.pivot(self.config.tolerance) {
                PivotOutcome::Pivoted(Pivot {
                    tableau,
                    row,
                    column,
                }) => {
                    if history.num_pivots() >= max_pivots {
                        warn!("no optimal tableau after {max_pivots} pivots");
                        return Err(GameError::NonConvergence { pivots: max_pivots });
                    }
                    debug!(
                        "pivot {:<4} cell ({row}, {column}) objective {:.6}",
                        history.num_pivots() + 1,
                        tableau.objective_value()
                    );
                    history.pivots.push((row, column));
                    let previous = std::mem::replace(&mut current, tableau);
                    if self.config.keep_history {
                        history.tableaux.push(previous);
                    }
                }
                PivotOutcome::Optimal => break,
                PivotOutcome::Unbounded { column } => {
                    warn!("ratio test found no pivot row for column {column}");
                    return Err(GameError::UnboundedPivot { column });
                }
            }
        }

        if self.config.keep_history {
            history.tableaux.push(current.clone());
        }
        Ok((current, history))
    }

    pub fn solve(&self, game: &MatrixGame) -> Result<Solve, GameError> {
        let (m, n) = game.num_strategies();
        let (terminal, history) = self.run(Tableau::initial(game))?;
        let solution = Solution::extract(&terminal, history.pivot_rows()).inspect_err(|_| {
            warn!("terminal objective value is zero");
        })?;
        info!(
            "solved {m}x{n} game in {} pivots, value {:.6}",
            history.num_pivots(),
            solution.value()
        );
        Ok(Solve { solution, history })
    }
}
