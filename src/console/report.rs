use std::fmt;

use itertools::Itertools;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::Solve;

use super::ConsoleError;

/// Text rendering of a solve: every retained tableau, then strategies and value.
pub struct Report<'a> {
    solve: &'a Solve,
}

impl<'a> Report<'a> {
    pub fn new(solve: &'a Solve) -> Self {
        Self { solve }
    }
}

fn format_strategy(strategy: &Array1<f64>) -> String {
    strategy.iter().map(|p| format!("{p:4.2}")).join(", ")
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tableaux = self.solve.history.tableaux();
        for (i, tableau) in tableaux.iter().enumerate() {
            if i == 0 {
                writeln!(f, "Initial Tableau:")?;
            } else if i == tableaux.len() - 1 {
                writeln!(f, "Final Tableau:")?;
            } else {
                writeln!(f, "Tableau {i}:")?;
            }
            writeln!(f, "{tableau}")?;
        }

        let solution = &self.solve.solution;
        writeln!(
            f,
            "Player 1 Optimal Strategy: ( {} )",
            format_strategy(solution.player1())
        )?;
        writeln!(
            f,
            "Player 2 Optimal Strategy: ( {} )",
            format_strategy(solution.player2())
        )?;
        writeln!(f, "Value: {:5.2}", solution.value())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub value: f64,
    pub player1: Vec<f64>,
    pub player2: Vec<f64>,
    pub pivots: Vec<(usize, usize)>,
}

impl From<&Solve> for JsonReport {
    fn from(solve: &Solve) -> Self {
        Self {
            value: solve.solution.value(),
            player1: solve.solution.player1().to_vec(),
            player2: solve.solution.player2().to_vec(),
            pivots: solve.history.pivots().to_vec(),
        }
    }
}

impl JsonReport {
    pub fn to_json(&self) -> Result<String, ConsoleError> {
        serde_json::to_string_pretty(self).map_err(ConsoleError::WriteJsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatrixGame, SolverConfig};
    use ndarray::array;

    fn solve(config: &SolverConfig) -> Solve {
        MatrixGame::new(array![[5.]]).unwrap().solve(config).unwrap()
    }

    #[test]
    fn text_report() {
        let s = solve(&SolverConfig::default());

        let expected = "Initial Tableau:\n\
                        \x20 5.00 |  1.00 |  1.00 \n\
                        -----------------------\n\
                        \x20-1.00 |  0.00 |  0.00 \n\
                        \n\
                        Final Tableau:\n\
                        \x20 1.00 |  0.20 |  0.20 \n\
                        -----------------------\n\
                        \x20 0.00 |  0.20 |  0.20 \n\
                        \n\
                        Player 1 Optimal Strategy: ( 1.00 )\n\
                        Player 2 Optimal Strategy: ( 1.00 )\n\
                        Value:  5.00\n";
        assert_eq!(Report::new(&s).to_string(), expected);
    }

    #[test]
    fn intermediate_tableaux() {
        let game = MatrixGame::new(array![[1., -1.], [-1., 1.]]).unwrap();
        let s = game.solve(&SolverConfig::default()).unwrap();
        let text = Report::new(&s).to_string();

        assert!(text.starts_with("Initial Tableau:\n"));
        assert!(text.contains("Tableau 1:\n"));
        assert!(text.contains("Final Tableau:\n"));
        assert!(text.contains("Player 1 Optimal Strategy: ( 0.50, 0.50 )\n"));
        assert!(text.contains("Player 2 Optimal Strategy: ( 0.50, 0.50 )\n"));
        assert!(text.ends_with("Value:  0.00\n"));
    }

    #[test]
    fn report_without_tableaux() {
        let config = SolverConfig {
            keep_history: false,
            ..SolverConfig::default()
        };
        let s = solve(&config);

        assert!(Report::new(&s).to_string().starts_with("Player 1 Optimal Strategy"));
    }

    #[test]
    fn json_report() {
        let s = solve(&SolverConfig::default());
        let json = JsonReport::from(&s).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["player1"], serde_json::json!([1.0]));
        assert_eq!(parsed["player2"], serde_json::json!([1.0]));
        assert_eq!(parsed["pivots"], serde_json::json!([[0, 0]]));
        assert!((parsed["value"].as_f64().unwrap() - 5.).abs() < 1e-9);
    }
}
