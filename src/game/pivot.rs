use ndarray::Zip;

use super::Tableau;

/// Successor tableau together with the cell it was pivoted on.
#[derive(Debug, Clone, PartialEq)]
pub struct Pivot {
    pub tableau: Tableau,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PivotOutcome {
    Pivoted(Pivot),
    /// No objective entry is negative: the tableau is optimal.
    Optimal,
    /// No row passes the ratio test for `column`.
    Unbounded { column: usize },
}

impl Tableau {
    /// Column with the most negative objective entry below `-tolerance`.
    /// Ties resolve to the leftmost column.
    pub fn pivot_column(&self, tolerance: f64) -> Option<usize> {
        let (pivot_col, _) = self.objective_row().indexed_iter().fold(
            (None, -tolerance),
            |(pivot_col, min_value), (col, &value)| {
                if value < min_value {
                    (Some(col), value)
                } else {
                    (pivot_col, min_value)
                }
            },
        );
        pivot_col
    }

    /// Minimum ratio test over every row. Only rows whose entry in `column`
    /// exceeds `tolerance` qualify, ties resolve to the topmost row.
    ///
    /// Right-hand sides below zero are round-off and count as zero, so
    /// degenerate rows win with ratio 0.
    pub fn pivot_row(&self, column: usize, tolerance: f64) -> Option<usize> {
        let (pivot_row, _) = Zip::indexed(self.rhs())
            .and(self.coefficients().column(column))
            .fold((None, f64::INFINITY), |(pivot_row, min_ratio), i, b, a| {
                if *a <= tolerance {
                    return (pivot_row, min_ratio);
                }
                let ratio = b.max(0.) / *a;
                if ratio < min_ratio {
                    (Some(i), ratio)
                } else {
                    (pivot_row, min_ratio)
                }
            });
        pivot_row
    }

    /// Gauss-Jordan elimination around `(row, column)` into a new tableau.
    pub fn pivot_at(&self, row: usize, column: usize) -> Tableau {
        let pivot_value = self.coefficients()[[row, column]];
        let pivot_row = self.coefficients().row(row).mapv(|v| v / pivot_value);

        let mut coefficients = self.coefficients().clone();
        for (i, mut values) in coefficients.rows_mut().into_iter().enumerate() {
            if i == row {
                values.assign(&pivot_row);
            } else {
                let factor = values[column];
                values.scaled_add(-factor, &pivot_row);
            }
        }

        let mut basis = self.basis().to_vec();
        if let (Some(label), Some(entering)) = (basis.get_mut(row), self.variable(column)) {
            *label = entering;
        }

        Tableau::from_parts(
            coefficients,
            basis,
            self.slack_count(),
            self.decision_count(),
            self.shift(),
        )
    }

    pub fn pivot(&self, tolerance: f64) -> PivotOutcome {
        let Some(column) = self.pivot_column(tolerance) else {
            return PivotOutcome::Optimal;
        };
        let Some(row) = self.pivot_row(column, tolerance) else {
            return PivotOutcome::Unbounded { column };
        };

        PivotOutcome::Pivoted(Pivot {
            tableau: self.pivot_at(row, column),
            row,
            column,
        })
    }
}
