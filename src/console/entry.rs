use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::MatrixGame;

use super::ConsoleError;

pub fn prompt(m: usize, n: usize) -> String {
    format!(
        "Enter the {m} by {n} payoff matrix below. Separate rows by new lines and columns by spaces: "
    )
}

/// Parses the first `n` entries of one matrix row. Extra entries are ignored.
fn parse_row<'a, I>(tokens: I, row: usize, n: usize) -> Result<Vec<f64>, ConsoleError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut tokens = tokens.into_iter();
    let mut values = Vec::with_capacity(n);
    for column in 0..n {
        let token = tokens.next().ok_or(ConsoleError::MissingEntries {
            row,
            expected: n,
            found: column,
        })?;
        let value = token
            .trim()
            .parse::<f64>()
            .map_err(|_| ConsoleError::MalformedInput {
                row,
                column,
                token: token.to_owned(),
            })?;
        values.push(value);
    }
    Ok(values)
}

/// Reads an `m` by `n` payoff matrix, one row per line, entries separated by
/// whitespace.
pub fn read_payoff<R: BufRead>(reader: R, m: usize, n: usize) -> Result<MatrixGame, ConsoleError> {
    let mut rows = Vec::with_capacity(m);
    let mut lines = reader.lines();
    for row in 0..m {
        let line = lines.next().ok_or(ConsoleError::MissingRows {
            expected: m,
            found: row,
        })??;
        rows.push(parse_row(line.split_whitespace(), row, n)?);
    }
    Ok(MatrixGame::from_rows(rows)?)
}

/// Reads an `m` by `n` payoff matrix from headerless CSV records.
pub fn read_payoff_csv<R: Read>(reader: R, m: usize, n: usize) -> Result<MatrixGame, ConsoleError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::with_capacity(m);
    for (row, record) in csv_reader.records().take(m).enumerate() {
        let record = record?;
        rows.push(parse_row(record.iter(), row, n)?);
    }
    if rows.len() < m {
        return Err(ConsoleError::MissingRows {
            expected: m,
            found: rows.len(),
        });
    }
    Ok(MatrixGame::from_rows(rows)?)
}

/// Reads a payoff matrix file, as CSV when the extension is `csv`.
pub fn read_payoff_file(
    path: impl AsRef<Path>,
    m: usize,
    n: usize,
) -> Result<MatrixGame, ConsoleError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| ConsoleError::InvalidPath(err, path.display().to_string()))?;
    log::debug!("reading {m}x{n} payoff matrix from {}", path.display());
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => read_payoff_csv(file, m, n),
        _ => read_payoff(BufReader::new(file), m, n),
    }
}
