//! Text-based matrix load and store.
//!
//! The wire format is symmetric: a leading line with the width (column
//! count) and height (row count) as two whitespace-separated unsigned
//! integers, then one line per row with every value followed by a single
//! tab — including the last value of the row.
//!
//! ```text
//! 2 2
//! 1	2
//! 3	4
//! ```

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

use thiserror::Error;

use sable_rings::Ring;

use crate::matrix::Matrix;

/// Errors raised while reading a matrix from text.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("i/o failure while reading matrix")]
    Io(#[from] std::io::Error),

    /// The text is not a well-formed matrix.
    #[error("malformed matrix text: {0}")]
    Parse(String),
}

/// Writes `m` in the textual wire format.
///
/// # Errors
///
/// Propagates failures of the underlying writer.
pub fn write_matrix<R, W>(out: &mut W, m: &Matrix<R>) -> std::io::Result<()>
where
    R: Ring + Display,
    W: Write,
{
    writeln!(out, "{} {}", m.num_cols(), m.num_rows())?;
    for i in 0..m.num_rows() {
        for v in m.row(i) {
            write!(out, "{v}\t")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Reads a matrix in the textual wire format into `m`.
///
/// The destination is resized to the parsed dimensions before filling,
/// discarding its prior contents. Exactly `width * height` tokens are
/// consumed in row-major order; any whitespace separates tokens.
///
/// # Errors
///
/// [`ReadError::Io`] if the reader fails, [`ReadError::Parse`] if the
/// dimensions or an entry do not parse or the text ends early.
pub fn read_matrix<R, Rd>(input: &mut Rd, m: &mut Matrix<R>) -> Result<(), ReadError>
where
    R: Ring + FromStr,
    Rd: Read,
{
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let cols = parse_dimension(tokens.next(), "width")?;
    let rows = parse_dimension(tokens.next(), "height")?;

    m.resize(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            let token = tokens
                .next()
                .ok_or_else(|| ReadError::Parse("matrix text ended early".into()))?;
            m[(i, j)] = token
                .parse()
                .map_err(|_| ReadError::Parse(format!("invalid scalar `{token}`")))?;
        }
    }
    Ok(())
}

fn parse_dimension(token: Option<&str>, what: &str) -> Result<usize, ReadError> {
    let token = token.ok_or_else(|| ReadError::Parse(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| ReadError::Parse(format!("invalid {what} `{token}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sable_rings::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_write_literal() {
        let m = Matrix::from_rows(vec![vec![q(1), q(2)], vec![q(3), q(4)]]);
        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2 2\n1\t2\t\n3\t4\t\n");
    }

    #[test]
    fn test_round_trip() {
        let m = Matrix::from_rows(vec![
            vec![Q::new(1, 2), q(-3), q(0)],
            vec![q(7), Q::new(-5, 4), q(2)],
        ]);
        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();

        let mut back: Matrix<Q> = Matrix::default();
        read_matrix(&mut out.as_slice(), &mut back).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_read_discards_prior_contents() {
        let mut m: Matrix<Q> = Matrix::filled(4, 4, q(9));
        read_matrix(&mut "2 1\n5\t6\t\n".as_bytes(), &mut m).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![q(5), q(6)]]));
    }

    #[test]
    fn test_read_rejects_truncated_input() {
        let mut m: Matrix<Q> = Matrix::default();
        let err = read_matrix(&mut "2 2\n1\t2\t\n3\t\n".as_bytes(), &mut m).unwrap_err();
        assert!(matches!(err, ReadError::Parse(_)));
    }

    #[test]
    fn test_read_rejects_bad_scalar() {
        let mut m: Matrix<Q> = Matrix::default();
        let err = read_matrix(&mut "1 1\nwat\t\n".as_bytes(), &mut m).unwrap_err();
        assert!(matches!(err, ReadError::Parse(_)));
    }

    #[test]
    fn test_float_round_trip() {
        let m: Matrix<f64> = Matrix::from_rows(vec![vec![1.5, -2.25], vec![0.0, 100.0]]);
        let mut out = Vec::new();
        write_matrix(&mut out, &m).unwrap();

        let mut back: Matrix<f64> = Matrix::default();
        read_matrix(&mut out.as_slice(), &mut back).unwrap();
        assert_eq!(back, m);
    }
}
