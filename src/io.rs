use std::io::BufRead;

use crate::error::{ParseError, Result};
use crate::geometry::Polyline;
use crate::math::Point2;

/// Reads a polyline from `reader`.
///
/// One point per line as two whitespace-separated numbers (`x y`). Blank lines
/// are skipped.
///
/// # Errors
///
/// Returns [`ParseError::MalformedLine`] for a line that is not exactly two
/// numbers, or an I/O error from the reader.
pub fn read_points<R: BufRead>(reader: R) -> Result<Polyline> {
    let mut points = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(p) = parse_line(&line, idx + 1)? {
            points.push(p);
        }
    }
    Ok(Polyline::new(points))
}

/// Parses a polyline from an in-memory string.
///
/// # Errors
///
/// Returns [`ParseError::MalformedLine`] for the first malformed line.
pub fn parse_points(text: &str) -> Result<Polyline> {
    read_points(text.as_bytes())
}

/// Parses a path index argument such as a splice bound.
///
/// # Errors
///
/// Returns [`ParseError::InvalidIndex`] if `arg` is not a non-negative integer.
pub fn parse_index(arg: &str) -> Result<usize> {
    match arg.trim().parse() {
        Ok(index) => Ok(index),
        Err(_) => Err(ParseError::InvalidIndex { value: arg.into() }.into()),
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<Point2>> {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };
    let malformed = || ParseError::MalformedLine {
        line: line_no,
        content: line.to_owned(),
    };
    let second = tokens.next().ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed().into());
    }
    let x: f64 = first.parse().map_err(|_| malformed())?;
    let y: f64 = second.parse().map_err(|_| malformed())?;
    Ok(Some(Point2::new(x, y)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::{self, BufReader, Read};

    use super::*;
    use crate::error::EvoluteError;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device unplugged"))
        }
    }

    #[test]
    fn reads_records() {
        let pl = parse_points("0 0\n1 1.5\n\n  2\t3  \n-4e-1 5\n").unwrap();
        assert_eq!(
            pl.points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 1.5),
                Point2::new(2.0, 3.0),
                Point2::new(-0.4, 5.0),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn reports_line_number() {
        let err = parse_points("0 0\n1 x\n").unwrap_err();
        match err {
            EvoluteError::Parse(ParseError::MalformedLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "1 x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(parse_points("1\n").is_err());
        assert!(parse_points("1 2 3\n").is_err());
    }

    #[test]
    fn reader_failure_is_io_error() {
        let err = read_points(BufReader::new(FailingReader)).unwrap_err();
        match err {
            EvoluteError::Io(e) => assert_eq!(e.to_string(), "device unplugged"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let err = read_points(&[0xff, 0xfe, b'\n'][..]).unwrap_err();
        assert!(matches!(err, EvoluteError::Io(_)));
    }

    #[test]
    fn parses_index() {
        assert_eq!(parse_index("4").unwrap(), 4);
        assert_eq!(parse_index(" 0 ").unwrap(), 0);
    }

    #[test]
    fn bad_index_is_parse_error() {
        for arg in ["-1", "two", "", "1.5"] {
            match parse_index(arg).unwrap_err() {
                EvoluteError::Parse(ParseError::InvalidIndex { value }) => {
                    assert_eq!(value, arg);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }
}
