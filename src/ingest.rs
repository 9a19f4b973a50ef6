//! Reading seed coordinates from line-oriented text.
//!
//! Each line holds one `x,y` pair, optionally wrapped in parentheses, e.g. `399,-7000034`
//! or `(3, 4)`. Blank lines are ignored.

use crate::{Coord, RecordError};
use itertools::Itertools;
use std::io::BufRead;
use tracing::{info, warn};

/// Parse one record. Blank lines give `Ok(None)`.
pub fn parse_record(line: &str) -> Result<Option<Coord>, RecordError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let mut record = line;
    if let Some(open) = record.find('(') {
        record = &record[open + 1..];
    }
    if let Some(close) = record.find(')') {
        record = &record[..close];
    }

    let (x, y) = record
        .split(',')
        .map(str::trim)
        .collect_tuple::<(&str, &str)>()
        .filter(|(x, y)| !x.is_empty() && !y.is_empty())
        .ok_or_else(|| RecordError::Malformed {
            record: line.trim().to_owned(),
        })?;
    Ok(Some((parse_axis(x)?, parse_axis(y)?)))
}

fn parse_axis(text: &str) -> Result<i64, RecordError> {
    text.parse().map_err(|source| RecordError::InvalidCoordinate {
        text: text.to_owned(),
        source,
    })
}

/// Parse every non-blank line, paired with its 1-based line number.
pub fn read_records<R: BufRead>(
    reader: R,
) -> impl Iterator<Item = (usize, Result<Coord, RecordError>)> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(ix, line)| match line {
            Ok(line) => parse_record(&line)
                .transpose()
                .map(|record| (ix + 1, record)),
            Err(err) => Some((ix + 1, Err(RecordError::from(err)))),
        })
}

/// Collect the valid coordinates, logging and skipping any record that fails to parse.
pub fn collect_records<R: BufRead>(reader: R) -> Vec<Coord> {
    let coords: Vec<Coord> = read_records(reader)
        .filter_map(|(line, record)| match record {
            Ok(coord) => Some(coord),
            Err(err) => {
                warn!(line, %err, "skipping invalid coordinate record");
                None
            }
        })
        .collect();
    info!(count = coords.len(), "found coordinate pairs");
    coords
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn plain_and_wrapped_records() {
        assert_eq!(parse_record("399,-7000034").unwrap(), Some((399, -7000034)));
        assert_eq!(parse_record("(3, 4)").unwrap(), Some((3, 4)));
        assert_eq!(parse_record("  ( -1 ,2 )  ").unwrap(), Some((-1, 2)));
        assert_eq!(
            parse_record("-9223372036854775808,9223372036854775807").unwrap(),
            Some((i64::MIN, i64::MAX))
        );
        assert_eq!(parse_record("   ").unwrap(), None);
    }

    #[test]
    fn malformed_records() {
        assert!(matches!(parse_record("12"), Err(RecordError::Malformed { .. })));
        assert!(matches!(parse_record("12,"), Err(RecordError::Malformed { .. })));
        assert!(matches!(parse_record(",3"), Err(RecordError::Malformed { .. })));
        assert!(matches!(parse_record("1,2,3"), Err(RecordError::Malformed { .. })));
        assert!(matches!(
            parse_record("x,3"),
            Err(RecordError::InvalidCoordinate { ref text, .. }) if text == "x"
        ));
        assert!(matches!(
            parse_record("9223372036854775808,0"),
            Err(RecordError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn bad_lines_are_skipped() {
        let input = "1,1\nnonsense\n\n(2,2)\n3,\n";
        let records: Vec<_> = read_records(Cursor::new(input)).collect();
        let lines: Vec<usize> = records.iter().map(|(line, _)| *line).collect();
        assert_eq!(lines, vec![1, 2, 4, 5]);

        assert_eq!(collect_records(Cursor::new(input)), vec![(1, 1), (2, 2)]);
    }
}
