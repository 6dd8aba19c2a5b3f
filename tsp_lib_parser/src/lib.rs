// Instance files are line oriented: a city count, one comma-separated
// matrix row per city, optionally two endpoint lines for the path problem.

use chumsky::{prelude::*, Parser};
use structs::{TspLibEndpoints, TspLibProblem};
use thiserror::Error;

pub mod structs;

#[derive(Debug, Error)]
pub enum TspLibParseError {
    #[error("ParseError occurred")]
    ParseError(Vec<Simple<char>>),
    #[error("instance declares no cities")]
    EmptyInstance,
    #[error("expected {expected} matrix rows, found {found}")]
    RowCountMismatch { expected: usize, found: usize },
    #[error("matrix row {row} has {found} entries, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected trailing lines after the distance matrix")]
    TrailingContent,
}

pub fn parse_tsp_lib(content: &str) -> Result<TspLibProblem, TspLibParseError> {
    let parser = city_count_parser()
        .then_ignore(text::newline())
        .then(
            distance_row_parser()
                .separated_by(text::newline())
                .allow_trailing(),
        )
        .then_ignore(text::whitespace())
        .then_ignore(end());

    let (cities, lines) = parser.parse(content).map_err(TspLibParseError::ParseError)?;

    if cities == 0 {
        return Err(TspLibParseError::EmptyInstance);
    }
    if lines.len() < cities {
        return Err(TspLibParseError::RowCountMismatch {
            expected: cities,
            found: lines.len(),
        });
    }

    // Any lines past the matrix must be the two endpoint lines of the
    // path problem, each holding a single city number.
    let endpoints = match &lines[cities..] {
        [] => None,
        [source, destination] if source.len() == 1 && destination.len() == 1 => {
            Some(TspLibEndpoints {
                source: source[0] as usize,
                destination: destination[0] as usize,
            })
        }
        _ => return Err(TspLibParseError::TrailingContent),
    };

    let distances = lines[..cities].to_vec();
    for (row, entries) in distances.iter().enumerate() {
        if entries.len() != cities {
            return Err(TspLibParseError::RowLengthMismatch {
                row,
                expected: cities,
                found: entries.len(),
            });
        }
    }

    Ok(TspLibProblem {
        cities,
        distances,
        endpoints,
    })
}

pub(crate) fn city_count_parser() -> impl Parser<char, usize, Error = Simple<char>> {
    just(' ')
        .repeated()
        .ignore_then(text::int(10))
        .from_str::<usize>()
        .unwrapped()
        .labelled("city count")
}

pub(crate) fn distance_row_parser() -> impl Parser<char, Vec<u64>, Error = Simple<char>> {
    let distance = just(' ')
        .repeated()
        .ignore_then(text::int(10))
        .then_ignore(just(' ').repeated())
        .from_str::<u64>()
        .unwrapped()
        .labelled("distance");

    distance
        .separated_by(just(','))
        .at_least(1)
        .labelled("distance row")
}

#[cfg(test)]
mod tests {
    use chumsky::Parser;

    use crate::{parse_tsp_lib, TspLibParseError};

    static TEST_FILE: &str = include_str!("../../instances/easy_01_tsp.txt");

    #[test]
    fn city_count_parsing() {
        let count = crate::city_count_parser().parse(TEST_FILE);
        assert_eq!(count.unwrap(), 4);
    }

    #[test]
    fn distance_row_parsing() {
        let row = crate::distance_row_parser().parse("0,10,15,20");
        assert_eq!(row.unwrap(), vec![0, 10, 15, 20]);
    }

    #[test]
    fn distance_row_parsing_with_spaces() {
        let row = crate::distance_row_parser().parse("0, 10,  15 , 20");
        assert_eq!(row.unwrap(), vec![0, 10, 15, 20]);
    }

    #[test]
    fn parse_tsp_lib_test() {
        let output = parse_tsp_lib(TEST_FILE);

        dbg!(&output);
        assert!(output.is_ok());

        let problem = output.unwrap();
        assert_eq!(problem.cities, 4);
        assert_eq!(problem.distances.len(), 4);
        assert_eq!(problem.distances[0], vec![0, 10, 15, 20]);
        assert_eq!(problem.distances[2][1], problem.distances[1][2]);
        assert_eq!(problem.endpoints, None);
    }

    #[test]
    fn parse_endpoint_lines() {
        let output = parse_tsp_lib("2\n0,5\n5,0\n1\n2\n");

        assert!(output.is_ok());
        let endpoints = output.unwrap().endpoints.unwrap();
        assert_eq!(endpoints.source, 1);
        assert_eq!(endpoints.destination, 2);
    }

    #[test]
    fn missing_row_fails() {
        let output = parse_tsp_lib("3\n0,1,2\n1,0,3\n");

        assert!(matches!(
            output,
            Err(TspLibParseError::RowCountMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn short_row_fails() {
        let output = parse_tsp_lib("2\n0,5,7\n5,0\n");

        assert!(matches!(
            output,
            Err(TspLibParseError::RowLengthMismatch { row: 0, .. })
        ));
    }

    #[test]
    fn single_trailing_line_fails() {
        let output = parse_tsp_lib("2\n0,5\n5,0\n1\n");

        assert!(matches!(output, Err(TspLibParseError::TrailingContent)));
    }

    #[test]
    fn zero_cities_fails() {
        let output = parse_tsp_lib("0\n");

        assert!(matches!(output, Err(TspLibParseError::EmptyInstance)));
    }

    #[test]
    fn garbage_parsing_fail() {
        let content = "asd";

        let output = parse_tsp_lib(content);

        assert!(output.is_err());
    }
}
