use crate::error::ParseError;

/// Parse a plain-text response body into integers.
///
/// The service answers with one row per line and tab-separated columns; the
/// last row may be shorter than the others. Tokens are read in row-major
/// order. Blank lines are skipped.
///
/// # Examples
///
/// ```
/// use randorg_fetch::parse_response;
///
/// assert_eq!(parse_response("10\t20\n30\t40\n").unwrap(), [10, 20, 30, 40]);
/// assert!(parse_response("1\tX\t3").is_err());
/// ```
pub fn parse_response(body: &str) -> Result<Vec<i64>, ParseError> {
    let mut ints = Vec::new();

    for (index, line) in body.lines().enumerate() {
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|source| ParseError::InvalidToken {
                line: index + 1,
                token: token.to_string(),
                source,
            })?;
            ints.push(value);
        }
    }

    Ok(ints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_row_major_order() {
        let body = "10\t20\t30\n40\t50\t60\n70\n";
        assert_eq!(parse_response(body).unwrap(), [10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn empty_body_is_empty() {
        assert!(parse_response("").unwrap().is_empty());
        assert!(parse_response("\n\n").unwrap().is_empty());
    }

    #[test]
    fn tolerates_mixed_whitespace_and_crlf() {
        let body = "1 \t2\r\n  3\t\t4  \r\n";
        assert_eq!(parse_response(body).unwrap(), [1, 2, 3, 4]);
    }

    #[test]
    fn parses_signed_values() {
        assert_eq!(
            parse_response("-1000000000\t+7\t0").unwrap(),
            [-1_000_000_000, 7, 0]
        );
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_response("5\t6\n1\tX\t3").unwrap_err();
        match err {
            ParseError::InvalidToken { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "X");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_decimal_literal() {
        assert!(parse_response("0x1F").is_err());
        assert!(parse_response("1.5").is_err());
    }

    #[test]
    fn concatenated_bodies_parse_like_separate_bodies() {
        let bodies = ["1\t2\n3\t4\n", "5\t6\n7\n", "", "8\t9\n"];

        let joined = parse_response(&bodies.concat()).unwrap();
        let separate: Vec<i64> = bodies
            .iter()
            .flat_map(|body| parse_response(body).unwrap())
            .collect();

        assert_eq!(joined, separate);
        assert_eq!(joined, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
