use nom::{
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, separated_pair, terminated},
    IResult,
};

use crate::integration::integrationerror::{
    IntegrationError,
    Result
};

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_pair(input: &str) -> IResult<&str, (f64, f64)> {
    separated_pair(ws(double), char(':'), ws(double))(input)
}

fn parse_mapping(input: &str) -> IResult<&str, Vec<(f64, f64)>> {
    delimited(
        ws(char('{')),
        map(
            opt(terminated(separated_list1(char(','), parse_pair), opt(char(',')))),
            |pairs: Option<Vec<(f64, f64)>>| pairs.unwrap_or_default(),
        ),
        ws(char('}')),
    )(input)
}

/// Parses a dictionary literal such as `{2:1, 1:2, 0:-2}` into
/// `(exponent, coefficient)` pairs, in the order written.
///
/// Exponents are not validated here; `Polynomial::new` owns that rule.
pub fn parse_coefficients(literal: &str) -> Result<Vec<(f64, f64)>> {
    let trimmed = literal.trim();
    if !trimmed.starts_with('{') {
        return Err(IntegrationError::malformed(literal, "not a mapping"));
    }
    match all_consuming(parse_mapping)(trimmed) {
        Ok((_, pairs)) => {
            if pairs.iter().any(|(_, coefficient)| !coefficient.is_finite()) {
                return Err(IntegrationError::malformed(literal, "coefficients must be finite"));
            }
            Ok(pairs)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let reason = if e.input.is_empty() {
                "unexpected end of input".to_owned()
            } else {
                format!("unexpected input at '{}'", e.input)
            };
            Err(IntegrationError::malformed(literal, reason))
        }
        Err(nom::Err::Incomplete(_)) => {
            Err(IntegrationError::malformed(literal, "unexpected end of input"))
        }
    }
}
