//! Parsing of human-written duration strings using `nom`.
//!
//! Accepts the compact unit-suffixed form familiar from Go and many CLI
//! tools: an optional sign followed by one or more `<number><unit>`
//! components, such as `90s`, `1h30m`, `2.5m` or `1m0.5s`. The bare literal
//! `0` is also accepted.
//!
//! Supported units are `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`.

use std::time::Duration;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, value},
    multi::many1,
    sequence::preceded,
};

use crate::error::{GutimerError, Result};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Fraction digits past this point are below nanosecond resolution for every unit.
const MAX_FRACTION_DIGITS: usize = 24;

/// A decimal number split at the point. At most one half is empty.
#[derive(Debug, Clone, Copy)]
struct Number<'a> {
    whole: &'a str,
    fraction: &'a str,
}

impl Number<'_> {
    /// Scales the number by `unit` nanoseconds, truncating below one nanosecond.
    fn nanos(self, unit: u128) -> Option<u128> {
        let whole: u128 = if self.whole.is_empty() {
            0
        } else {
            self.whole.parse().ok()?
        };
        let mut total = whole.checked_mul(unit)?;

        let digits = self
            .fraction
            .get(..self.fraction.len().min(MAX_FRACTION_DIGITS))
            .unwrap_or_default();
        if !digits.is_empty() {
            let numerator: u128 = digits.parse().ok()?;
            let denominator = 10_u128.checked_pow(u32::try_from(digits.len()).ok()?)?;
            total = total.checked_add(numerator.checked_mul(unit)? / denominator)?;
        }
        Some(total)
    }
}

fn sign(input: &str) -> IResult<&str, Option<char>> {
    opt(one_of("+-")).parse(input)
}

/// Parses `123`, `123.`, `123.45` or `.45`.
fn number(input: &str) -> IResult<&str, Number<'_>> {
    alt((
        (digit1, opt(preceded(char('.'), digit0))).map(|(whole, fraction)| Number {
            whole,
            fraction: fraction.unwrap_or_default(),
        }),
        preceded(char('.'), digit1).map(|fraction| Number { whole: "", fraction }),
    ))
    .parse(input)
}

/// Parses a unit suffix into its length in nanoseconds.
fn unit(input: &str) -> IResult<&str, u128> {
    alt((
        value(NANOS_PER_HOUR, tag("h")),
        value(NANOS_PER_MILLI, tag("ms")),
        value(1, tag("ns")),
        value(NANOS_PER_MICRO, alt((tag("us"), tag("µs"), tag("μs")))),
        value(NANOS_PER_MINUTE, tag("m")),
        value(NANOS_PER_SECOND, tag("s")),
    ))
    .parse(input)
}

fn component(input: &str) -> IResult<&str, (Number<'_>, u128)> {
    (number, unit).parse(input)
}

/// Explains why parsing stopped at `rest`.
fn describe_failure(rest: &str) -> String {
    match number(rest) {
        Ok(("", _)) => "missing unit".into(),
        Ok((tail, _)) => {
            let suffix: String = tail
                .chars()
                .take_while(|c| !c.is_ascii_digit() && *c != '.')
                .collect();
            format!("unknown unit \"{suffix}\"")
        }
        Err(_) => format!(
            "unexpected \"{}\"",
            rest.chars().take(10).collect::<String>()
        ),
    }
}

/// Parses a duration string such as `1h30m` or `2.5s`.
///
/// # Errors
///
/// Returns [`GutimerError::InvalidDuration`] if the string is empty,
/// malformed, negative, or larger than `u64::MAX` nanoseconds.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let invalid = |reason: String| GutimerError::InvalidDuration {
        input: input.to_string(),
        reason,
    };

    let text = input.trim();
    if text.is_empty() {
        return Err(invalid("empty duration".into()));
    }

    let (rest, sign) = sign(text).map_err(|_| invalid("malformed sign".into()))?;
    if rest == "0" {
        return Ok(Duration::ZERO);
    }

    let (rest, components) = many1(component)
        .parse(rest)
        .map_err(|_| invalid(describe_failure(rest)))?;
    if !rest.is_empty() {
        return Err(invalid(describe_failure(rest)));
    }

    let mut total: u128 = 0;
    for (number, scale) in components {
        total = number
            .nanos(scale)
            .and_then(|n| total.checked_add(n))
            .ok_or_else(|| invalid("value out of range".into()))?;
    }

    if sign == Some('-') && total > 0 {
        return Err(invalid("negative durations are not supported".into()));
    }

    let nanos = u64::try_from(total).map_err(|_| invalid("value out of range".into()))?;
    Ok(Duration::from_nanos(nanos))
}
