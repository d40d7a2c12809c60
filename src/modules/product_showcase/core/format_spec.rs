// Number format specs used by the showcase views.
//
// Accepted forms:
// - a single brace placeholder with optional literal text around it:
//   `{}`, `{:,}`, `{:.1f}`, `{:,.2f}`, `{:d}`, e.g. `₹ {:,.2f}` or `{:.1f}%`
// - printf style: `%d`, `%.2f`
// - named: `plain`, `localized`, `accounting`

use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatSpecError {
    #[error("malformed format spec {spec:?}: {reason}")]
    Malformed { spec: String, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Shortest form; integral values print without a fraction.
    Auto,
    Integer,
    Fixed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    Pattern {
        prefix: String,
        suffix: String,
        thousands: bool,
        precision: Precision,
    },
    Printf {
        precision: Precision,
    },
    Plain,
    Localized,
    Accounting,
}

impl FormatSpec {
    pub fn parse(spec: &str) -> Result<Self, FormatSpecError> {
        let malformed = |reason| FormatSpecError::Malformed {
            spec: spec.to_string(),
            reason,
        };

        match spec {
            "plain" => return Ok(FormatSpec::Plain),
            "localized" => return Ok(FormatSpec::Localized),
            "accounting" => return Ok(FormatSpec::Accounting),
            _ => {}
        }

        if let Some(rest) = spec.strip_prefix('%') {
            let precision = match rest {
                "d" | "i" => Precision::Integer,
                "f" => Precision::Fixed(6),
                _ => {
                    let digits = rest
                        .strip_prefix('.')
                        .and_then(|r| r.strip_suffix('f'))
                        .ok_or_else(|| malformed("unsupported printf conversion"))?;
                    Precision::Fixed(digits.parse().map_err(|_| malformed("bad precision"))?)
                }
            };
            return Ok(FormatSpec::Printf { precision });
        }

        let open = spec
            .find('{')
            .ok_or_else(|| malformed("missing placeholder"))?;
        let close = spec[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or_else(|| malformed("unterminated placeholder"))?;
        let (prefix, body, suffix) = (&spec[..open], &spec[open + 1..close], &spec[close + 1..]);
        if suffix.contains(['{', '}']) || prefix.contains('}') {
            return Err(malformed("expected exactly one placeholder"));
        }

        let body = match body {
            "" => "",
            _ => body
                .strip_prefix(':')
                .ok_or_else(|| malformed("placeholder must start with ':'"))?,
        };
        let (thousands, body) = match body.strip_prefix(',') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let precision = match body {
            "" => Precision::Auto,
            "d" => Precision::Integer,
            "f" => Precision::Fixed(6),
            _ => {
                let digits = body
                    .strip_prefix('.')
                    .and_then(|r| r.strip_suffix('f'))
                    .ok_or_else(|| malformed("unsupported format type"))?;
                Precision::Fixed(digits.parse().map_err(|_| malformed("bad precision"))?)
            }
        };

        Ok(FormatSpec::Pattern {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            thousands,
            precision,
        })
    }

    pub fn apply(&self, value: f64) -> String {
        match self {
            FormatSpec::Pattern {
                prefix,
                suffix,
                thousands,
                precision,
            } => format!("{prefix}{}{suffix}", render(value, *precision, *thousands)),
            FormatSpec::Printf { precision } => render(value, *precision, false),
            FormatSpec::Plain => render(value, Precision::Auto, false),
            FormatSpec::Localized => render(value, Precision::Auto, true),
            FormatSpec::Accounting => {
                let amount = render(value.abs(), Precision::Fixed(2), true);
                if value < 0.0 {
                    format!("({amount})")
                } else {
                    amount
                }
            }
        }
    }
}

impl FromStr for FormatSpec {
    type Err = FormatSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatSpec::parse(s)
    }
}

fn render(value: f64, precision: Precision, thousands: bool) -> String {
    let digits = match precision {
        Precision::Integer => format!("{}", value.trunc() as i64),
        Precision::Fixed(places) => format!("{value:.places$}"),
        Precision::Auto if value.fract() == 0.0 => format!("{}", value as i64),
        Precision::Auto => format!("{value}"),
    };
    if thousands {
        group_thousands(&digits)
    } else {
        digits
    }
}

/// Inserts `,` every three digits of the integer part. Expects the output of `format!`.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}{fraction}")
}
