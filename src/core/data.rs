//! Sample tokens: lenient number extraction + whitespace-separated streams.

use std::{
    io::{BufRead, BufReader, Read},
    sync::LazyLock,
};

use regex::Regex;

use crate::core::error::{ParseSampleError, SparkError};

/// One slot of a series; `None` renders as a gap.
pub type Sample = Option<f64>;

/// First float-looking substring, tolerating a space after the sign.
static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+-]? *(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid float pattern")
});

/// Placeholders for an empty slot, matched case-insensitively.
static MISSING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)null|none").expect("valid placeholder pattern"));

const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Parse one token into a sample.
///
/// Noise around the number is ignored, so `4.5,`, `"4.5"` and `(4.5)` all
/// yield `4.5`. Tokens containing `null` or `none` (any case) and no number
/// become a gap. A space between sign and digits is dropped, so `- 4` is `-4`.
///
/// # Errors
/// [`ParseSampleError`] when the token holds neither, or when the number
/// overflows to infinity (`1e999`).
pub fn parse_sample(token: &str) -> Result<Sample, ParseSampleError> {
    let token = token.replace('\u{2212}', "-");

    if let Some(m) = FLOAT_RE.find(&token) {
        let digits: String = m.as_str().chars().filter(|c| *c != ' ').collect();
        return match lexical_core::parse::<f64>(digits.as_bytes()) {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(ParseSampleError { token }),
        };
    }

    if MISSING_RE.is_match(&token) {
        return Ok(None);
    }

    Err(ParseSampleError { token })
}

/// Reject infinite and NaN samples; they have no place on a finite scale.
///
/// # Errors
/// [`SparkError::NonFinite`] naming the first offending slot.
pub fn check_finite(samples: &[Sample]) -> Result<(), SparkError> {
    match samples
        .iter()
        .enumerate()
        .find_map(|(index, s)| s.filter(|v| !v.is_finite()).map(|value| (index, value)))
    {
        Some((index, value)) => Err(SparkError::NonFinite { index, value }),
        None => Ok(()),
    }
}

/// Read whitespace-separated samples until end of input.
///
/// # Errors
/// I/O failures and the first token [`parse_sample`] rejects.
pub fn read_samples<R: Read>(src: R) -> Result<Vec<Sample>, SparkError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut line = String::new();
    let mut samples = Vec::new();

    loop {
        line.clear();
        if rdr.read_line(&mut line)? == 0 {
            break;
        }
        for token in line.split_whitespace() {
            samples.push(parse_sample(token)?);
        }
    }
    Ok(samples)
}
