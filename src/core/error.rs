//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("number of lines must be at least 1, got {0}")]
    InvalidLineCount(usize),
    #[error("minimum {low} must not exceed maximum {high}")]
    InvalidRange { low: f64, high: f64 },
    #[error("scaling bound must be finite, got {0}")]
    NonFiniteBound(f64),
}

/// An emphasis rule that does not follow `label:op:threshold`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid emphasis rule '{rule}': {reason}")]
pub struct ParseRuleError {
    pub rule: String,
    pub reason: &'static str,
}

/// A token that is neither a number nor a `null`/`none` placeholder.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value '{token}': expected a number, 'null' or 'none'")]
pub struct ParseSampleError {
    pub token: String,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum SparkError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Rule(#[from] ParseRuleError),
    #[error(transparent)]
    Sample(#[from] ParseSampleError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("cannot scale a series without any present value")]
    NoBounds,
    #[error("sample {index} is not a finite number: {value}")]
    NonFinite { index: usize, value: f64 },
}
