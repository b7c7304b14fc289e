//! Threshold rules that pick a decoration label per sample.

use std::{collections::HashMap, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::core::{data::Sample, error::ParseRuleError};

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("valid label pattern"));

/// Relation between a sample and a rule's threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gt,
    Ge,
    Lt,
    Le,
}

impl Comparison {
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Eq => value == threshold,
            Self::Gt => value > threshold,
            Self::Ge => value >= threshold,
            Self::Lt => value < threshold,
            Self::Le => value <= threshold,
        }
    }
}

impl FromStr for Comparison {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(Self::Eq),
            "gt" => Ok(Self::Gt),
            "ge" => Ok(Self::Ge),
            "lt" => Ok(Self::Lt),
            "le" => Ok(Self::Le),
            _ => Err(()),
        }
    }
}

/// `label:op:threshold`, e.g. `green:gt:5.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct EmphasisRule {
    pub label: String,
    pub op: Comparison,
    pub threshold: f64,
}

impl EmphasisRule {
    #[must_use]
    pub fn new(label: impl Into<String>, op: Comparison, threshold: f64) -> Self {
        Self {
            label: label.into(),
            op,
            threshold,
        }
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, value: f64) -> bool {
        self.op.holds(value, self.threshold)
    }
}

impl FromStr for EmphasisRule {
    type Err = ParseRuleError;

    fn from_str(rule: &str) -> Result<Self, Self::Err> {
        let fail = |reason| ParseRuleError {
            rule: rule.to_owned(),
            reason,
        };

        let mut parts = rule.splitn(3, ':');
        let (Some(label), Some(op), Some(threshold)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(fail("expected label:op:threshold"));
        };

        if !LABEL_RE.is_match(label) {
            return Err(fail("label must be a single word"));
        }
        let op = op
            .parse::<Comparison>()
            .map_err(|()| fail("operator must be one of eq, gt, ge, lt, le"))?;
        let threshold = lexical_core::parse::<f64>(threshold.trim().as_bytes())
            .map_err(|_| fail("threshold is not a number"))?;

        Ok(Self::new(label, op, threshold))
    }
}

/// Label per sample index, matched against the original (unclamped) values.
///
/// Every rule is tried in order and a later match overwrites an earlier one.
/// Missing samples never appear in the result.
#[must_use]
pub fn match_emphasis<'r>(samples: &[Sample], rules: &'r [EmphasisRule]) -> HashMap<usize, &'r str> {
    let mut emphasized = HashMap::new();
    if rules.is_empty() {
        return emphasized;
    }

    for (i, value) in samples.iter().enumerate() {
        let Some(value) = *value else { continue };
        for rule in rules {
            if rule.matches(value) {
                emphasized.insert(i, rule.label.as_str());
            }
        }
    }
    emphasized
}
