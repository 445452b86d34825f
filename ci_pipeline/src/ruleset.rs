//! Ruleset evaluation.
//!
//! A [`Ruleset`] decides whether a step runs for a given event. Each field of
//! the event ([`RuleData`]) is checked against the patterns of the matching
//! [`Ruletype`], and the per-field results are combined under the ruleset's
//! operator. `unless` rules veto; `if` rules gate.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, PoisonError};

use ci_library::constants::{
    MATCHER_FILEPATH, MATCHER_REGEX, MATCHER_REGEXP, OPERATOR_AND, OPERATOR_OR,
};
use glob::{MatchOptions, Pattern};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Compiled expressions kept across evaluations.
const REGEX_CACHE_CAPACITY: usize = 256;

static REGEX_CACHE: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// How a single pattern is compared with an event value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Matcher {
    /// Shell-style glob; `*` does not cross `/`.
    #[default]
    Filepath,
    /// Unanchored regular-expression search.
    Regexp,
}

impl Matcher {
    /// Case-insensitive. Unknown tokens fall back to [`Matcher::Filepath`].
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case(MATCHER_REGEXP) || token.eq_ignore_ascii_case(MATCHER_REGEX)
        {
            Self::Regexp
        } else {
            Self::Filepath
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filepath => MATCHER_FILEPATH,
            Self::Regexp => MATCHER_REGEXP,
        }
    }
}

/// How per-field results are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    #[default]
    And,
    Or,
}

impl Operator {
    /// Case-insensitive. Unknown tokens fall back to [`Operator::And`].
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case(OPERATOR_OR) {
            Self::Or
        } else {
            Self::And
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => OPERATOR_AND,
            Self::Or => OPERATOR_OR,
        }
    }

    /// The per-field predicate for this operator, and the field result that
    /// settles the whole evaluation on its own.
    fn predicate(self) -> (fn(&Ruletype, &str, Matcher) -> Result<bool>, bool) {
        match self {
            Self::And => (Ruletype::match_and, false),
            Self::Or => (Ruletype::match_or, true),
        }
    }
}

/// The event a ruleset is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleData {
    pub branch: String,
    pub comment: String,
    pub event: String,
    pub path: Vec<String>,
    pub repo: String,
    pub status: String,
    pub tag: String,
    pub target: String,
}

/// Decision unit attached to a step: `if` and `unless` rules plus the
/// matcher and operator used to evaluate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub r#if: Rules,
    pub unless: Rules,
    pub matcher: String,
    pub operator: String,
    pub r#continue: bool,
}

impl Ruleset {
    /// True when neither `if` nor `unless` carries any pattern.
    pub fn is_empty(&self) -> bool {
        self.r#if.is_empty() && self.unless.is_empty()
    }

    /// True when `if` or `unless` constrains the build status.
    pub fn has_status(&self) -> bool {
        !self.r#if.status.is_empty() || !self.unless.status.is_empty()
    }

    /// Decide whether `data` satisfies this ruleset.
    pub fn matches(&self, data: &RuleData) -> Result<bool> {
        if self.is_empty() {
            return Ok(true);
        }

        let matcher = Matcher::parse(&self.matcher);
        let operator = Operator::parse(&self.operator);

        if !self.unless.is_empty() && self.unless.matches(data, matcher, operator)? {
            return Ok(false);
        }
        if self.r#if.is_empty() {
            return Ok(true);
        }
        self.r#if.matches(data, matcher, operator)
    }
}

/// Patterns for each event field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub branch: Ruletype,
    pub comment: Ruletype,
    pub event: Ruletype,
    pub path: Ruletype,
    pub repo: Ruletype,
    pub status: Ruletype,
    pub tag: Ruletype,
    pub target: Ruletype,
}

impl Rules {
    pub fn is_empty(&self) -> bool {
        self.branch.is_empty()
            && self.comment.is_empty()
            && self.event.is_empty()
            && self.path.is_empty()
            && self.repo.is_empty()
            && self.status.is_empty()
            && self.tag.is_empty()
            && self.target.is_empty()
    }

    /// Evaluate every field of `data` and combine the results under `operator`.
    ///
    /// With changed files present, the rules are evaluated once per file and
    /// the first passing evaluation wins. Without them, a single evaluation
    /// runs against an empty path.
    pub fn matches(&self, data: &RuleData, matcher: Matcher, operator: Operator) -> Result<bool> {
        if data.path.is_empty() {
            return self.matches_path(data, "", matcher, operator);
        }

        for path in &data.path {
            if self.matches_path(data, path, matcher, operator)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn matches_path(
        &self,
        data: &RuleData,
        path: &str,
        matcher: Matcher,
        operator: Operator,
    ) -> Result<bool> {
        let fields = [
            (&self.branch, data.branch.as_str()),
            (&self.comment, data.comment.as_str()),
            (&self.event, data.event.as_str()),
            (&self.path, path),
            (&self.repo, data.repo.as_str()),
            (&self.tag, data.tag.as_str()),
            (&self.target, data.target.as_str()),
        ];
        // An unknown status never decides the outcome.
        let status = (!data.status.is_empty()).then_some((&self.status, data.status.as_str()));

        let (predicate, decisive) = operator.predicate();
        for (ruletype, value) in fields.into_iter().chain(status) {
            if predicate(ruletype, value, matcher)? == decisive {
                return Ok(decisive);
            }
        }
        Ok(!decisive)
    }
}

/// Ordered list of patterns for one event field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ruletype(pub Vec<String>);

impl Ruletype {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when there are no patterns, or any pattern matches `value`.
    pub fn match_and(&self, value: &str, matcher: Matcher) -> Result<bool> {
        if self.is_empty() {
            return Ok(true);
        }
        self.match_any(value, matcher)
    }

    /// True when some pattern matches `value`. No patterns never match.
    pub fn match_or(&self, value: &str, matcher: Matcher) -> Result<bool> {
        if self.is_empty() {
            return Ok(false);
        }
        self.match_any(value, matcher)
    }

    /// Compare one pattern with `value`.
    pub fn match_single(value: &str, pattern: &str, matcher: Matcher) -> Result<bool> {
        let matched = match matcher {
            Matcher::Filepath => glob_match(pattern, value),
            Matcher::Regexp => cached_regex(pattern)?.is_match(value),
        };
        if matched {
            tracing::trace!(pattern, value, matcher = matcher.as_str(), "rule pattern matched");
        }
        Ok(matched)
    }

    fn match_any(&self, value: &str, matcher: Matcher) -> Result<bool> {
        for pattern in self.iter() {
            if Self::match_single(value, pattern, matcher)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<S: Into<String>> FromIterator<S> for Ruletype {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for Ruletype {
    fn from(patterns: Vec<String>) -> Self {
        Self(patterns)
    }
}

/// A malformed glob never matches.
fn glob_match(pattern: &str, value: &str) -> bool {
    match Pattern::new(pattern) {
        Ok(glob) => glob.matches_with(value, GLOB_OPTIONS),
        Err(err) => {
            tracing::warn!(pattern, error = %err, "ignoring malformed filepath pattern");
            false
        }
    }
}

fn cached_regex(pattern: &str) -> Result<Regex> {
    let mut cache = REGEX_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }

    let regex = Regex::new(pattern).map_err(|source| PipelineError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    if cache.len() >= REGEX_CACHE_CAPACITY {
        cache.clear();
    }
    cache.insert(pattern.to_string(), regex.clone());
    Ok(regex)
}
