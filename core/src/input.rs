use std::collections::HashMap;

use crate::error::InputError;
use crate::model::scale::GradeScale;

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub words: Vec<String>,
    pub metadata: HashMap<String, String>,
}

impl ParsedInput {
    /// Words from `start` on, joined back with single spaces.
    pub fn text_from(&self, start: usize) -> String {
        self.words.get(start..).map(|w| w.join(" ")).unwrap_or_default()
    }

    /// Rewrites metadata keys to their full names, rejecting unknown or
    /// ambiguous prefixes.
    pub fn normalize_keys(self, known_keys: &[&str]) -> Result<ParsedInput, InputError> {
        let mut metadata = HashMap::new();
        for (key, value) in self.metadata {
            metadata.insert(expand_key(&key, known_keys)?, value);
        }
        Ok(ParsedInput {
            words: self.words,
            metadata,
        })
    }
}

/// Splits a command line into plain words and `key:value` options. Only
/// alphabetic keys make an option.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut words = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            // `Chapitre 2: limites` keeps `2:` as text.
            if !key.is_empty() && key.chars().all(char::is_alphabetic) {
                metadata.insert(key.to_lowercase(), value.to_string());
                continue;
            }
        }
        words.push(arg.clone());
    }

    ParsedInput { words, metadata }
}

pub fn parse_line(line: &str) -> ParsedInput {
    let args: Vec<String> = line.split_whitespace().map(|s| s.to_string()).collect();
    parse_args(&args)
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String, InputError> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(InputError::UnknownKey(key.to_string())),
        _ => Err(InputError::AmbiguousKey {
            key: key.to_string(),
            candidates: matches.iter().map(|m| m.to_string()).collect(),
        }),
    }
}

/// Parses a score typed by the user and checks it against the scale.
/// A decimal comma is accepted.
pub fn parse_score(raw: &str, scale: GradeScale) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing("score"));
    }

    let score: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| InputError::InvalidScore(raw.to_string()))?;

    if !score.is_finite() {
        return Err(InputError::InvalidScore(raw.to_string()));
    }
    if !scale.contains(score) {
        return Err(InputError::ScoreOutOfRange {
            score,
            min: scale.min(),
            max: scale.max(),
        });
    }
    Ok(score)
}
