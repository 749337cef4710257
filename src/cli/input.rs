// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning command-line text into sequences, and reading candidate streams.

use std::borrow::Borrow;
use std::fmt;
use std::io::{BufRead, Read};

use anyhow::{anyhow, Context, Result};
use distance::{DistanceError, Symbols};
use serde::de::{Deserializer as _, SeqAccess, Visitor};
use serde_json::Value;

/// A candidate as typed by the user, next to the elements it is compared by.
#[derive(Debug, Clone)]
pub struct Candidate<S> {
    pub text: String,
    pub units: S,
}

impl<S> Candidate<S> {
    pub fn new(text: String, to_units: fn(&str) -> S) -> Self {
        let units = to_units(&text);
        Candidate { text, units }
    }
}

impl<S> Borrow<S> for Candidate<S> {
    fn borrow(&self) -> &S {
        &self.units
    }
}

pub fn chars(text: &str) -> Symbols {
    Symbols::new(text)
}

pub fn bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// One candidate per line. Trailing `\r` is dropped, empty lines are kept.
pub fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String>> {
    reader.lines().enumerate().map(|(n, line)| {
        line.map(|l| l.trim_end_matches('\r').to_owned())
            .with_context(|| format!("Failed to read candidate on line {}", n + 1))
    })
}

/// Stream a JSON array of strings into `consume`.
///
/// Elements are parsed only as `consume` pulls them, so the array is never
/// held in memory. A non-string element is a type mismatch, reported when the
/// consumer reaches it. An error returned by `consume` wins over whatever is
/// left unparsed in the array.
pub fn each_json_candidate<R, F>(reader: R, consume: F) -> Result<()>
where
    R: Read,
    F: FnOnce(&mut dyn Iterator<Item = Result<String>>) -> Result<()>,
{
    let mut outcome = None;
    let mut de = serde_json::Deserializer::from_reader(reader);
    let parsed = de.deserialize_seq(CandidateArray {
        consume,
        outcome: &mut outcome,
    });
    if let Some(result) = outcome {
        result?;
    }
    parsed.context("Failed to parse candidates as JSON")?;
    de.end().context("Unexpected data after the candidate array")?;
    Ok(())
}

struct CandidateArray<'a, F> {
    consume: F,
    outcome: &'a mut Option<Result<()>>,
}

impl<'de, F> Visitor<'de> for CandidateArray<'_, F>
where
    F: FnOnce(&mut dyn Iterator<Item = Result<String>>) -> Result<()>,
{
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON array of strings")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut position = 0;
        let mut broken = false;
        let mut candidates = std::iter::from_fn(|| {
            if broken {
                return None;
            }
            let at = position;
            position += 1;
            let item = match seq.next_element::<Value>() {
                Ok(Some(item)) => item,
                Ok(None) => return None,
                Err(err) => {
                    // The parser does not move past a syntax error
                    broken = true;
                    return Some(Err(anyhow!("Failed to parse candidate {}: {}", at, err)));
                }
            };
            Some(match item {
                Value::String(text) => Ok(text),
                other => Err(DistanceError::TypeMismatch {
                    position: at,
                    expected: "string",
                    found: kind(&other).to_string(),
                }
                .into()),
            })
        });
        *self.outcome = Some((self.consume)(&mut candidates));
        Ok(())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
