// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the distance CLI.
//!
//! Distances are colored by closeness (green for exact, yellow for one edit,
//! red beyond) when stdout is a terminal. `NO_COLOR` turns that off, and so
//! does piping, so scripts always see plain `distance<TAB>candidate` lines.

use serde::Serialize;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

fn closeness_color(distance: i64) -> (u8, u8, u8) {
    match distance {
        0 => GREEN,
        1 => YELLOW,
        _ => RED,
    }
}

/// A raw distance, or the quick sentinel, colored by closeness.
pub fn distance(value: i64, colors: bool) -> String {
    if colors {
        format!("{}{}{}{}", BOLD, rgb(closeness_color(value)), value, RESET)
    } else {
        value.to_string()
    }
}

/// Normalized distances are printed as-is.
pub fn ratio(value: f64) -> String {
    value.to_string()
}

/// One kept candidate, as printed by `filter --format json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub distance: u8,
    pub candidate: String,
}

pub fn hit_line(hit: &Hit, colors: bool) -> String {
    format!(
        "{}\t{}",
        distance(i64::from(hit.distance), colors),
        hit.candidate
    )
}

pub fn hits_json(hits: &[Hit]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(hits)
}
