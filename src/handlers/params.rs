// src/handlers/params.rs
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

pub const DEFAULT_DAYS: usize = 30;
pub const DEFAULT_LIMIT: usize = 10;

// Leading whitespace, optional sign, then digits; anything after is ignored.
static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?)(\d+)").expect("leading integer pattern"));

/// Lenient integer parse of a count parameter.
///
/// Missing, non-numeric, zero and negative values all yield `default`.
/// Values too large for `usize` saturate.
pub fn parse_count(raw: Option<&str>, default: usize) -> usize {
    let Some(caps) = raw.and_then(|r| LEADING_INT.captures(r)) else {
        return default;
    };
    if &caps[1] == "-" {
        return default;
    }
    match caps[2].parse::<usize>() {
        Ok(0) => default,
        Ok(n) => n,
        Err(_) => usize::MAX,
    }
}

pub fn count_param(query: &HashMap<String, String>, key: &str, default: usize) -> usize {
    parse_count(query.get(key).map(String::as_str), default)
}
