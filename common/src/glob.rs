//! Shell-expression matching.
//!
//! PAC shell expressions know exactly two metacharacters: `*` matches any
//! run of characters (including none) and `?` matches exactly one.
//! Everything else is literal. Matches are anchored and case-sensitive.

use std::collections::HashMap;
use std::sync::Mutex;

use regex::Regex;

const DEFAULT_CACHE_CAPACITY: usize = 512;

/// One-shot anchored match of `input` against a shell expression.
///
/// The expression is trimmed before matching; the input is not.
pub fn matches(input: &str, shexp: &str) -> bool {
    match compile(shexp.trim()) {
        Ok(pattern) => pattern.is_match(input),
        Err(err) => {
            tracing::debug!("unmatchable shell expression {shexp:?}: {err}");
            false
        }
    }
}

fn compile(shexp: &str) -> Result<Regex, regex::Error> {
    let mut source = String::with_capacity(shexp.len() + 8);
    let mut literal = String::new();
    source.push('^');
    for c in shexp.chars() {
        match c {
            '*' | '?' => {
                if !literal.is_empty() {
                    source.push_str(&regex::escape(&literal));
                    literal.clear();
                }
                source.push_str(if c == '*' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        source.push_str(&regex::escape(&literal));
    }
    source.push('$');
    Regex::new(&source)
}

/// Shell-expression matcher with a bounded cache of compiled patterns.
///
/// PAC scripts reuse a small fixed set of expressions across many URL
/// evaluations. The cache is dropped wholesale once it reaches capacity.
pub struct GlobMatcher {
    capacity: usize,
    cache: Mutex<HashMap<String, Regex>>,
}

impl GlobMatcher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Anchored match through the pattern cache.
    pub fn matches(&self, input: &str, shexp: &str) -> bool {
        let shexp = shexp.trim();
        let mut cache = self.cache.lock().unwrap();
        if let Some(pattern) = cache.get(shexp) {
            return pattern.is_match(input);
        }
        match compile(shexp) {
            Ok(pattern) => {
                let matched = pattern.is_match(input);
                if cache.len() >= self.capacity {
                    cache.clear();
                }
                cache.insert(shexp.to_string(), pattern);
                matched
            }
            Err(err) => {
                tracing::debug!("unmatchable shell expression {shexp:?}: {err}");
                false
            }
        }
    }
}

impl Default for GlobMatcher {
    fn default() -> Self {
        Self::new()
    }
}
