//! Generated test-method naming with per-run collision handling.

use crate::common::text::capitalize_first;
use std::collections::HashMap;

/// Derives unique generated names from source method names. The candidate is
/// the source name with its first letter upper-cased; repeats of a candidate
/// get an ascending counter appended, starting at 2.
///
/// The counter is keyed by the capitalized candidate, so `add` and `Add`
/// share one counter. That matches the observed behavior of the annotation
/// format this tool grew out of and is kept deliberately.
#[derive(Debug, Default)]
pub struct MethodNameResolver {
    counters: HashMap<String, usize>,
}

impl MethodNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, source_name: &str) -> String {
        let candidate = capitalize_first(source_name);
        let count = self.counters.entry(candidate.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            format!("{candidate}{count}")
        } else {
            candidate
        }
    }
}
