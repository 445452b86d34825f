//! Captured output of a step, service or init phase.

use memchr::memmem;
use serde::{Deserialize, Serialize};

use crate::constants::SECRET_LOG_MASK;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub id: Option<i64>,
    pub build_id: Option<i64>,
    pub repo_id: Option<i64>,
    pub service_id: Option<i64>,
    pub step_id: Option<i64>,
    pub init_id: Option<i64>,
    pub data: Option<Vec<u8>>,
}

impl Log {
    /// Append a chunk of streamed output.
    pub fn append_data(&mut self, chunk: &[u8]) {
        self.data.get_or_insert_with(Vec::new).extend_from_slice(chunk);
    }

    /// Replace every literal occurrence of each secret value with the log mask.
    pub fn mask_data(&mut self, secrets: &[String]) {
        let Some(data) = self.data.as_mut() else {
            return;
        };

        for secret in secrets.iter().filter(|s| !s.is_empty()) {
            *data = replace_all(data, secret.as_bytes(), SECRET_LOG_MASK.as_bytes());
        }
    }
}

/// Replace non-overlapping occurrences of `needle`, scanning left to right.
fn replace_all(haystack: &[u8], needle: &[u8], with: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut last = 0;
    for start in memmem::find_iter(haystack, needle) {
        out.extend_from_slice(&haystack[last..start]);
        out.extend_from_slice(with);
        last = start + needle.len();
    }
    out.extend_from_slice(&haystack[last..]);
    out
}
