//! Short correlation suffix for storage keys
//!
//! The suffix only lowers the chance that two uploads in the same millisecond
//! land on the same key. It is taken from the tail of the caller's request id
//! when one is available and generated otherwise.

use rand::Rng;

/// Number of characters in a suffix.
pub const SUFFIX_LEN: usize = 8;

/// Source of suffixes for invocations that carry no usable request id.
pub trait SuffixSource: Send + Sync {
    /// Produce a fresh [`SUFFIX_LEN`] character suffix.
    fn generate(&self) -> String;
}

/// Eight random lowercase hex characters from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHexSuffix;

impl SuffixSource for RandomHexSuffix {
    fn generate(&self) -> String {
        format!("{:08x}", rand::thread_rng().gen::<u32>())
    }
}

/// Always returns the same suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSuffix(String);

impl FixedSuffix {
    /// Create a fixed suffix source.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self(suffix.into())
    }
}

impl SuffixSource for FixedSuffix {
    fn generate(&self) -> String {
        self.0.clone()
    }
}

/// Pick the key suffix for an invocation.
///
/// Uses the last [`SUFFIX_LEN`] characters of `request_id` when it has at
/// least that many, and asks `source` for a fresh one otherwise.
pub fn short_id(request_id: Option<&str>, source: &dyn SuffixSource) -> String {
    match request_id {
        Some(id) if id.chars().count() >= SUFFIX_LEN => {
            let skip = id.chars().count() - SUFFIX_LEN;
            id.chars().skip(skip).collect()
        }
        _ => source.generate(),
    }
}
