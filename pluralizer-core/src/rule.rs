//! Ordered suffix rules
//!
//! Both cascades are plain slices of [`SuffixRule`] evaluated first-match-wins,
//! which keeps the order visible in one place and lets callers list them.

/// One step of a suffix cascade
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    /// Short identifier, reported in traces
    pub name: &'static str,
    /// Human-readable summary
    pub description: &'static str,
    matches: fn(&str) -> bool,
    rewrite: fn(&str) -> String,
}

impl SuffixRule {
    pub(crate) const fn new(
        name: &'static str,
        description: &'static str,
        matches: fn(&str) -> bool,
        rewrite: fn(&str) -> String,
    ) -> Self {
        Self {
            name,
            description,
            matches,
            rewrite,
        }
    }

    /// Whether the rule applies to `word`
    pub fn matches(&self, word: &str) -> bool {
        (self.matches)(word)
    }

    /// Rewrite `word`; only meaningful when [`matches`](Self::matches) holds
    pub fn apply(&self, word: &str) -> String {
        (self.rewrite)(word)
    }
}

/// First rule in `rules` that matches `word`
pub fn first_match<'r>(rules: &'r [SuffixRule], word: &str) -> Option<&'r SuffixRule> {
    rules.iter().find(|rule| rule.matches(word))
}
