use indexmap::IndexMap;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    /// Rendered verbatim; a matching raw character at the skip point is
    /// consumed so already-formatted pastes do not double-insert separators.
    Literal(char),
    /// Stands for one user-supplied character, validated by the rule
    /// registered for this marker.
    Slot(char),
}

impl MaskToken {
    pub fn mask_char(&self) -> char {
        match self {
            Self::Literal(ch) | Self::Slot(ch) => *ch,
        }
    }
}

/// Ordered mapping from slot marker to its single-character rule.
///
/// Rules are compiled once at registration and are immutable afterwards;
/// `Regex` matching carries no state across calls, so one compiled rule is
/// safe to test character by character.
#[derive(Debug, Clone, Default)]
pub struct SlotRules {
    rules: IndexMap<char, Regex>,
}

impl SlotRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, marker: char, pattern: &str) -> Result<(), String> {
        let rule = Regex::new(pattern)
            .map_err(|err| format!("Invalid pattern for slot '{marker}': {err}"))?;
        self.rules.insert(marker, rule);
        Ok(())
    }

    pub fn with_slot(mut self, marker: char, pattern: &str) -> Result<Self, String> {
        self.insert(marker, pattern)?;
        Ok(self)
    }

    pub fn contains(&self, marker: char) -> bool {
        self.rules.contains_key(&marker)
    }

    /// Tests exactly one character against the marker's rule. Unregistered
    /// markers accept nothing.
    pub fn accepts(&self, marker: char, ch: char) -> bool {
        let Some(rule) = self.rules.get(&marker) else {
            return false;
        };
        let mut buf = [0u8; 4];
        rule.is_match(ch.encode_utf8(&mut buf))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn markers(&self) -> impl Iterator<Item = char> + '_ {
        self.rules.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::SlotRules;

    #[test]
    fn accepts_tests_a_single_character() {
        let rules = SlotRules::new()
            .with_slot('9', r"\d")
            .expect("rule should compile");
        assert!(rules.accepts('9', '7'));
        assert!(!rules.accepts('9', 'x'));
    }

    #[test]
    fn unregistered_marker_accepts_nothing() {
        let rules = SlotRules::new();
        assert!(!rules.accepts('9', '7'));
    }

    #[test]
    fn invalid_pattern_is_reported_with_its_marker() {
        let err = SlotRules::new()
            .with_slot('9', "[")
            .expect_err("pattern should be rejected");
        assert!(err.contains("slot '9'"));
    }

    #[test]
    fn multibyte_characters_are_matched_whole() {
        let rules = SlotRules::new()
            .with_slot('A', r"\p{Alphabetic}")
            .expect("rule should compile");
        assert!(rules.accepts('A', 'é'));
        assert!(!rules.accepts('A', '3'));
    }
}
