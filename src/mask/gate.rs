use super::model::{MaskToken, SlotRules};

/// Position-aligned strict pre-check run before the transducer when a field
/// rejects invalid keystrokes outright.
///
/// Raw positions are compared 1:1 against mask positions, which only lines
/// up for same-length in-place edits. A partially formatted paste or a
/// mid-string insertion shifts the alignment and can fail here even though
/// the transducer's cursor-based matching would keep an accepted prefix;
/// that asymmetry is kept as-is.
pub fn accepts(raw: &str, tokens: &[MaskToken], rules: &SlotRules) -> bool {
    for (token, ch) in tokens.iter().zip(raw.chars()) {
        if let MaskToken::Slot(marker) = token
            && !rules.accepts(*marker, ch)
        {
            return false;
        }
    }
    true
}
