use super::model::{MaskToken, SlotRules};
use super::parser;

/// Applies `mask` to `raw`, accepting only slot characters that satisfy
/// their rule and stopping the pass at the first rejection.
///
/// Total over its inputs: empty raw input, empty masks, masks without
/// slots and raw input longer than the mask all degrade by truncation.
pub fn apply_mask(raw: &str, mask: &str, rules: &SlotRules) -> String {
    apply_tokens(raw, &parser::parse_mask(mask, rules), rules)
}

/// Token-level transducer; `apply_mask` is the string-level wrapper.
///
/// Two cursors walk in lockstep: one over the mask tokens, one over the raw
/// characters. Every processed token appends exactly one output character,
/// so the output is never longer than the mask and trailing literals are
/// not rendered before the user has typed past them.
pub fn apply_tokens(raw: &str, tokens: &[MaskToken], rules: &SlotRules) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::new();
    let mut raw_index = 0usize;

    for token in tokens {
        if raw_index >= chars.len() {
            break;
        }
        match token {
            MaskToken::Slot(marker) => {
                let ch = chars[raw_index];
                if !rules.accepts(*marker, ch) {
                    break;
                }
                out.push(ch);
                raw_index += 1;
            }
            MaskToken::Literal(literal) => {
                out.push(*literal);
                // Consume a raw character that already equals the literal,
                // so pasting "12/34" into "99/99" keeps one slash.
                if chars[raw_index] == *literal {
                    raw_index += 1;
                }
            }
        }
    }

    out
}
