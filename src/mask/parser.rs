use super::model::{MaskToken, SlotRules};

/// Splits a mask string into literal and slot tokens.
///
/// A character is a slot only when it is registered in `rules`; anything
/// else is a literal, so an unregistered marker degrades to a literal
/// instead of failing.
pub fn parse_mask(mask: &str, rules: &SlotRules) -> Vec<MaskToken> {
    mask.chars()
        .map(|ch| {
            if rules.contains(ch) {
                MaskToken::Slot(ch)
            } else {
                MaskToken::Literal(ch)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_mask;
    use crate::mask::model::{MaskToken, SlotRules};

    #[test]
    fn splits_mask_into_slots_and_literals() {
        let rules = SlotRules::new()
            .with_slot('9', r"\d")
            .expect("rule should compile");
        let tokens = parse_mask("9/9", &rules);
        assert_eq!(
            tokens,
            vec![
                MaskToken::Slot('9'),
                MaskToken::Literal('/'),
                MaskToken::Slot('9'),
            ]
        );
    }

    #[test]
    fn unregistered_marker_becomes_a_literal() {
        let rules = SlotRules::new();
        let tokens = parse_mask("9", &rules);
        assert_eq!(tokens, vec![MaskToken::Literal('9')]);
    }

    #[test]
    fn empty_mask_yields_no_tokens() {
        let rules = SlotRules::new();
        assert!(parse_mask("", &rules).is_empty());
    }
}
