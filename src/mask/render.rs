use super::model::{MaskToken, SlotRules};
use super::transducer;
use unicode_width::UnicodeWidthStr;

/// Masked value extended with `fill` in unfilled slot positions and the
/// remaining literals, e.g. `"01/0"` over `"99/99/9999"` with `'_'` gives
/// `"01/0_/____"`.
pub fn preview(raw: &str, tokens: &[MaskToken], rules: &SlotRules, fill: char) -> String {
    let mut out = transducer::apply_tokens(raw, tokens, rules);
    // Every processed token contributes one output character, so the char
    // count tells us where the unrendered remainder of the mask starts.
    let rendered = out.chars().count();
    for token in tokens.iter().skip(rendered) {
        match token {
            MaskToken::Literal(ch) => out.push(*ch),
            MaskToken::Slot(_) => out.push(fill),
        }
    }
    out
}

/// Full placeholder for an empty field.
pub fn placeholder(tokens: &[MaskToken], fill: char) -> String {
    tokens
        .iter()
        .map(|token| match token {
            MaskToken::Literal(ch) => *ch,
            MaskToken::Slot(_) => fill,
        })
        .collect()
}

/// Terminal column width of a rendered value.
pub fn display_width(value: &str) -> usize {
    UnicodeWidthStr::width(value)
}

#[cfg(test)]
mod tests {
    use super::{display_width, placeholder, preview};
    use crate::mask::model::SlotRules;
    use crate::mask::parser::parse_mask;

    fn digit_rules() -> SlotRules {
        SlotRules::new()
            .with_slot('9', r"\d")
            .expect("rule should compile")
    }

    #[test]
    fn preview_fills_the_unreached_mask_tail() {
        let rules = digit_rules();
        let tokens = parse_mask("99/99/9999", &rules);
        assert_eq!(preview("010", &tokens, &rules, '_'), "01/0_/____");
    }

    #[test]
    fn preview_of_empty_input_equals_the_placeholder() {
        let rules = digit_rules();
        let tokens = parse_mask("99/99", &rules);
        assert_eq!(preview("", &tokens, &rules, '_'), placeholder(&tokens, '_'));
        assert_eq!(placeholder(&tokens, '_'), "__/__");
    }

    #[test]
    fn preview_of_a_complete_value_adds_nothing() {
        let rules = digit_rules();
        let tokens = parse_mask("99:99", &rules);
        assert_eq!(preview("1234", &tokens, &rules, '_'), "12:34");
    }

    #[test]
    fn display_width_counts_columns() {
        assert_eq!(display_width("01/01"), 5);
    }
}
