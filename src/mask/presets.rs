use super::model::SlotRules;
use crate::field::definition::MaskDefinition;

pub const DIGIT: &str = "[0-9]";
pub const ALPHA: &str = "[a-zA-Z]";
pub const ALNUM: &str = "[a-zA-Z0-9]";

/// Common mask alphabet: `9` and `_` take digits, `A` a letter, `*` an
/// alphanumeric character.
pub fn standard_rules() -> SlotRules {
    let mut rules = SlotRules::new();
    for (marker, pattern) in [('9', DIGIT), ('_', DIGIT), ('A', ALPHA), ('*', ALNUM)] {
        rules
            .insert(marker, pattern)
            .expect("invalid preset pattern");
    }
    rules
}

pub fn phone_us() -> MaskDefinition {
    MaskDefinition::new("(999) 999-9999").with_slot('9', DIGIT)
}

pub fn zip_us() -> MaskDefinition {
    MaskDefinition::new("99999").with_slot('9', DIGIT)
}

pub fn date_dd_mm_yyyy() -> MaskDefinition {
    MaskDefinition::new("99/99/9999").with_slot('9', DIGIT)
}

pub fn time_hh_mm() -> MaskDefinition {
    MaskDefinition::new("99:99").with_slot('9', DIGIT)
}

#[cfg(test)]
mod tests {
    use super::{date_dd_mm_yyyy, phone_us, standard_rules};
    use crate::mask::transducer::apply_mask;

    #[test]
    fn standard_rules_cover_the_common_markers() {
        let rules = standard_rules();
        assert!(rules.accepts('9', '5'));
        assert!(rules.accepts('_', '5'));
        assert!(rules.accepts('A', 'k'));
        assert!(!rules.accepts('A', '5'));
        assert!(rules.accepts('*', '5'));
        assert!(rules.accepts('*', 'k'));
    }

    #[test]
    fn phone_preset_formats_a_us_number() {
        let compiled = phone_us().compile().expect("preset should compile");
        assert_eq!(compiled.apply("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn date_preset_formats_a_date() {
        let compiled = date_dd_mm_yyyy()
            .compile()
            .expect("preset should compile");
        assert_eq!(compiled.apply("31122024"), "31/12/2024");
    }
}
