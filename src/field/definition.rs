use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::mask::model::{MaskToken, SlotRules};
use crate::mask::{gate, parser, render, transducer};

/// Declarative mask configuration: the mask string, one pattern per slot
/// marker, an optional default raw value and the strict-gate flag.
///
/// Loadable from YAML or JSON; `compile` turns it into a [`CompiledMask`]
/// and reports the first problem instead of producing a degenerate mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskDefinition {
    pub mask: String,
    #[serde(default)]
    pub slots: IndexMap<char, String>,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub strict: bool,
}

impl MaskDefinition {
    pub fn new(mask: impl Into<String>) -> Self {
        Self {
            mask: mask.into(),
            slots: IndexMap::new(),
            default: None,
            strict: false,
        }
    }

    pub fn with_slot(mut self, marker: char, pattern: impl Into<String>) -> Self {
        self.slots.insert(marker, pattern.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn from_yaml(source: &str) -> Result<Self, String> {
        serde_yaml::from_str(source).map_err(|err| format!("Invalid mask definition: {err}"))
    }

    pub fn from_json(source: &str) -> Result<Self, String> {
        serde_json::from_str(source).map_err(|err| format!("Invalid mask definition: {err}"))
    }

    /// Fails fast on an empty mask or a slot pattern that does not compile.
    pub fn compile(&self) -> Result<CompiledMask, String> {
        if self.mask.is_empty() {
            return Err("Mask definition has an empty mask".to_string());
        }
        let mut rules = SlotRules::new();
        for (marker, pattern) in &self.slots {
            rules.insert(*marker, pattern)?;
        }
        let tokens = parser::parse_mask(&self.mask, &rules);
        Ok(CompiledMask {
            mask: self.mask.clone(),
            tokens,
            rules,
        })
    }
}

/// A tokenized mask together with its compiled slot rules.
#[derive(Debug, Clone)]
pub struct CompiledMask {
    mask: String,
    tokens: Vec<MaskToken>,
    rules: SlotRules,
}

impl CompiledMask {
    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub fn tokens(&self) -> &[MaskToken] {
        &self.tokens
    }

    pub fn rules(&self) -> &SlotRules {
        &self.rules
    }

    /// Runs the transducer over `raw`.
    pub fn apply(&self, raw: &str) -> String {
        transducer::apply_tokens(raw, &self.tokens, &self.rules)
    }

    /// Runs the position-aligned strict gate over `raw`.
    pub fn accepts(&self, raw: &str) -> bool {
        gate::accepts(raw, &self.tokens, &self.rules)
    }

    pub fn preview(&self, raw: &str, fill: char) -> String {
        render::preview(raw, &self.tokens, &self.rules, fill)
    }

    pub fn placeholder(&self, fill: char) -> String {
        render::placeholder(&self.tokens, fill)
    }

    /// True once `raw` renders every mask position. Trailing literals count
    /// only when the raw value carries them, matching the transducer's
    /// earned-literal behavior.
    pub fn is_complete(&self, raw: &str) -> bool {
        self.apply(raw).chars().count() == self.tokens.len()
    }
}
