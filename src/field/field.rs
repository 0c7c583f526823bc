use super::binding::ValueBinding;
use super::definition::{CompiledMask, MaskDefinition};
use super::validators::{Validator, run_validators};

type ChangeCallback = Box<dyn Fn(&str, &str) + Send>;

/// Embedding harness around the transducer: owns the compiled mask and an
/// explicit cell holding the last masked value, and runs the strict
/// keystroke gate in front of the transducer when enabled.
///
/// The transducer itself stays pure; every edit goes through `on_input`,
/// which is the only place the cached value changes.
pub struct MaskedField {
    compiled: CompiledMask,
    strict: bool,
    value: String,
    binding: Option<Box<dyn ValueBinding + Send>>,
    on_change: Option<ChangeCallback>,
    validators: Vec<Validator>,
}

impl std::fmt::Debug for MaskedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaskedField")
            .field("strict", &self.strict)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl MaskedField {
    /// Fails fast when the definition has no mask or a slot pattern does
    /// not compile. A default raw value is pre-rendered through the
    /// transducer.
    pub fn new(definition: &MaskDefinition) -> Result<Self, String> {
        let compiled = definition.compile()?;
        let value = definition
            .default
            .as_deref()
            .map(|raw| compiled.apply(raw))
            .unwrap_or_default();
        Ok(Self {
            compiled,
            strict: definition.strict,
            value,
            binding: None,
            on_change: None,
            validators: Vec::new(),
        })
    }

    /// Attaches a binding and pushes the current value into it so the two
    /// agree from the start.
    pub fn with_binding(mut self, mut binding: Box<dyn ValueBinding + Send>) -> Self {
        binding.set(&self.value);
        self.binding = Some(binding);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Callback invoked with the raw (pre-mask) and masked value after
    /// every accepted edit.
    pub fn on_change(mut self, callback: impl Fn(&str, &str) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Latest masked value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn binding(&self) -> Option<&dyn ValueBinding> {
        self.binding
            .as_deref()
            .map(|binding| binding as &dyn ValueBinding)
    }

    pub fn compiled(&self) -> &CompiledMask {
        &self.compiled
    }

    /// Processes one edit. In strict mode a raw value the gate rejects is
    /// discarded whole and the previous masked value is returned unchanged;
    /// otherwise the transducer result replaces the cached value, is pushed
    /// through the binding and handed to the change callback.
    pub fn on_input(&mut self, raw: &str) -> &str {
        if self.strict && !self.compiled.accepts(raw) {
            return &self.value;
        }
        self.value = self.compiled.apply(raw);
        if let Some(binding) = &mut self.binding {
            binding.set(&self.value);
        }
        if let Some(callback) = &self.on_change {
            callback(raw, &self.value);
        }
        &self.value
    }

    pub fn validate(&self) -> Result<(), String> {
        run_validators(&self.validators, &self.value)
    }

    pub fn is_complete(&self) -> bool {
        self.compiled.is_complete(&self.value)
    }

    /// Current value extended with `fill` over the unreached mask tail.
    pub fn preview(&self, fill: char) -> String {
        self.compiled.preview(&self.value, fill)
    }
}
