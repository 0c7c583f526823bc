pub mod field;
pub mod mask;

pub use field::binding::{StateCell, ValueBinding};
pub use field::definition::{CompiledMask, MaskDefinition};
pub use field::field::MaskedField;
pub use field::validators;

pub use mask::gate;
pub use mask::model::{MaskToken, SlotRules};
pub use mask::presets;
pub use mask::render;
pub use mask::transducer::apply_mask;
