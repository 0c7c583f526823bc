use super::definition::CompiledMask;

pub type Validator = Box<dyn Fn(&str) -> Result<(), String> + Send>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), String> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.trim().is_empty() {
            Err("This field is required".to_string())
        } else {
            Ok(())
        }
    })
}

/// Fails until every mask position is filled.
pub fn complete(mask: CompiledMask) -> Validator {
    Box::new(move |value: &str| {
        if mask.is_complete(value) {
            Ok(())
        } else {
            Err("Invalid or incomplete value".to_string())
        }
    })
}

pub fn custom<F>(f: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + 'static,
{
    let msg = message.into();
    Box::new(
        move |value: &str| {
            if f(value) { Ok(()) } else { Err(msg.clone()) }
        },
    )
}
