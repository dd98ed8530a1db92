use validator::ValidationError;

const CONTACT_NUMBER_MIN_LEN: usize = 7;
const CONTACT_NUMBER_MAX_LEN: usize = 20;
const CONTACT_EXTRA_CHARS: &str = "+-() ";

pub fn validate_contact_number(value: &str) -> Result<(), ValidationError> {
    let len = value.len();

    if len < CONTACT_NUMBER_MIN_LEN {
        return Err(error("contact_number_too_short"));
    }
    if len > CONTACT_NUMBER_MAX_LEN {
        return Err(error("contact_number_too_long"));
    }

    for c in value.chars() {
        if !c.is_ascii_digit() && !CONTACT_EXTRA_CHARS.contains(c) {
            return Err(error("contact_number_invalid_character"));
        }
    }

    Ok(())
}

fn error(code: &'static str) -> ValidationError {
    ValidationError::new(code)
}
