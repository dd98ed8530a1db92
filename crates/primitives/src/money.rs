use validator::ValidationError;

pub const MINOR_UNITS_PER_DOLLAR: i64 = 100;

const MAX_FRACTION_DIGITS: usize = 2;

/// Parse a user-entered decimal amount into minor units without going
/// through floating point. "25.50" becomes 2550.
pub fn parse_amount(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(error("amount_empty"));
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(error("amount_invalid"));
    }
    if fraction.len() > MAX_FRACTION_DIGITS {
        return Err(error("amount_too_precise"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(error("amount_invalid"));
    }

    let whole_minor = if whole.is_empty() {
        0i64
    } else {
        whole
            .parse::<i64>()
            .map_err(|_| error("amount_out_of_range"))?
    };

    let mut fraction_minor = if fraction.is_empty() {
        0i64
    } else {
        fraction
            .parse::<i64>()
            .map_err(|_| error("amount_invalid"))?
    };
    for _ in fraction.len()..MAX_FRACTION_DIGITS {
        fraction_minor *= 10;
    }

    whole_minor
        .checked_mul(MINOR_UNITS_PER_DOLLAR)
        .and_then(|minor| minor.checked_add(fraction_minor))
        .ok_or_else(|| error("amount_out_of_range"))
}

/// Custom validator for DTO amount fields. Rejects anything that does not
/// parse to a strictly positive amount.
pub fn validate_positive_amount(input: &str) -> Result<(), ValidationError> {
    let minor = parse_amount(input)?;
    if minor == 0 {
        return Err(error("amount_not_positive"));
    }
    Ok(())
}

/// Render minor units back as a decimal string, "2550" -> "25.50".
pub fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let magnitude = minor.unsigned_abs();
    format!(
        "{}{}.{:02}",
        sign,
        magnitude / MINOR_UNITS_PER_DOLLAR as u64,
        magnitude % MINOR_UNITS_PER_DOLLAR as u64
    )
}

fn error(code: &'static str) -> ValidationError {
    ValidationError::new(code)
}
