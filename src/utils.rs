use crate::config::{MIN_MOUSE_DPI, MIN_SENSITIVITY};

/// Field validation error types shown under the numeric inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    Required(&'static str),
    NotANumber(&'static str),
    NotPositive(&'static str),
    BelowMinimum(&'static str, String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required.", field),
            FieldError::NotANumber(field) => write!(f, "{} must be a valid number.", field),
            FieldError::NotPositive(field) => write!(f, "{} must be positive.", field),
            FieldError::BelowMinimum(field, min) => {
                write!(f, "{} must be at least {}.", field, min)
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    field_name: &'static str,
) -> Result<T, FieldError>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(FieldError::BelowMinimum(field_name, min_val.to_string()));
                }
            }
            Ok(val)
        }
        Err(_) => Err(FieldError::NotANumber(field_name)),
    }
}

/// Validate sensitivity input
pub fn validate_sensitivity(input: &str) -> Result<f64, FieldError> {
    match validate_numeric_input(input, Some(MIN_SENSITIVITY), "Sensitivity") {
        Err(FieldError::BelowMinimum(field, _)) => Err(FieldError::NotPositive(field)),
        other => other,
    }
}

/// Validate mouse DPI input
pub fn validate_dpi(input: &str) -> Result<u32, FieldError> {
    // Number inputs may hand back "800.0"
    let trimmed = input.trim();
    let normalized = parse_dpi(trimmed)
        .map(|dpi| dpi.to_string())
        .unwrap_or_else(|| trimmed.to_string());
    validate_numeric_input(&normalized, Some(MIN_MOUSE_DPI), "DPI")
}

/// Lenient numeric parse used by the conversion gates: `None` for empty or
/// unparsable text.
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a DPI value. Only whole, non-negative numbers are accepted since the
/// backend takes DPI as an integer.
pub fn parse_dpi(input: &str) -> Option<u32> {
    let value = parse_number(input)?;
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}
