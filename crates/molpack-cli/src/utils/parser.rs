use thiserror::Error;

/// Three comma-separated components, such as rotation angles or an axis.
pub type Triple = [f64; 3];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid vector '{0}'. Expected three comma-separated numbers (e.g., '0,-1,0').")]
    InvalidTripleFormat(String),

    #[error("Component '{component}' in '{input}' is not a finite number.")]
    InvalidComponent { component: String, input: String },

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),
}

pub fn parse_triple(input: &str) -> Result<Triple, ParseError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidTripleFormat(input.to_string()));
    }

    let mut triple = [0.0; 3];
    for (slot, part) in triple.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidComponent {
                component: part.to_string(),
                input: input.to_string(),
            })?;
    }
    Ok(triple)
}

/// Splits `KEY=VALUE` on the first `=`. Both sides are trimmed; the key must be non-empty.
pub fn parse_key_value(input: &str) -> Result<(&str, &str), ParseError> {
    match input.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(input.to_string())),
    }
}
