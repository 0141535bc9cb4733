use crate::utils::error::{InputError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(InputError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InputError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every entry must be exactly one non-whitespace character, and no two
/// entries may be equal ignoring case.
pub fn validate_symbol_list(field_name: &str, symbols: &[String]) -> Result<()> {
    if symbols.is_empty() {
        return Err(InputError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one symbol is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for symbol in symbols {
        let mut chars = symbol.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => c,
            _ => {
                return Err(InputError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: symbol.clone(),
                    reason: "Symbol must be a single non-whitespace character".to_string(),
                })
            }
        };

        if !seen.insert(c.to_ascii_uppercase()) {
            return Err(InputError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: symbol.clone(),
                reason: "Duplicate symbol".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("rovers", 2, 1).is_ok());
        assert!(validate_positive_number("rovers", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("messages.incorrect_input", "Try again").is_ok());
        assert!(validate_non_empty_string("messages.incorrect_input", "   ").is_err());
    }

    #[test]
    fn test_validate_symbol_list() {
        let compass: Vec<String> = ["N", "E", "S", "W"].iter().map(|s| s.to_string()).collect();
        assert!(validate_symbol_list("directions.symbols", &compass).is_ok());

        assert!(validate_symbol_list("directions.symbols", &[]).is_err());
        assert!(validate_symbol_list("directions.symbols", &["NE".to_string()]).is_err());
        assert!(validate_symbol_list("directions.symbols", &[" ".to_string()]).is_err());

        let duplicated = vec!["N".to_string(), "n".to_string()];
        assert!(validate_symbol_list("directions.symbols", &duplicated).is_err());
    }
}
