use crate::domain::ports::DirectionResolver;
use crate::utils::error::Result;
use crate::utils::validation::validate_symbol_list;

pub const DEFAULT_DIRECTIONS: [char; 4] = ['N', 'E', 'S', 'W'];

/// Ordered direction table; a symbol's state is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompassDirections {
    symbols: Vec<char>,
}

impl CompassDirections {
    pub fn from_symbols(symbols: &[String]) -> Result<Self> {
        validate_symbol_list("directions.symbols", symbols)?;

        let symbols = symbols
            .iter()
            .filter_map(|s| s.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Reverse lookup, for rendering a resolved pose.
    pub fn symbol_for(&self, state: usize) -> Option<char> {
        self.symbols.get(state).copied()
    }
}

impl Default for CompassDirections {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_DIRECTIONS.to_vec(),
        }
    }
}

impl DirectionResolver for CompassDirections {
    fn resolve_direction(&self, direction: char) -> Option<usize> {
        let direction = direction.to_ascii_uppercase();
        self.symbols.iter().position(|s| *s == direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compass() {
        let compass = CompassDirections::default();
        assert_eq!(compass.resolve_direction('N'), Some(0));
        assert_eq!(compass.resolve_direction('E'), Some(1));
        assert_eq!(compass.resolve_direction('s'), Some(2));
        assert_eq!(compass.resolve_direction('W'), Some(3));
        assert_eq!(compass.resolve_direction('X'), None);
        assert_eq!(compass.symbol_for(1), Some('E'));
        assert_eq!(compass.symbol_for(4), None);
    }

    #[test]
    fn test_custom_symbols() {
        let symbols: Vec<String> = ["u", "r", "d", "l"].iter().map(|s| s.to_string()).collect();
        let compass = CompassDirections::from_symbols(&symbols).unwrap();
        assert_eq!(compass.symbols(), &['U', 'R', 'D', 'L']);
        assert_eq!(compass.resolve_direction('d'), Some(2));
        assert_eq!(compass.resolve_direction('N'), None);
    }

    #[test]
    fn test_invalid_symbols_rejected() {
        assert!(CompassDirections::from_symbols(&[]).is_err());
        assert!(CompassDirections::from_symbols(&["NE".to_string()]).is_err());
    }
}
