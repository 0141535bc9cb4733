use crate::core::directions::{CompassDirections, DEFAULT_DIRECTIONS};
use crate::core::MessageProvider;
use crate::utils::error::{InputError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_symbol_list, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub messages: MessagesConfig,
    pub directions: DirectionsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub incorrect_input: String,
    pub surface_size_prompt: String,
    pub rover_position_prompt: String,
    pub movement_commands_prompt: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            incorrect_input: "Incorrect input, please try again.".to_string(),
            surface_size_prompt: "Please enter the surface size (width height):".to_string(),
            rover_position_prompt: "Please enter the rover position (x y direction), e.g. 1 2 N:"
                .to_string(),
            movement_commands_prompt:
                "Please enter the movement commands (L, R, M), e.g. LMLMLMLMM:".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsConfig {
    pub symbols: Vec<String>,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_DIRECTIONS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl InputConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InputError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InputError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROVER_PROMPT})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InputError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 建立方向表
    pub fn compass(&self) -> Result<CompassDirections> {
        CompassDirections::from_symbols(&self.directions.symbols)
    }
}

impl MessageProvider for MessagesConfig {
    fn incorrect_input(&self) -> &str {
        &self.incorrect_input
    }

    fn surface_size_prompt(&self) -> &str {
        &self.surface_size_prompt
    }

    fn rover_position_prompt(&self) -> &str {
        &self.rover_position_prompt
    }

    fn movement_commands_prompt(&self) -> &str {
        &self.movement_commands_prompt
    }
}

impl Validate for InputConfig {
    fn validate(&self) -> Result<()> {
        let messages = &self.messages;
        validate_non_empty_string("messages.incorrect_input", &messages.incorrect_input)?;
        validate_non_empty_string("messages.surface_size_prompt", &messages.surface_size_prompt)?;
        validate_non_empty_string(
            "messages.rover_position_prompt",
            &messages.rover_position_prompt,
        )?;
        validate_non_empty_string(
            "messages.movement_commands_prompt",
            &messages.movement_commands_prompt,
        )?;

        validate_symbol_list("directions.symbols", &self.directions.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DirectionResolver;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = InputConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.directions.symbols, vec!["N", "E", "S", "W"]);
        assert_eq!(
            config.messages.incorrect_input(),
            MessagesConfig::default().incorrect_input
        );
    }

    #[test]
    fn test_partial_override() {
        let toml_content = r#"
[messages]
incorrect_input = "Nope."

[directions]
symbols = ["U", "R", "D", "L"]
"#;

        let config = InputConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.messages.incorrect_input, "Nope.");
        assert_eq!(
            config.messages.rover_position_prompt,
            MessagesConfig::default().rover_position_prompt
        );

        let compass = config.compass().unwrap();
        assert_eq!(compass.resolve_direction('D'), Some(2));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROVER_INPUT_TEST_RETRY", "Try again, cadet.");

        let toml_content = r#"
[messages]
incorrect_input = "${ROVER_INPUT_TEST_RETRY}"
movement_commands_prompt = "${ROVER_INPUT_TEST_UNSET_VAR}"
"#;

        let config = InputConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.messages.incorrect_input, "Try again, cadet.");
        assert_eq!(
            config.messages.movement_commands_prompt,
            "${ROVER_INPUT_TEST_UNSET_VAR}"
        );

        std::env::remove_var("ROVER_INPUT_TEST_RETRY");
    }

    #[test]
    fn test_config_validation() {
        let blank_message = r#"
[messages]
incorrect_input = "  "
"#;
        let config = InputConfig::from_toml_str(blank_message).unwrap();
        assert!(config.validate().is_err());

        let bad_directions = r#"
[directions]
symbols = ["N", "NE"]
"#;
        let config = InputConfig::from_toml_str(bad_directions).unwrap();
        assert!(config.validate().is_err());
        assert!(config.compass().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = InputConfig::from_toml_str("[messages\n").unwrap_err();
        assert!(matches!(err, InputError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[messages]
surface_size_prompt = "Plateau size?"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = InputConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.messages.surface_size_prompt, "Plateau size?");
    }
}
