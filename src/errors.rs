use crate::skills::SkillId;
use std::fmt;

/// Main error type for the battle resolver
#[derive(Debug, Clone, PartialEq)]
pub enum BattleError {
    /// Error related to combatant name validation
    Validation(ValidationError),
    /// Error related to combatant class or skill configuration
    Configuration(ConfigurationError),
    /// Error related to random attribute generation
    Generation(GenerationError),
}

/// Errors raised while validating combatant names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No name was supplied for a combatant
    EmptyName,
    /// The supplied name exceeds the 32 character limit
    NameTooLong { name: String, length: usize },
}

/// Errors raised while wiring up a combatant's declared skills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A declared skill id has no factory in the registry
    UnknownSkill(SkillId),
}

/// Errors raised while generating an attribute value from its definition
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// The definition's lower bound exceeds its upper bound
    InvertedBounds { min: f64, max: f64 },
    /// An integer-kind definition carries non-whole bounds
    NonWholeBounds { min: f64, max: f64 },
}

impl fmt::Display for BattleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleError::Validation(err) => write!(f, "Validation error: {}", err),
            BattleError::Configuration(err) => write!(f, "Configuration error: {}", err),
            BattleError::Generation(err) => write!(f, "Generation error: {}", err),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "You did not enter a name for the combatant"),
            ValidationError::NameTooLong { name, length } => write!(
                f,
                "The combatant's name must be 32 characters or less: '{}' is {} characters",
                name, length
            ),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::UnknownSkill(id) => {
                write!(f, "Skill not found in registry: {:?}", id)
            }
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvertedBounds { min, max } => {
                write!(f, "Inverted attribute bounds: min {} exceeds max {}", min, max)
            }
            GenerationError::NonWholeBounds { min, max } => write!(
                f,
                "Integer attribute bounds must be whole numbers, got [{}, {}]",
                min, max
            ),
        }
    }
}

impl std::error::Error for BattleError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for GenerationError {}

impl From<ValidationError> for BattleError {
    fn from(err: ValidationError) -> Self {
        BattleError::Validation(err)
    }
}

impl From<ConfigurationError> for BattleError {
    fn from(err: ConfigurationError) -> Self {
        BattleError::Configuration(err)
    }
}

impl From<GenerationError> for BattleError {
    fn from(err: GenerationError) -> Self {
        BattleError::Generation(err)
    }
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using GenerationError
pub type GenerationResult<T> = Result<T, GenerationError>;
