//! Validation rules for schema fields

use thiserror::Error;

/// Rejected field value, carrying the label shown to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{label} must be at most {max} characters")]
    TooLong { label: &'static str, max: usize },
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must be a whole number")]
    NotAnInteger(&'static str),
    #[error("{label} must be at least {min}")]
    BelowMin { label: &'static str, min: f64 },
    #[error("{label} must be at most {max}")]
    AboveMax { label: &'static str, max: f64 },
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
    pub integer: bool,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
            integer: false,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Required text bounded to `max` characters
    pub const fn required_text(max: usize) -> Self {
        Self {
            required: true,
            max_length: Some(max),
            ..Self::none()
        }
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Validate a string value against the rules.
    ///
    /// Lengths are counted in characters, the way a browser counts `maxlength`
    /// for the Latin/Cyrillic text this console edits.
    pub fn validate_string(&self, value: &str, label: &'static str) -> Result<(), ValidationError> {
        if self.required && value.trim().is_empty() {
            return Err(ValidationError::Missing(label));
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(ValidationError::TooLong { label, max });
            }
        }

        Ok(())
    }

    /// Validate the text of a numeric input; empty optional input passes
    pub fn validate_numeric_text(&self, value: &str, label: &'static str) -> Result<(), ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(ValidationError::Missing(label))
            } else {
                Ok(())
            };
        }

        let number: f64 = trimmed
            .parse()
            .map_err(|_| ValidationError::NotANumber(label))?;
        if !number.is_finite() {
            return Err(ValidationError::NotANumber(label));
        }
        if self.integer && number.fract() != 0.0 {
            return Err(ValidationError::NotAnInteger(label));
        }
        self.validate_number(number, label)
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, label: &'static str) -> Result<(), ValidationError> {
        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::BelowMin { label, min });
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationError::AboveMax { label, max });
            }
        }

        Ok(())
    }
}
