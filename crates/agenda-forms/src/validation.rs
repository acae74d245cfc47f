//! Form field validators.

use regex::Regex;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new `RequiredValidator` with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "Este campo é obrigatório.".to_string(),
        }
    }

    /// Creates a new `RequiredValidator` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a maximum length.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator`.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Certifique-se de que o valor tenha no máximo {max_length} caracteres."),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// CPFs that pass the check-digit arithmetic but are known-invalid.
const KNOWN_INVALID_CPFS: [&str; 2] = ["12345678909", "01234567890"];

/// Validator for CPF numbers: 11 digits with two weighted-sum mod-11 check
/// digits, rejecting the well-known invalid sequences.
#[derive(Debug, Clone)]
pub struct CpfValidator {
    message: String,
}

impl CpfValidator {
    /// Creates a new `CpfValidator`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "Este CPF é inválido".to_string(),
        }
    }

    fn is_valid(value: &str) -> bool {
        let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != 11 {
            return false;
        }

        let as_string: String = digits.iter().map(ToString::to_string).collect();
        if digits.iter().all(|d| *d == digits[0])
            || KNOWN_INVALID_CPFS.contains(&as_string.as_str())
        {
            return false;
        }

        for pos in [9usize, 10] {
            let total: u32 = (0..pos)
                .map(|idx| digits[idx] * (pos as u32 + 1 - idx as u32))
                .sum();
            let mut remainder = (total * 10) % 11;
            if remainder == 10 {
                remainder = 0;
            }
            if remainder != digits[pos] {
                return false;
            }
        }
        true
    }
}

impl Default for CpfValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for CpfValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if Self::is_valid(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// The nine accepted CRP registry shapes: region + 3..7 digits, region +
/// 5 digits + check digit, region + 2 letters + 3/5/6 digits. An optional
/// `CRP` prefix is tolerated. The region is the first capture; the digit
/// sequence is named `seq`.
const CRP_PATTERNS: [&str; 9] = [
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/(?P<seq>\d{3})$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/(?P<seq>\d{4})$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/(?P<seq>\d{5})$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/(?P<seq>\d{6})$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/(?P<seq>\d{7})$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/(?P<seq>\d{5})-\d$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/[A-Za-z]{2}(?P<seq>\d{3})$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/[A-Za-z]{2}(?P<seq>\d{5})$",
    r"^(?i)(?:CRP\s*)?(?P<rr>\d{2})/[A-Za-z]{2}(?P<seq>\d{6})$",
];

/// Validator for CRP registry numbers.
#[derive(Debug, Clone)]
pub struct CrpValidator {
    patterns: Vec<Regex>,
    message: String,
}

impl CrpValidator {
    /// Creates a new `CrpValidator`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: CRP_PATTERNS
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
            message: "Este CRP é inválido ou não foi formatado corretamente.".to_string(),
        }
    }

    fn is_valid(&self, value: &str) -> bool {
        for pattern in &self.patterns {
            let Some(captures) = pattern.captures(value) else {
                continue;
            };
            let region: u32 = match captures["rr"].parse() {
                Ok(region) => region,
                Err(_) => return false,
            };
            if !(1..=24).contains(&region) {
                return false;
            }
            // All-zero sequences are placeholders, not registrations.
            return captures["seq"].chars().any(|c| c != '0');
        }
        false
    }
}

impl Default for CrpValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for CrpValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for the session price field: a comma-decimal amount between
/// R$ 20,00 and R$ 4.999,99. Empty input is accepted - the field is
/// optional.
#[derive(Debug, Clone)]
pub struct SessionPriceValidator {
    message: String,
}

impl SessionPriceValidator {
    /// Creates a new `SessionPriceValidator`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "O valor da consulta deve ser entre R$ 20,00 e R$ 4.999,99".to_string(),
        }
    }

    /// Parses a submitted price into centavos.
    pub fn parse_cents(value: &str) -> Result<i64, String> {
        let normalized = value.trim().replacen(',', ".", 1);
        normalized
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(|n| (n * 100.0).round() as i64)
            .ok_or_else(|| "Informe um número válido.".to_string())
    }
}

impl Default for SessionPriceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for SessionPriceValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Ok(());
        }
        let cents = Self::parse_cents(value)?;
        if (2_000..=499_999).contains(&cents) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
