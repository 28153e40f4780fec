use crate::config::PricingPolicy;
use crate::utils::error::{Result, WarrantyError};

/// Counts ASCII vowels, ignoring case.
pub fn count_vowels(code: &str) -> usize {
    code.chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count()
}

#[derive(Debug, Clone, Copy)]
pub struct CodeValidator {
    excluded_vowel_count: usize,
}

impl CodeValidator {
    pub fn new(policy: &PricingPolicy) -> Self {
        Self {
            excluded_vowel_count: policy.excluded_vowel_count,
        }
    }

    /// Only one exact vowel count is excluded; counts above and below it
    /// are both eligible.
    pub fn is_eligible(&self, code: &str) -> bool {
        let vowels = count_vowels(code);
        tracing::debug!("Code {} has {} vowels", code, vowels);
        vowels != self.excluded_vowel_count
    }

    pub fn validate(&self, code: &str) -> Result<()> {
        if !self.is_eligible(code) {
            return Err(WarrantyError::IneligibleCode {
                code: code.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CodeValidator {
    fn default() -> Self {
        Self::new(&PricingPolicy::default())
    }
}
