//! Onboarding survey catalogue and answers.
//!
//! Step 1 asks for a name, steps 2 to 4 offer a fixed choice each (and
//! auto-advance once picked), step 5 offers a choice and completes the survey.

use serde::{Deserialize, Serialize};

use crate::entities::UserProfile;
use crate::errors::CoreError;

pub const EXPERIENCE_LEVELS: [&str; 4] = ["Novice", "Intermediate", "Professional", "Institutional"];
pub const MARKETS: [&str; 4] = ["Crypto", "Forex", "Stocks", "Indices"];
pub const GOALS: [&str; 4] = [
    "Capital Growth",
    "Daily Income",
    "Risk Management",
    "Market Mastery",
];
pub const STRATEGIES: [&str; 4] = [
    "Smart Money (SMC)",
    "Price Action",
    "High Frequency",
    "Swing Trading",
];

/// Question shown at a survey step, with its options (empty for free text).
#[must_use]
pub const fn question(step: u8) -> Option<(&'static str, &'static [&'static str])> {
    match step {
        1 => Some(("What should we call you?", &[])),
        2 => Some(("Trading experience", &EXPERIENCE_LEVELS)),
        3 => Some(("Primary market", &MARKETS)),
        4 => Some(("Main goal", &GOALS)),
        5 => Some(("Preferred strategy", &STRATEGIES)),
        _ => None,
    }
}

/// Answers collected across the five survey steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub full_name: String,
    pub experience: String,
    pub market: String,
    pub goal: String,
    pub strategy: String,
}

impl SurveyAnswers {
    /// Check every answer is present and every choice comes from its catalogue.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.full_name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".into()));
        }
        check_choice("experience", &self.experience, &EXPERIENCE_LEVELS)?;
        check_choice("market", &self.market, &MARKETS)?;
        check_choice("goal", &self.goal, &GOALS)?;
        check_choice("strategy", &self.strategy, &STRATEGIES)
    }

    /// Convert into a fresh profile with no photo and zero scans.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if [`Self::validate`] fails.
    pub fn into_profile(self) -> Result<UserProfile, CoreError> {
        self.validate()?;
        Ok(UserProfile {
            full_name: self.full_name.trim().to_string(),
            experience: self.experience,
            market: self.market,
            goal: self.goal,
            strategy: self.strategy,
            profile_image: None,
            total_scans: 0,
        })
    }
}

fn check_choice(field: &str, value: &str, options: &[&str]) -> Result<(), CoreError> {
    if options.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be one of {options:?}, got '{value}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> SurveyAnswers {
        SurveyAnswers {
            full_name: "  Ada ".into(),
            experience: "Professional".into(),
            market: "Crypto".into(),
            goal: "Daily Income".into(),
            strategy: "Price Action".into(),
        }
    }

    #[test]
    fn valid_answers_become_profile() {
        let profile = answers().into_profile().unwrap();
        assert_eq!(profile.full_name, "Ada");
        assert_eq!(profile.total_scans, 0);
        assert!(profile.profile_image.is_none());
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let mut bad = answers();
        bad.market = "Bonds".into();
        let err = bad.validate().unwrap_err();
        assert!(err.to_string().contains("market"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut bad = answers();
        bad.full_name = "   ".into();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn questions_cover_five_steps() {
        assert!(question(0).is_none());
        assert!(question(1).unwrap().1.is_empty());
        assert_eq!(question(5).unwrap().1, &STRATEGIES);
        assert!(question(6).is_none());
    }
}
