//! Screen navigation state machine.
//!
//! ```text
//! splash → survey(1..=5) → onboarding_info → shell
//!        ↘ shell                (a persisted profile skips onboarding)
//! ```
//!
//! Inside the shell a tab is selected; the profile tab nests a settings view
//! which nests its own pages. Only the splash and the survey choice steps
//! advance on a timer; everything else is user driven.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How long the splash stays up before advancing.
pub const SPLASH_DURATION: Duration = Duration::from_millis(2000);
/// Delay after picking a survey option, so the confirmation animation can play.
pub const SURVEY_ADVANCE_DELAY: Duration = Duration::from_millis(300);
pub const SURVEY_STEPS: u8 = 5;

/// Whether picking an option at `step` advances automatically.
#[must_use]
pub const fn survey_step_auto_advances(step: u8) -> bool {
    matches!(step, 2..=4)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Home,
    Scan,
    History,
    Subscription,
    Profile,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsPage {
    #[default]
    Main,
    Security,
    Faq,
    Privacy,
    Terms,
    About,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileView {
    #[default]
    Main,
    Settings(SettingsPage),
}

/// Resting view inside the authenticated shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShellView {
    pub tab: Tab,
    pub profile: ProfileView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Splash,
    Survey(u8),
    OnboardingInfo,
    Shell(ShellView),
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Splash => f.write_str("splash"),
            Self::Survey(step) => write!(f, "survey({step})"),
            Self::OnboardingInfo => f.write_str("onboarding_info"),
            Self::Shell(view) => match view.profile {
                ProfileView::Main => write!(f, "shell({:?})", view.tab),
                ProfileView::Settings(page) => write!(f, "shell({:?}/settings/{page:?})", view.tab),
            },
        }
    }
}

/// Drives [`Screen`] transitions.
#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    has_profile: bool,
}

impl Navigator {
    /// Start at the splash. A persisted profile short-circuits onboarding.
    #[must_use]
    pub const fn boot(has_profile: bool) -> Self {
        Self {
            screen: Screen::Splash,
            has_profile,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.screen, Screen::Shell(_))
    }

    /// Splash timer elapsed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless on the splash.
    pub fn splash_finished(&mut self) -> Result<Screen, CoreError> {
        let next = if self.has_profile {
            Screen::Shell(ShellView::default())
        } else {
            Screen::Survey(1)
        };
        self.go(Screen::Splash, next)
    }

    /// Advance to the next survey step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` outside the survey or on the last step.
    pub fn survey_next(&mut self) -> Result<Screen, CoreError> {
        match self.screen {
            Screen::Survey(step) if step < SURVEY_STEPS => {
                self.go(self.screen, Screen::Survey(step + 1))
            }
            current => Err(invalid(current, "survey next")),
        }
    }

    /// Go back one survey step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` outside the survey or on step 1.
    pub fn survey_back(&mut self) -> Result<Screen, CoreError> {
        match self.screen {
            Screen::Survey(step) if step > 1 => self.go(self.screen, Screen::Survey(step - 1)),
            current => Err(invalid(current, "survey back")),
        }
    }

    /// Survey submitted on the last step; the profile now exists.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless on the last survey step.
    pub fn finish_survey(&mut self) -> Result<Screen, CoreError> {
        let screen = self.go(Screen::Survey(SURVEY_STEPS), Screen::OnboardingInfo)?;
        self.has_profile = true;
        Ok(screen)
    }

    /// Onboarding slide completed; enter the shell on the home tab.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless on the onboarding info screen.
    pub fn finish_onboarding(&mut self) -> Result<Screen, CoreError> {
        self.go(Screen::OnboardingInfo, Screen::Shell(ShellView::default()))
    }

    /// Switch tabs. The profile sub-view is kept.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` outside the shell.
    pub fn select_tab(&mut self, tab: Tab) -> Result<Screen, CoreError> {
        let mut view = self.shell_view("select tab")?;
        view.tab = tab;
        self.screen = Screen::Shell(view);
        Ok(self.screen)
    }

    /// Open settings from the profile tab.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless the profile tab is selected.
    pub fn open_settings(&mut self) -> Result<Screen, CoreError> {
        let mut view = self.shell_view("open settings")?;
        if view.tab != Tab::Profile {
            return Err(invalid(self.screen, "open settings"));
        }
        view.profile = ProfileView::Settings(SettingsPage::Main);
        self.screen = Screen::Shell(view);
        Ok(self.screen)
    }

    /// Open a settings page.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` unless settings are open.
    pub fn open_settings_page(&mut self, page: SettingsPage) -> Result<Screen, CoreError> {
        let mut view = self.shell_view("open settings page")?;
        if !matches!(view.profile, ProfileView::Settings(_)) || view.tab != Tab::Profile {
            return Err(invalid(self.screen, "open settings page"));
        }
        view.profile = ProfileView::Settings(page);
        self.screen = Screen::Shell(view);
        Ok(self.screen)
    }

    /// Step back: settings page → settings → profile, or one survey step.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when there is nothing to go back to.
    pub fn back(&mut self) -> Result<Screen, CoreError> {
        match self.screen {
            Screen::Survey(_) => self.survey_back(),
            Screen::Shell(mut view) => {
                view.profile = match view.profile {
                    ProfileView::Settings(SettingsPage::Main) => ProfileView::Main,
                    ProfileView::Settings(_) => ProfileView::Settings(SettingsPage::Main),
                    ProfileView::Main => return Err(invalid(self.screen, "back")),
                };
                self.screen = Screen::Shell(view);
                Ok(self.screen)
            }
            current => Err(invalid(current, "back")),
        }
    }

    fn go(&mut self, expected: Screen, next: Screen) -> Result<Screen, CoreError> {
        if self.screen != expected {
            return Err(CoreError::InvalidTransition {
                machine: "navigation".to_string(),
                from: self.screen.to_string(),
                to: next.to_string(),
            });
        }
        self.screen = next;
        Ok(next)
    }

    fn shell_view(&self, action: &str) -> Result<ShellView, CoreError> {
        match self.screen {
            Screen::Shell(view) => Ok(view),
            current => Err(invalid(current, action)),
        }
    }
}

fn invalid(from: Screen, action: &str) -> CoreError {
    CoreError::InvalidTransition {
        machine: "navigation".to_string(),
        from: from.to_string(),
        to: action.to_string(),
    }
}
