use std::io::{BufRead, Write};

use anyhow::Context;
use chartxo_core::NotificationKind;
use chartxo_core::navigation::{
    Navigator, SPLASH_DURATION, SURVEY_ADVANCE_DELAY, SURVEY_STEPS, Screen,
    survey_step_auto_advances,
};
use chartxo_core::survey::{SurveyAnswers, question};
use chartxo_store::AppState;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OnboardArgs;
use crate::output::output;
use crate::ui;

const BACK: &str = "back";

/// Handle `chartxo onboard`.
pub fn handle(args: &OnboardArgs, state: &mut AppState, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stderr = std::io::stderr();
    let pace = ui::prefs().interactive && !flags.quiet;
    onboard(args.force, state, stdin.lock(), &mut stderr, pace)?;

    let profile = state.profile().context("profile missing after onboarding")?;
    output(profile, flags.format)
}

/// Boot the navigator and, unless a profile already exists (or `force`),
/// walk the survey and persist the resulting profile. Ends in the shell.
pub fn onboard<R: BufRead, W: Write>(
    force: bool,
    state: &mut AppState,
    input: R,
    out: &mut W,
    pace: bool,
) -> anyhow::Result<Screen> {
    let mut nav = Navigator::boot(state.has_profile() && !force);
    if pace {
        writeln!(out, "Chartxo · AI chart intelligence")?;
        std::thread::sleep(SPLASH_DURATION);
    }
    nav.splash_finished()?;

    if nav.is_authenticated() {
        tracing::info!("profile exists, onboarding skipped");
        return Ok(nav.screen());
    }

    let answers = run_survey(&mut nav, input, out, pace)?;
    let name = state.complete_survey(answers)?.full_name.clone();
    state.notify(
        "Welcome to Chartxo",
        &format!("Profile created for {name}."),
        NotificationKind::Login,
    );
    Ok(nav.finish_onboarding()?)
}

/// Ask the five survey questions. `back` returns to the previous step;
/// choices accept the option number or its text.
pub fn run_survey<R: BufRead, W: Write>(
    nav: &mut Navigator,
    input: R,
    out: &mut W,
    pace: bool,
) -> anyhow::Result<SurveyAnswers> {
    let mut answers = SurveyAnswers::default();
    let mut lines = input.lines();

    while let Screen::Survey(step) = nav.screen() {
        let (prompt, options) = question(step).context("survey step out of range")?;
        writeln!(out, "[{step}/{SURVEY_STEPS}] {prompt}")?;
        for (index, option) in options.iter().enumerate() {
            writeln!(out, "  {}. {option}", index + 1)?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let line = lines
            .next()
            .context("survey aborted before completion")?
            .context("failed to read survey answer")?;
        let reply = line.trim();

        if reply.eq_ignore_ascii_case(BACK) {
            if nav.survey_back().is_err() {
                writeln!(out, "Already at the first question.")?;
            }
            continue;
        }

        let Some(answer) = accept(reply, options) else {
            if options.is_empty() {
                writeln!(out, "Please enter a name.")?;
            } else {
                writeln!(out, "Pick 1-{} or type an option.", options.len())?;
            }
            continue;
        };
        *field(&mut answers, step) = answer;

        if step < SURVEY_STEPS {
            if pace && survey_step_auto_advances(step) {
                std::thread::sleep(SURVEY_ADVANCE_DELAY);
            }
            nav.survey_next()?;
        } else {
            nav.finish_survey()?;
        }
    }

    Ok(answers)
}

fn accept(reply: &str, options: &[&str]) -> Option<String> {
    if reply.is_empty() {
        return None;
    }
    if options.is_empty() {
        return Some(reply.to_string());
    }
    if let Ok(number) = reply.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| options.get(index))
            .map(|option| (*option).to_string());
    }
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(reply))
        .map(|option| (*option).to_string())
}

fn field(answers: &mut SurveyAnswers, step: u8) -> &mut String {
    match step {
        1 => &mut answers.full_name,
        2 => &mut answers.experience,
        3 => &mut answers.market,
        4 => &mut answers.goal,
        _ => &mut answers.strategy,
    }
}
