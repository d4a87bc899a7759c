use std::collections::HashSet;

use chartxo_core::survey::SurveyAnswers;
use chartxo_core::{
    ChartAnalysis, Direction, NotificationKind, RiskShield, Theme, TradeSetup,
};
use chartxo_store::{AppState, LocalStore, StoreError};
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_750_000_000, 0).unwrap()
}

fn analysis(pattern: &str, direction: Direction) -> ChartAnalysis {
    ChartAnalysis {
        detected_pattern: pattern.to_string(),
        confidence_score: "80%".into(),
        direction,
        market_bias: "Institutional".into(),
        analysis_summary: "Summary".into(),
        trade_setup: TradeSetup {
            suggested_entry: "100".into(),
            stop_loss: "95".into(),
            stop_loss_logic: "Below the low".into(),
            target_1: "110".into(),
            target_2: "120".into(),
            win_rate_simulation: "60%".into(),
        },
        why_this_works: "Liquidity sweep".into(),
        risk_shield: RiskShield {
            recommended_leverage: "3x".into(),
            risk_per_trade: "1%".into(),
        },
        insider_tip: "Patience".into(),
        micro_insights: vec!["FVG".into()],
        disclaimer_text: "Not financial advice".into(),
    }
}

fn answers() -> SurveyAnswers {
    SurveyAnswers {
        full_name: "Ada Trader".into(),
        experience: "Professional".into(),
        market: "Crypto".into(),
        goal: "Capital Growth".into(),
        strategy: "Smart Money (SMC)".into(),
    }
}

fn open(dir: &TempDir) -> AppState {
    AppState::load(LocalStore::new(dir.path()))
        .unwrap()
        .with_clock(fixed_now)
}

#[test]
fn fresh_state_is_empty() {
    let dir = TempDir::new().unwrap();
    let state = open(&dir);
    assert!(!state.has_profile());
    assert!(state.history().is_empty());
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn survey_creates_persisted_profile() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    let profile = state.complete_survey(answers()).unwrap();
    assert_eq!(profile.full_name, "Ada Trader");
    assert_eq!(profile.total_scans, 0);

    let reopened = open(&dir);
    assert_eq!(reopened.profile().unwrap().strategy, "Smart Money (SMC)");
}

#[test]
fn invalid_survey_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    let bad = SurveyAnswers {
        market: "Beanie Babies".into(),
        ..answers()
    };
    assert!(matches!(
        state.complete_survey(bad),
        Err(StoreError::Core(_))
    ));
    assert!(!state.has_profile());
}

#[test]
fn profile_edits_need_a_profile() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    assert!(matches!(
        state.update_name("Grace"),
        Err(StoreError::NoProfile)
    ));
    assert!(matches!(
        state.remove_profile_image(),
        Err(StoreError::NoProfile)
    ));
    assert!(state.notifications().is_empty());
}

#[test]
fn profile_edits_overwrite_whole_record() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    state.complete_survey(answers()).unwrap();

    state.update_name("  Grace Hopper ").unwrap();
    state
        .set_profile_image("data:image/png;base64,AAAA".into())
        .unwrap();
    assert_eq!(state.notifications()[0].kind, NotificationKind::Profile);
    assert_eq!(
        state.notifications()[0].message,
        "Your profile photo has been updated."
    );

    let reopened = open(&dir);
    let profile = reopened.profile().unwrap();
    assert_eq!(profile.full_name, "Grace Hopper");
    assert_eq!(
        profile.profile_image.as_deref(),
        Some("data:image/png;base64,AAAA")
    );

    state.remove_profile_image().unwrap();
    assert!(open(&dir).profile().unwrap().profile_image.is_none());
    assert!(state.update_name("   ").is_err());
}

#[test]
fn new_scans_go_to_the_front() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    state.complete_survey(answers()).unwrap();

    state
        .record_scan(&analysis("First", Direction::Bearish), "img-1".into())
        .unwrap();
    let second = state
        .record_scan(&analysis("Second", Direction::Bullish), "img-2".into())
        .unwrap()
        .clone();

    assert_eq!(second.pattern, "Second");
    assert_eq!(second.symbol, "SCAN");
    assert_eq!(second.time, "Just now");
    assert_eq!(second.created_at, fixed_now());

    let patterns: Vec<&str> = state.history().iter().map(|e| e.pattern.as_str()).collect();
    assert_eq!(patterns, ["Second", "First"]);
    assert_eq!(state.profile().unwrap().total_scans, 2);
    assert_eq!(state.notifications()[0].title, "Scan Complete");
    assert_eq!(
        state.notifications()[0].message,
        "Successfully analyzed Second"
    );

    let reopened = open(&dir);
    assert_eq!(reopened.history(), state.history());
    assert_eq!(reopened.profile().unwrap().total_scans, 2);
}

#[test]
fn history_entries_are_independent_copies() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    let mut source = analysis("Original", Direction::Neutral);
    state.record_scan(&source, "img".into()).unwrap();

    source.detected_pattern = "Mutated".into();
    assert_eq!(state.history()[0].full_analysis.detected_pattern, "Original");
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    for name in ["A", "B", "C"] {
        state
            .record_scan(&analysis(name, Direction::Bullish), format!("img-{name}"))
            .unwrap();
    }
    let middle = state.history()[1].id.clone();

    assert!(state.delete_scan(&middle).unwrap());
    let patterns: Vec<&str> = state.history().iter().map(|e| e.pattern.as_str()).collect();
    assert_eq!(patterns, ["C", "A"]);
    assert_eq!(state.notifications()[0].kind, NotificationKind::Delete);
    assert_eq!(open(&dir).history().len(), 2);
}

#[test]
fn frozen_clock_scans_get_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    for i in 0..200 {
        state
            .record_scan(&analysis(&format!("P{i}"), Direction::Bullish), "img".into())
            .unwrap();
    }
    let ids: HashSet<&str> = state.history().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 200);
    let notification_ids: HashSet<&str> =
        state.notifications().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(notification_ids.len(), state.notifications().len());

    let target = state.history()[57].id.clone();
    assert!(state.delete_scan(&target).unwrap());
    assert_eq!(state.history().len(), 199);
    assert!(state.find_scan(&target).is_none());
    assert_eq!(open(&dir).history().len(), 199);
}

#[test]
fn failed_profile_count_write_keeps_the_scan() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    state.complete_survey(answers()).unwrap();
    std::fs::create_dir(dir.path().join(".snapchart_user_profile.json.tmp")).unwrap();

    let entry = state
        .record_scan(&analysis("Blocked", Direction::Bearish), "img".into())
        .unwrap();
    assert_eq!(entry.pattern, "Blocked");
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.profile().unwrap().total_scans, 0);
    assert_eq!(state.notifications()[0].title, "Scan Complete");
    assert_eq!(
        state.notifications()[0].message,
        "Successfully analyzed Blocked"
    );

    let reopened = open(&dir);
    assert_eq!(reopened.history().len(), 1);
    assert_eq!(reopened.profile().unwrap().total_scans, 0);
}

#[test]
fn deleting_unknown_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    state
        .record_scan(&analysis("Only", Direction::Bullish), "img".into())
        .unwrap();
    let before = state.history().to_vec();
    let notifications = state.notifications().len();

    assert!(!state.delete_scan("scn-does-not-exist").unwrap());
    assert_eq!(state.history(), before.as_slice());
    assert_eq!(state.notifications().len(), notifications);
}

#[test]
fn history_limit_evicts_oldest() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir).with_history_limit(Some(2));
    for name in ["A", "B", "C"] {
        state
            .record_scan(&analysis(name, Direction::Bullish), "img".into())
            .unwrap();
    }
    let patterns: Vec<&str> = state.history().iter().map(|e| e.pattern.as_str()).collect();
    assert_eq!(patterns, ["C", "B"]);
}

#[test]
fn scan_without_profile_still_recorded() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    state
        .record_scan(&analysis("Solo", Direction::Bearish), "img".into())
        .unwrap();
    assert_eq!(state.history().len(), 1);
    assert!(!state.has_profile());
}

#[test]
fn notifications_are_not_persisted() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    state.notify("Welcome", "Hello", NotificationKind::System);
    state.notify("Again", "Hi", NotificationKind::Login);
    assert_eq!(state.unread_count(), 2);
    assert_eq!(state.notifications()[0].title, "Again");

    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
    state.clear_notifications();
    assert!(state.notifications().is_empty());

    assert!(open(&dir).notifications().is_empty());
}

#[test]
fn theme_toggles_in_memory_only() {
    let dir = TempDir::new().unwrap();
    let mut state = open(&dir);
    assert_eq!(state.toggle_theme(), Theme::Light);
    assert_eq!(state.toggle_theme(), Theme::Dark);
}

#[test]
fn corrupt_history_fails_load() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("scan_history.json"), "{\"oops\":").unwrap();
    let result = AppState::load(LocalStore::new(dir.path()));
    assert!(matches!(result, Err(StoreError::Corrupt { .. })));
}
