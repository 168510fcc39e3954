//! End-to-end walk of the standard onboarding flow.
//!
//! Drives the real catalog the way a presentation layer would: show the
//! current step, record an answer through its question descriptor,
//! advance, and occasionally go back or relaunch from a snapshot.

use chrono::{TimeZone, Utc};
use intake::flow::{default_router, question_for, OnboardingStep, QuestionKind};
use intake::selector::Point;
use intake::sequencer::{Advance, Sequencer, SequencerError};
use intake::settings::{Answer, MemoryStore, SettingsStore};
use intake::Step;

fn flow() -> Sequencer<OnboardingStep> {
    Sequencer::new(
        OnboardingStep::catalog(),
        default_router(),
        Box::new(MemoryStore::new()),
    )
    .unwrap()
}

/// A plausible answer for each question kind.
fn answer_for(step: &OnboardingStep) -> Option<Answer> {
    let question = question_for(step)?;
    let answer = match question.kind {
        QuestionKind::SingleChoice { options } => Answer::Text(options[1].to_string()),
        QuestionKind::Dial { default, .. } => Answer::Integer(default as i64),
        QuestionKind::Date => Answer::Date(Utc.with_ymd_and_hms(1990, 6, 15, 0, 0, 0).unwrap()),
    };
    Some(answer)
}

#[test]
fn full_forward_walk_reaches_dashboard() {
    let mut flow = flow();

    loop {
        let current = *flow.current_step();
        if current == OnboardingStep::Dashboard {
            break;
        }
        let next = flow.advance(&current, answer_for(&current)).unwrap();
        assert!(matches!(next, Advance::Step(_)));
    }

    assert_eq!(flow.current_step(), &OnboardingStep::Dashboard);
    assert!((flow.progress() - 1.0).abs() < f64::EPSILON);

    // Every question along the way left its answer under the step key.
    for step in OnboardingStep::catalog() {
        if question_for(&step).is_some() {
            assert!(
                flow.settings().get(step.key()).is_some(),
                "missing answer for {step:?}"
            );
        }
    }

    // The dashboard is a sink.
    let err = flow.advance(&OnboardingStep::Dashboard, None).unwrap_err();
    assert!(matches!(err, SequencerError::TerminalStep { .. }));
}

#[test]
fn reporting_no_stress_skips_the_anxiety_screen() {
    let mut flow = flow();

    loop {
        let current = *flow.current_step();
        if current == OnboardingStep::Stress {
            break;
        }
        flow.advance(&current, answer_for(&current)).unwrap();
    }

    let next = flow
        .advance(&OnboardingStep::Stress, Some(Answer::Text("never".into())))
        .unwrap();
    assert_eq!(next, Advance::Step(OnboardingStep::Diet));

    // The skipped screen never shows up on the trail.
    assert!(!flow
        .history()
        .path()
        .contains(&&OnboardingStep::Anxiety));
}

#[test]
fn back_from_a_skipped_branch_returns_to_the_gate() {
    let mut flow = flow();
    flow.start(Some(OnboardingStep::Stress)).unwrap();

    flow.advance(&OnboardingStep::Stress, Some(Answer::Text("never".into())))
        .unwrap();
    assert_eq!(flow.current_step(), &OnboardingStep::Diet);

    // Back skips nothing: it returns to the actually-visited step.
    assert_eq!(flow.retreat().copied(), Some(OnboardingStep::Stress));
}

#[test]
fn double_tap_on_continue_records_one_answer() {
    let mut flow = flow();
    flow.start(Some(OnboardingStep::Age)).unwrap();

    let birth = Utc.with_ymd_and_hms(1990, 6, 15, 0, 0, 0).unwrap();
    flow.advance(&OnboardingStep::Age, Some(Answer::Date(birth)))
        .unwrap();

    // Second tap still names Age, which is no longer current.
    let err = flow
        .advance(&OnboardingStep::Age, Some(Answer::Date(birth)))
        .unwrap_err();
    assert!(matches!(err, SequencerError::StaleAdvance { .. }));
    assert_eq!(
        flow.settings().get("ageSelection").as_deref(),
        Some("1990-06-15 00:00:00 UTC")
    );
}

#[test]
fn snapshot_relaunch_resumes_identical_routing() {
    let mut flow = flow();

    // Answer up to and including the stress gate.
    loop {
        let current = *flow.current_step();
        if current == OnboardingStep::Stress {
            break;
        }
        flow.advance(&current, answer_for(&current)).unwrap();
    }
    flow.advance(&OnboardingStep::Stress, Some(Answer::Text("never".into())))
        .unwrap();

    // Relaunch: same snapshot, same persisted answers.
    let snapshot = flow.snapshot();
    let mut store = MemoryStore::new();
    for step in OnboardingStep::catalog() {
        if let Some(value) = flow.settings().get(step.key()) {
            store.set(step.key(), &value);
        }
    }

    let mut resumed = Sequencer::restore(
        snapshot,
        OnboardingStep::catalog(),
        default_router(),
        Box::new(store),
    )
    .unwrap();

    assert_eq!(resumed.current_step(), flow.current_step());
    assert_eq!(resumed.progress(), flow.progress());

    // Routing reproduces the original decision deterministically.
    let next = resumed
        .advance(&OnboardingStep::Diet, answer_for(&OnboardingStep::Diet))
        .unwrap();
    let expected = flow
        .advance(&OnboardingStep::Diet, answer_for(&OnboardingStep::Diet))
        .unwrap();
    assert_eq!(next, expected);
}

#[test]
fn editing_from_settings_preseeds_the_goal_dial() {
    let mut flow = flow();
    flow.start(Some(OnboardingStep::Goals)).unwrap();
    flow.advance(&OnboardingStep::Goals, Some(Answer::Integer(45)))
        .unwrap();

    // Later, the user opens the goals screen from app settings.
    flow.resume_for_editing(OnboardingStep::Goals).unwrap();
    let question = question_for(&OnboardingStep::Goals).unwrap();
    let mut dial = question.seed_dial(flow.settings()).unwrap().unwrap();

    // No default-then-jump flash: first frame shows the stored answer.
    assert_eq!(dial.value(), 45);
    assert_eq!(dial.angle(), 270.0);

    // The user drags to 3 o'clock and saves.
    let center = Point::new(100.0, 100.0);
    let value = dial.drag_to(Point::new(160.0, 100.0), center);
    assert_eq!(value, 15);

    flow.advance(&OnboardingStep::Goals, Some(Answer::Integer(value as i64)))
        .unwrap();
    assert_eq!(flow.settings().get("goalSelection").as_deref(), Some("15"));
}
