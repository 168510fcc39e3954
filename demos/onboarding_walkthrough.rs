//! Onboarding Walkthrough
//!
//! This example drives the standard onboarding flow from start to
//! finish, the way a presentation layer would.
//!
//! Key concepts:
//! - Advance/retreat navigation over the step catalog
//! - Answer persistence under stable step keys
//! - Answer-driven branching (no stress, no anxiety follow-up)
//! - Progress fraction derived from the current step
//!
//! Run with: cargo run --example onboarding_walkthrough

use chrono::{TimeZone, Utc};
use intake::flow::{default_router, question_for, OnboardingStep, QuestionKind};
use intake::sequencer::{Advance, Sequencer};
use intake::settings::{Answer, MemoryStore};
use intake::Step;

fn main() {
    println!("=== Onboarding Walkthrough ===\n");

    let mut flow = Sequencer::new(
        OnboardingStep::catalog(),
        default_router(),
        Box::new(MemoryStore::new()),
    )
    .unwrap();

    loop {
        let current = *flow.current_step();
        println!(
            "[{:>5.1}%] {:?}",
            flow.progress() * 100.0,
            current
        );

        if current == OnboardingStep::Dashboard {
            break;
        }

        // Answer every question with its first option / default value;
        // report no stress so the anxiety follow-up is skipped.
        let answer = question_for(&current).map(|question| match question.kind {
            QuestionKind::SingleChoice { .. } if current == OnboardingStep::Stress => {
                Answer::Text("never".to_string())
            }
            QuestionKind::SingleChoice { options } => Answer::Text(options[0].to_string()),
            QuestionKind::Dial { default, .. } => Answer::Integer(default as i64),
            QuestionKind::Date => {
                Answer::Date(Utc.with_ymd_and_hms(1990, 6, 15, 0, 0, 0).unwrap())
            }
        });

        match flow.advance(&current, answer).unwrap() {
            Advance::Step(_) => {}
            Advance::Complete => break,
        }
    }

    println!("\nCaptured answers:");
    for step in OnboardingStep::catalog() {
        if let Some(value) = flow.settings().get(step.key()) {
            println!("  {} = {}", step.key(), value);
        }
    }

    println!("\nSteps visited: {}", flow.history().len());
    println!("\n=== Example Complete ===");
}
