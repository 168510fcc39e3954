//! The standard onboarding flow: step catalog, question descriptors,
//! and branching rules.
//!
//! Screens do not get bespoke types. Every question is one of a small
//! set of descriptor variants (single choice, dial, date) driven by
//! per-step configuration, and the renderer draws whatever the active
//! descriptor requires.

use crate::selector::{DialSelector, SelectorError};
use crate::sequencer::Router;
use crate::settings::SettingsStore;
use crate::step_enum;

step_enum! {
    /// Canonical onboarding sequence, in forward order.
    pub enum OnboardingStep {
        Welcome => "welcome",
        PersonalizationIntro => "personalizationIntro",
        Gender => "genderSelection",
        Age => "ageSelection",
        Height => "heightSelection",
        Weight => "weightSelection",
        Stress => "stressSelection",
        Anxiety => "anxietySelection",
        Diet => "dietSelection",
        Smoking => "smokingSelection",
        Alcohol => "alcoholSelection",
        SocialConnection => "socialConnectionSelection",
        BloodPressure => "bloodPressureSelection",
        MainReason => "mainReasonSelection",
        Goals => "goalSelection",
        SyncDevice => "syncDevice",
        Terms => "termsAccepted",
        Paywall => "paywall",
        Dashboard => "dashboard",
    }
    terminal: [Dashboard]
}

/// Input shape of a question screen.
#[derive(Clone, Debug, PartialEq)]
pub enum QuestionKind {
    /// Pick one option from a fixed list
    SingleChoice { options: Vec<&'static str> },
    /// Pick a quantized number on a circular dial
    Dial {
        max_value: u32,
        step_size: u32,
        default: u32,
    },
    /// Pick a calendar date
    Date,
}

/// Logic-level configuration for one question screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    /// Persistence key, identical to the owning step's key
    pub key: &'static str,
    /// Short prompt shown above the control
    pub prompt: &'static str,
    /// Control configuration
    pub kind: QuestionKind,
}

impl Question {
    /// Build a dial pre-seeded from the persisted answer.
    ///
    /// Absent or malformed stored values fall back to the descriptor's
    /// default, so the first rendered frame always shows a valid needle
    /// position with no default-then-jump flash. Returns `None` for
    /// non-dial questions.
    pub fn seed_dial(
        &self,
        store: &dyn SettingsStore,
    ) -> Option<Result<DialSelector, SelectorError>> {
        let QuestionKind::Dial {
            max_value,
            step_size,
            default,
        } = &self.kind
        else {
            return None;
        };
        let value = store
            .integer_or(self.key, *default as i64)
            .clamp(0, *max_value as i64) as u32;
        Some(DialSelector::with_value(*max_value, *step_size, value))
    }
}

/// Question descriptor for a step, if the step captures an answer.
///
/// Interstitial steps (welcome, paywall, dashboard, ...) have none.
pub fn question_for(step: &OnboardingStep) -> Option<Question> {
    let question = match step {
        OnboardingStep::Gender => Question {
            key: "genderSelection",
            prompt: "How do you identify?",
            kind: QuestionKind::SingleChoice {
                options: vec!["female", "male", "nonBinary", "preferNotToSay"],
            },
        },
        OnboardingStep::Age => Question {
            key: "ageSelection",
            prompt: "When were you born?",
            kind: QuestionKind::Date,
        },
        OnboardingStep::Height => Question {
            key: "heightSelection",
            prompt: "How tall are you?",
            kind: QuestionKind::Dial {
                max_value: 220,
                step_size: 1,
                default: 170,
            },
        },
        OnboardingStep::Weight => Question {
            key: "weightSelection",
            prompt: "How much do you weigh?",
            kind: QuestionKind::Dial {
                max_value: 200,
                step_size: 1,
                default: 70,
            },
        },
        OnboardingStep::Stress => Question {
            key: "stressSelection",
            prompt: "How often do you feel stressed?",
            kind: QuestionKind::SingleChoice {
                options: vec!["never", "sometimes", "often", "constantly"],
            },
        },
        OnboardingStep::Anxiety => Question {
            key: "anxietySelection",
            prompt: "Does stress make you anxious?",
            kind: QuestionKind::SingleChoice {
                options: vec!["rarely", "sometimes", "often"],
            },
        },
        OnboardingStep::Diet => Question {
            key: "dietSelection",
            prompt: "How would you describe your diet?",
            kind: QuestionKind::SingleChoice {
                options: vec!["balanced", "vegetarian", "vegan", "lowCarb", "other"],
            },
        },
        OnboardingStep::Smoking => Question {
            key: "smokingSelection",
            prompt: "Do you smoke?",
            kind: QuestionKind::SingleChoice {
                options: vec!["no", "occasionally", "daily"],
            },
        },
        OnboardingStep::Alcohol => Question {
            key: "alcoholSelection",
            prompt: "How often do you drink alcohol?",
            kind: QuestionKind::SingleChoice {
                options: vec!["never", "monthly", "weekly", "daily"],
            },
        },
        OnboardingStep::SocialConnection => Question {
            key: "socialConnectionSelection",
            prompt: "How connected do you feel to others?",
            kind: QuestionKind::SingleChoice {
                options: vec!["veryConnected", "somewhat", "isolated"],
            },
        },
        OnboardingStep::BloodPressure => Question {
            key: "bloodPressureSelection",
            prompt: "Do you know your blood pressure?",
            kind: QuestionKind::SingleChoice {
                options: vec!["normal", "elevated", "high", "unknown"],
            },
        },
        OnboardingStep::MainReason => Question {
            key: "mainReasonSelection",
            prompt: "What brings you here?",
            kind: QuestionKind::SingleChoice {
                options: vec!["energy", "sleep", "stress", "longevity"],
            },
        },
        OnboardingStep::Goals => Question {
            key: "goalSelection",
            prompt: "How many minutes a day can you commit?",
            kind: QuestionKind::Dial {
                max_value: 60,
                step_size: 5,
                default: 15,
            },
        },
        _ => return None,
    };
    Some(question)
}

/// The standard routing policy: catalog order with one gating skip.
///
/// The anxiety follow-up only makes sense for users who report stress,
/// so it is skipped when the stress answer is `"never"`.
pub fn default_router() -> Router<OnboardingStep> {
    Router::catalog_order_with_skips(OnboardingStep::catalog(), |step, answers| {
        step == &OnboardingStep::Anxiety
            && answers.get("stressSelection").as_deref() == Some("never")
    })
}
