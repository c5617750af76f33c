use tsp_domain::config::OnboardingConfig;
use tsp_domain::registration::{Field, STEP_COUNT};
use tsp_onboarding::{OnboardingError, StepOutcome, Wizard, WizardPhase};

fn wizard() -> Wizard {
    Wizard::new(&OnboardingConfig::default())
}

fn fill_step(wizard: &mut Wizard, step: usize) {
    let values: &[(Field, &str)] = match step {
        0 => &[
            (Field::FullName, "Asha Patel"),
            (Field::Email, "asha@example.com"),
            (Field::Mobile, "9876543210"),
        ],
        1 => &[
            (Field::BusinessName, "Asha Organics"),
            (Field::GstNumber, "27ABCDE1234F1Z5"),
            (Field::BankIfsc, "HDFC0001234"),
        ],
        2 => &[
            (Field::SubscriberId, "asha-organics.ondc.org"),
            (Field::SubscriberUrl, "https://asha-organics.example.in"),
        ],
        _ => &[
            (Field::Street, "12 MG Road"),
            (Field::City, "Bengaluru"),
            (Field::State, "Karnataka"),
            (Field::PostalCode, "560001"),
        ],
    };
    for (field, value) in values {
        wizard.set_field(*field, *value).unwrap();
    }
}

#[test]
fn starts_in_intro() {
    let w = wizard();
    assert_eq!(w.phase(), WizardPhase::Intro);
    assert_eq!(w.completed_steps(), 0);
    assert_eq!(w.progress_percent(), 0);
}

#[test]
fn invalid_field_keeps_step_and_records_error() {
    let mut w = wizard();
    w.start().unwrap();
    fill_step(&mut w, 0);
    w.set_field(Field::Mobile, "12345").unwrap();

    assert_eq!(w.next().unwrap(), StepOutcome::Rejected);
    assert_eq!(w.phase(), WizardPhase::Step(0));
    assert_eq!(w.completed_steps(), 0);
    assert!(w.errors().contains_key(&Field::Mobile));
    assert!(!w.errors().contains_key(&Field::Email));
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut w = wizard();
    w.start().unwrap();
    fill_step(&mut w, 0);
    w.set_field(Field::Mobile, "12345").unwrap();
    let _ = w.next().unwrap();
    assert!(w.errors().contains_key(&Field::Mobile));

    w.set_field(Field::Mobile, "9876543210").unwrap();
    assert!(!w.errors().contains_key(&Field::Mobile));
    assert_eq!(w.next().unwrap(), StepOutcome::Advanced);
}

#[tokio::test]
async fn full_walk_reaches_submitted_with_full_progress() {
    let mut w = Wizard::new(&OnboardingConfig { submit_delay_ms: 0, ..Default::default() });
    w.start().unwrap();

    for step in 0..STEP_COUNT - 1 {
        fill_step(&mut w, step);
        assert_eq!(w.next().unwrap(), StepOutcome::Advanced);
        assert_eq!(w.completed_steps(), step + 1);
    }

    fill_step(&mut w, STEP_COUNT - 1);
    assert_eq!(w.submit().await.unwrap(), StepOutcome::Advanced);

    assert_eq!(w.phase(), WizardPhase::Submitted);
    assert_eq!(w.completed_steps(), STEP_COUNT);
    assert_eq!(w.progress_percent(), 100);
}

#[test]
fn back_keeps_data_and_completed_steps() {
    let mut w = wizard();
    w.start().unwrap();
    fill_step(&mut w, 0);
    let _ = w.next().unwrap();

    w.back().unwrap();
    assert_eq!(w.phase(), WizardPhase::Step(0));
    assert_eq!(w.completed_steps(), 1, "back never decrements completed_steps");
    assert_eq!(w.form().full_name, "Asha Patel");

    w.back().unwrap();
    assert_eq!(w.phase(), WizardPhase::Intro);
}

#[tokio::test]
async fn record_is_frozen_after_submission() {
    let mut w = Wizard::new(&OnboardingConfig { submit_delay_ms: 0, ..Default::default() });
    w.start().unwrap();
    for step in 0..STEP_COUNT - 1 {
        fill_step(&mut w, step);
        let _ = w.next().unwrap();
    }
    fill_step(&mut w, STEP_COUNT - 1);
    let _ = w.submit().await.unwrap();

    let result = w.set_field(Field::FullName, "Someone Else");
    assert!(matches!(result, Err(OnboardingError::FormFrozen { .. })));
    assert_eq!(w.form().full_name, "Asha Patel");

    assert!(matches!(w.back(), Err(OnboardingError::FormFrozen { .. })));
}

#[test]
fn next_rejected_on_final_step() {
    let mut w = wizard();
    w.start().unwrap();
    for step in 0..STEP_COUNT - 1 {
        fill_step(&mut w, step);
        let _ = w.next().unwrap();
    }

    assert!(matches!(w.next(), Err(OnboardingError::InvalidTransition { .. })));
}

#[tokio::test]
async fn submit_rejected_before_final_step() {
    let mut w = wizard();
    w.start().unwrap();
    let result = w.submit().await;
    assert!(matches!(result, Err(OnboardingError::InvalidTransition { .. })));
}

#[tokio::test]
async fn submit_with_invalid_final_step_is_recoverable() {
    let mut w = Wizard::new(&OnboardingConfig { submit_delay_ms: 0, ..Default::default() });
    w.start().unwrap();
    for step in 0..STEP_COUNT - 1 {
        fill_step(&mut w, step);
        let _ = w.next().unwrap();
    }

    fill_step(&mut w, STEP_COUNT - 1);
    w.set_field(Field::PostalCode, "00000").unwrap();

    assert_eq!(w.submit().await.unwrap(), StepOutcome::Rejected);
    assert_eq!(w.phase(), WizardPhase::Step(STEP_COUNT - 1));
    assert!(w.errors().contains_key(&Field::PostalCode));

    w.set_field(Field::PostalCode, "560001").unwrap();
    assert_eq!(w.submit().await.unwrap(), StepOutcome::Advanced);
}

#[test]
fn cannot_edit_before_start() {
    let mut w = wizard();
    let result = w.set_field(Field::FullName, "Asha");
    assert!(matches!(result, Err(OnboardingError::InvalidTransition { .. })));
}

#[tokio::test(start_paused = true)]
async fn submit_delay_comes_from_config() {
    let mut w = Wizard::new(&OnboardingConfig { submit_delay_ms: 1_500, ..Default::default() });
    w.start().unwrap();
    for step in 0..STEP_COUNT - 1 {
        fill_step(&mut w, step);
        let _ = w.next().unwrap();
    }
    fill_step(&mut w, STEP_COUNT - 1);

    let started = tokio::time::Instant::now();
    let _ = w.submit().await.unwrap();
    assert_eq!(started.elapsed(), std::time::Duration::from_millis(1_500));
}
