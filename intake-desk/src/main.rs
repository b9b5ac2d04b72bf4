//! intake-desk - validates a patient-registration submission file through the
//! full Review → Submit flow and prints the review listing.

use intake_core::{reference, ClickOutcome, FieldId, RecordingSink, SubmitOutcome};
use intake_desk::{DeskConfig, Session, Welcome};
use intake_store::RedbStore;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// On-disk submission: field keys map to raw (pre-mask) user input.
#[derive(Debug, Deserialize)]
struct SubmissionFile {
    #[serde(default)]
    remember_me: bool,
    fields: BTreeMap<String, String>,
    #[serde(default)]
    medical_history: Vec<String>,
    #[serde(default)]
    health_scale: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(submission_path) = std::env::args().nth(1) else {
        eprintln!("usage: intake-desk <submission.json>");
        std::process::exit(2);
    };

    let config = DeskConfig::load(
        std::path::Path::new("intake.yaml")
            .exists()
            .then_some("intake.yaml"),
    )
    .unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        DeskConfig::default()
    });

    if let Err(e) = std::fs::create_dir_all(&config.storage.data_dir) {
        tracing::error!("Failed to create data directory: {}", e);
        std::process::exit(1);
    }

    // Reference data loads concurrently and is allowed to come up empty; the
    // form does not wait on it for anything beyond nicer diagnostics.
    let states_file = config.reference.states_file.clone();
    let history_file = config.reference.history_file.clone();
    let (states, history) = tokio::join!(
        tokio::task::spawn_blocking(move || reference::load_states_file(states_file)),
        tokio::task::spawn_blocking(move || reference::load_history_file(history_file)),
    );
    let states = states.unwrap_or_default();
    let history = history.unwrap_or_default();
    tracing::info!(
        "Reference data: {} states, {} history options",
        states.len(),
        history.len()
    );

    let store = RedbStore::open(config.values_db_path()).unwrap_or_else(|e| {
        tracing::error!("Failed to open value store: {}", e);
        std::process::exit(1);
    });

    let submission: SubmissionFile = match std::fs::read_to_string(&submission_path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!("Cannot read submission {:?}: {}", submission_path, e);
            std::process::exit(2);
        }
    };

    for key in submission.fields.keys() {
        if FieldId::from_key(key).is_err() {
            tracing::warn!("Ignoring unknown field key {:?}", key);
        }
    }

    let mut session = Session::new(
        store,
        config.password_policy(),
        submission.remember_me,
        config.policy.remember_hours,
    );

    match session.welcome() {
        Welcome::Returning(name) => println!("Welcome back, {}", name),
        Welcome::NewUser => println!("Welcome new user"),
    }

    let mut sink = RecordingSink::new();
    session.restore(&mut sink);

    // Play the submission through the keystroke path in canonical order.
    for &field in FieldId::ALL {
        if let Some(raw) = submission.fields.get(field.as_str()) {
            session.edit(field, raw, &mut sink);
        }
    }
    session.set_medical_history(&submission.medical_history);
    if let Some(scale) = &submission.health_scale {
        session.set_health_scale(scale);
    }

    let state_code = session.controller().context().get(FieldId::State);
    if !states.is_empty() && !state_code.is_empty() && !states.iter().any(|s| s.code == state_code)
    {
        tracing::warn!("State {:?} is not in the loaded state list", state_code);
    }

    let outcome = session.click(&mut sink);

    println!();
    for row in session.review() {
        println!("{:<18} {:<34} {}", row.label, row.value, row.status);
    }
    println!();

    match outcome {
        ClickOutcome::Armed => {
            if session.submit(&mut sink) == SubmitOutcome::Allowed {
                println!("Registration accepted.");
                return;
            }
            tracing::error!("Submission blocked after arming");
            std::process::exit(1);
        }
        ClickOutcome::Rejected { first_invalid } => {
            if let Some(field) = first_invalid {
                println!(
                    "Fix {} first: {}",
                    field.label(),
                    sink.message(field)
                );
            }
            std::process::exit(1);
        }
        ClickOutcome::Proceed => unreachable!("first click cannot be in submit mode"),
    }
}
