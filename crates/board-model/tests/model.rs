//! Tests for board-model types.

use board_model::{Ambassador, LoadState, ModelError, Rank, ViewOptions};

#[test]
fn new_trims_and_rejects_blank_names() {
    let ambassador = Ambassador::new("  Nimal  ", " nimal@uni.lk ", 12).expect("valid record");
    assert_eq!(ambassador.name, "Nimal");
    assert_eq!(ambassador.email, "nimal@uni.lk");

    assert_eq!(
        Ambassador::new("   ", "x@y.z", 0),
        Err(ModelError::EmptyName)
    );
}

#[test]
fn rank_display_and_sentinel() {
    assert_eq!(Rank::from_index(0).get(), 1);
    assert_eq!(Rank::from_index(3).to_string(), "#4");
    assert!(!Rank::UNRANKED.is_ranked());
    assert_eq!(Rank::UNRANKED.to_string(), "Not Ranked Yet");
    assert_eq!(Rank::default(), Rank::UNRANKED);
}

#[test]
fn load_state_distinguishes_empty_from_not_loaded() {
    let empty = LoadState::from(Vec::new());
    assert!(empty.is_loaded());
    assert_eq!(empty.ambassadors(), Some(&[][..]));

    assert!(LoadState::NotLoaded.ambassadors().is_none());
    assert!(LoadState::Failed("timeout".to_string()).ambassadors().is_none());
}

#[test]
fn load_state_serializes_with_status_tag() {
    let state = LoadState::Failed("503".to_string());
    let json = serde_json::to_string(&state).expect("serialize state");
    assert_eq!(json, r#"{"status":"failed","data":"503"}"#);
    let round: LoadState = serde_json::from_str(&json).expect("deserialize state");
    assert_eq!(round, state);
}

#[test]
fn view_options_builders() {
    let options = ViewOptions::new().with_top_n(5).with_redact_emails(false);
    assert_eq!(options.top_n, 5);
    assert!(!options.redact_emails);
    assert_eq!(ViewOptions::default().top_n, 10);
}

#[test]
fn invalid_email_error_message() {
    let error = ModelError::InvalidEmailFormat {
        email: "broken".to_string(),
    };
    assert_eq!(error.to_string(), "invalid email format: broken");
}
