pub mod ambassador;
pub mod email;
pub mod error;
pub mod options;
pub mod rank;
pub mod state;

pub use ambassador::Ambassador;
pub use email::{EmailParts, split_email};
pub use error::{ModelError, Result};
pub use options::{DEFAULT_TOP_N, ViewOptions};
pub use rank::Rank;
pub use state::LoadState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambassador_ignores_unknown_api_fields() {
        let json = r#"{
            "_id": "65f1c0",
            "name": "Asha",
            "email": "asha@campus.edu",
            "phone": "0771234567",
            "university": "UoM",
            "score": 40,
            "__v": 0
        }"#;
        let ambassador: Ambassador = serde_json::from_str(json).expect("deserialize ambassador");
        assert_eq!(ambassador.name, "Asha");
        assert_eq!(ambassador.email, "asha@campus.edu");
        assert_eq!(ambassador.score, 40);
    }

    #[test]
    fn load_state_defaults_to_not_loaded() {
        assert_eq!(LoadState::default(), LoadState::NotLoaded);
    }
}
