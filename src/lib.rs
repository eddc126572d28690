//! Core of the FPS sensitivity calculator: form state and conversion gates,
//! catalog helpers, result analysis and the backend client.
//!
//! Everything here is DOM-free apart from the HTTP client, so the logic is
//! unit tested natively.

pub mod analysis;
pub mod api;
pub mod catalog;
pub mod config;
pub mod conversion;
pub mod debounce;
pub mod dropdown;
pub mod form;
pub mod utils;

pub use analysis::{PlayStyle, ResultSummary};
pub use api::{ApiError, ConversionRequest, ConversionResult};
pub use conversion::{CatalogUpdate, ConversionFlow, ConversionView, Step, ViewAction};
pub use form::{ConversionPlan, FormAction, FormState};

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn catalog_to_rendered_result() {
        let games = Rc::new(vec!["Valorant".to_string(), "CSGO".to_string()]);
        let state = Rc::new(FormState::default())
            .reduce(FormAction::CatalogLoaded(games))
            .reduce(FormAction::SetSensitivity("1".into()));
        assert_eq!(state.source_game, "Valorant");
        assert_eq!(state.target_game, "CSGO");

        let ConversionPlan::Request(request) = state.plan_conversion() else {
            panic!("expected a conversion request");
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "source_game": "valorant",
                "target_game": "csgo",
                "source_sensitivity": 1.0,
                "source_mouse_dpi": 800,
                "target_mouse_dpi": 800,
            })
        );

        let response: ConversionResult =
            serde_json::from_str(r#"{"target_sensitivity":1.23,"cm_360":30}"#).unwrap();
        let summary = ResultSummary::new(&response);
        assert_eq!(summary.target_sensitivity, "1.23");
        assert_eq!(summary.cm_360, "30 cm");
        assert_eq!(summary.cm_180, "15.00 cm");
        assert_eq!(summary.play_style, PlayStyle::Medium);
        assert_eq!(summary.play_style.label(), "Medium Sensitivity (Wrist & Forearm)");
    }
}
