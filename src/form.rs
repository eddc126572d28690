//! Form state for the sensitivity calculator and the gates that decide
//! whether a conversion request is issued.

use crate::api::ConversionRequest;
use crate::catalog::default_pair;
use crate::config::{DEFAULT_MOUSE_DPI, DPI_STEP, MIN_MOUSE_DPI};
use crate::utils::{parse_dpi, parse_number};
use std::rc::Rc;
use yew::Reducible;

/// Which of the two game selectors an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameField {
    Source,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DpiField {
    Source,
    Target,
}

/// The five watched form values. Numeric fields hold the raw input text.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub source_game: String,
    pub target_game: String,
    pub source_sensitivity: String,
    pub source_mouse_dpi: String,
    pub target_mouse_dpi: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            source_game: String::new(),
            target_game: String::new(),
            source_sensitivity: String::new(),
            source_mouse_dpi: DEFAULT_MOUSE_DPI.to_string(),
            target_mouse_dpi: DEFAULT_MOUSE_DPI.to_string(),
        }
    }
}

/// Outcome of running the conversion gates over a form snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionPlan {
    /// Inputs are incomplete: drop any displayed result.
    Clear,
    /// Inputs are present but out of range: leave the current result alone.
    Hold,
    Request(ConversionRequest),
}

impl FormState {
    /// Fresh defaults with selections seeded from the catalog.
    pub fn for_catalog(games: &[String]) -> Self {
        let (source_game, target_game) = default_pair(games);
        Self {
            source_game,
            target_game,
            ..Self::default()
        }
    }

    pub fn same_game(&self) -> bool {
        !self.source_game.is_empty() && self.source_game == self.target_game
    }

    pub fn dpi(&self, field: DpiField) -> &str {
        match field {
            DpiField::Source => &self.source_mouse_dpi,
            DpiField::Target => &self.target_mouse_dpi,
        }
    }

    fn dpi_mut(&mut self, field: DpiField) -> &mut String {
        match field {
            DpiField::Source => &mut self.source_mouse_dpi,
            DpiField::Target => &mut self.target_mouse_dpi,
        }
    }

    /// Run the precondition and validation gates.
    ///
    /// Missing games, identical games, an empty/zero sensitivity or a missing
    /// DPI clear the result. A negative sensitivity or a DPI under the minimum
    /// holds whatever result is currently shown.
    pub fn plan_conversion(&self) -> ConversionPlan {
        let sensitivity = parse_number(&self.source_sensitivity).filter(|s| *s != 0.0);
        let source_dpi = parse_dpi(&self.source_mouse_dpi).filter(|d| *d != 0);
        let target_dpi = parse_dpi(&self.target_mouse_dpi).filter(|d| *d != 0);

        let (Some(sensitivity), Some(source_dpi), Some(target_dpi)) =
            (sensitivity, source_dpi, target_dpi)
        else {
            return ConversionPlan::Clear;
        };
        if self.source_game.is_empty() || self.target_game.is_empty() || self.same_game() {
            return ConversionPlan::Clear;
        }

        if sensitivity <= 0.0 || source_dpi < MIN_MOUSE_DPI || target_dpi < MIN_MOUSE_DPI {
            return ConversionPlan::Hold;
        }

        ConversionPlan::Request(ConversionRequest {
            source_game: self.source_game.to_lowercase(),
            target_game: self.target_game.to_lowercase(),
            source_sensitivity: sensitivity,
            source_mouse_dpi: source_dpi,
            target_mouse_dpi: target_dpi,
        })
    }
}

/// Step a DPI value by `delta`, never going below the minimum.
/// Unparsable text steps from the minimum.
///
/// # Examples
/// ```
/// use fps_sens_calc::form::step_dpi;
/// assert_eq!(step_dpi("800", 50), 850);
/// assert_eq!(step_dpi("120", -50), 100);
/// ```
pub fn step_dpi(current: &str, delta: i64) -> u32 {
    let base = parse_dpi(current).unwrap_or(MIN_MOUSE_DPI) as i64;
    (base + delta).clamp(MIN_MOUSE_DPI as i64, u32::MAX as i64) as u32
}

pub enum FormAction {
    /// Catalog arrived: seed the selections when there are at least two games.
    CatalogLoaded(Rc<Vec<String>>),
    SelectGame(GameField, String),
    SetSensitivity(String),
    SetDpi(DpiField, String),
    IncrementDpi(DpiField),
    DecrementDpi(DpiField),
    Reset(Rc<Vec<String>>),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::CatalogLoaded(games) => {
                if games.len() < 2 {
                    return self;
                }
                let (source, target) = default_pair(&games);
                next.source_game = source;
                next.target_game = target;
            }
            FormAction::SelectGame(GameField::Source, game) => next.source_game = game,
            FormAction::SelectGame(GameField::Target, game) => next.target_game = game,
            FormAction::SetSensitivity(text) => next.source_sensitivity = text,
            FormAction::SetDpi(field, text) => *next.dpi_mut(field) = text,
            FormAction::IncrementDpi(field) => {
                let stepped = step_dpi(next.dpi(field), DPI_STEP as i64);
                *next.dpi_mut(field) = stepped.to_string();
            }
            FormAction::DecrementDpi(field) => {
                let stepped = step_dpi(next.dpi(field), -(DPI_STEP as i64));
                *next.dpi_mut(field) = stepped.to_string();
            }
            FormAction::Reset(games) => next = FormState::for_catalog(&games),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Rc<Vec<String>> {
        Rc::new(names.iter().map(|n| n.to_string()).collect())
    }

    fn ready_form() -> FormState {
        FormState {
            source_game: "Valorant".into(),
            target_game: "CSGO".into(),
            source_sensitivity: "1".into(),
            ..FormState::default()
        }
    }

    fn reduce(state: FormState, action: FormAction) -> FormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn catalog_seeds_first_two_games() {
        let state = reduce(FormState::default(), FormAction::CatalogLoaded(catalog(&["Valorant", "CSGO"])));
        assert_eq!(state.source_game, "Valorant");
        assert_eq!(state.target_game, "CSGO");
        assert_eq!(state.source_mouse_dpi, "800");
        assert_eq!(state.target_mouse_dpi, "800");
    }

    #[test]
    fn short_catalog_leaves_selections_empty() {
        let state = reduce(FormState::default(), FormAction::CatalogLoaded(catalog(&["Valorant"])));
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn ready_form_builds_lowercased_request() {
        let plan = ready_form().plan_conversion();
        assert_eq!(
            plan,
            ConversionPlan::Request(ConversionRequest {
                source_game: "valorant".into(),
                target_game: "csgo".into(),
                source_sensitivity: 1.0,
                source_mouse_dpi: 800,
                target_mouse_dpi: 800,
            })
        );
    }

    #[test]
    fn incomplete_inputs_clear() {
        let zero = FormState {
            source_sensitivity: "0".into(),
            ..ready_form()
        };
        assert_eq!(zero.plan_conversion(), ConversionPlan::Clear);

        let empty = FormState {
            source_sensitivity: "".into(),
            ..ready_form()
        };
        assert_eq!(empty.plan_conversion(), ConversionPlan::Clear);

        let no_dpi = FormState {
            target_mouse_dpi: "".into(),
            ..ready_form()
        };
        assert_eq!(no_dpi.plan_conversion(), ConversionPlan::Clear);

        let no_game = FormState {
            source_game: "".into(),
            ..ready_form()
        };
        assert_eq!(no_game.plan_conversion(), ConversionPlan::Clear);
    }

    #[test]
    fn same_game_suppresses_request() {
        let state = FormState {
            target_game: "Valorant".into(),
            ..ready_form()
        };
        assert!(state.same_game());
        assert_eq!(state.plan_conversion(), ConversionPlan::Clear);
    }

    #[test]
    fn out_of_range_inputs_hold_result() {
        let low_dpi = FormState {
            source_mouse_dpi: "50".into(),
            ..ready_form()
        };
        assert_eq!(low_dpi.plan_conversion(), ConversionPlan::Hold);

        let negative = FormState {
            source_sensitivity: "-1".into(),
            ..ready_form()
        };
        assert_eq!(negative.plan_conversion(), ConversionPlan::Hold);
    }

    #[test]
    fn dpi_stepper_clamps_at_minimum() {
        assert_eq!(step_dpi("800", 50), 850);
        assert_eq!(step_dpi("100", -50), 100);
        assert_eq!(step_dpi("", 50), 150);

        let state = reduce(ready_form(), FormAction::DecrementDpi(DpiField::Target));
        assert_eq!(state.target_mouse_dpi, "750");
        let state = reduce(state, FormAction::IncrementDpi(DpiField::Source));
        assert_eq!(state.source_mouse_dpi, "850");
    }

    #[test]
    fn reset_restores_defaults() {
        let games = catalog(&["Valorant", "CSGO", "PUBG"]);
        let edited = FormState {
            source_game: "PUBG".into(),
            target_game: "Valorant".into(),
            source_sensitivity: "2.5".into(),
            source_mouse_dpi: "1600".into(),
            target_mouse_dpi: "400".into(),
        };
        let state = reduce(edited, FormAction::Reset(games));
        assert_eq!(state.source_game, "Valorant");
        assert_eq!(state.target_game, "CSGO");
        assert_eq!(state.source_sensitivity, "");
        assert_eq!(state.source_mouse_dpi, "800");
        assert_eq!(state.target_mouse_dpi, "800");

        let state = reduce(state, FormAction::Reset(catalog(&[])));
        assert_eq!(state, FormState::default());
    }
}
