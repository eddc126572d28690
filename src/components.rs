//! Yew view components for the sensitivity calculator.
//!
//! `GameSelectDropdown` keeps its own open/search state; the rest are
//! stateless and render purely from props.

use crate::hooks::use_outside_click;
use fps_sens_calc::catalog::{filter_games, game_image};
use fps_sens_calc::dropdown::{DropdownAction, DropdownState};
use fps_sens_calc::{ConversionResult, ResultSummary};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Searchable single-select bound to the game catalog.
#[derive(Properties, PartialEq)]
pub struct GameSelectDropdownProps {
    pub label: AttrValue,
    pub games: Rc<Vec<String>>,
    pub selected: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(GameSelectDropdown)]
pub fn game_select_dropdown(props: &GameSelectDropdownProps) -> Html {
    let state = use_reducer(DropdownState::default);
    let container = use_node_ref();
    let search_input = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        use_outside_click(
            container.clone(),
            Callback::from(move |_| dispatcher.dispatch(DropdownAction::OutsideClick)),
        );
    }

    // Focus the search box once the popup has rendered.
    {
        let search_input = search_input.clone();
        use_effect_with(state.open, move |open| {
            if *open {
                if let Some(input) = search_input.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    let on_toggle = {
        let dispatcher = state.dispatcher();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DropdownAction::Toggle { disabled }))
    };

    let on_search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(DropdownAction::Search(input.value()));
        })
    };

    let button_class = if props.disabled {
        "dropdown-button disabled"
    } else {
        "dropdown-button"
    };

    html! {
        <div class="dropdown" ref={container}>
            <label class="dropdown-label">{ props.label.clone() }</label>
            <button type="button"
                class={button_class}
                disabled={props.disabled}
                onclick={on_toggle}
            >
                <div class="dropdown-selection">
                    if props.selected.is_empty() {
                        <span class="placeholder">{ "Select a Game" }</span>
                    } else {
                        <>
                            <img src={game_image(&props.selected)} alt={props.selected.clone()} class="game-icon" />
                            <span class="selected-name">{ props.selected.clone() }</span>
                        </>
                    }
                </div>
                <span class={classes!("chevron", state.open.then_some("open"))}>{ "▾" }</span>
            </button>

            if state.open {
                <div class="dropdown-menu">
                    <div class="dropdown-search">
                        <input type="search"
                            ref={search_input}
                            placeholder="Search games..."
                            value={state.search.clone()}
                            oninput={on_search}
                        />
                    </div>
                    <ul class="dropdown-options">
                        { render_options(props, &state) }
                    </ul>
                </div>
            }
        </div>
    }
}

fn render_options(props: &GameSelectDropdownProps, state: &UseReducerHandle<DropdownState>) -> Html {
    let filtered = filter_games(&props.games, &state.search);
    if filtered.is_empty() {
        return html! { <li class="no-options">{ "No games found." }</li> };
    }

    filtered
        .into_iter()
        .map(|game| {
            let onclick = {
                let on_change = props.on_change.clone();
                let dispatcher = state.dispatcher();
                let game = game.to_string();
                Callback::from(move |_: MouseEvent| {
                    on_change.emit(game.clone());
                    dispatcher.dispatch(DropdownAction::Selected);
                })
            };
            html! {
                <li key={game.to_string()} class="dropdown-option" {onclick}>
                    <img src={game_image(game)} alt={game.to_string()} class="game-icon" />
                    <span>{ game }</span>
                </li>
            }
        })
        .collect::<Html>()
}

/// Numeric DPI input with ▲/▼ stepper controls.
#[derive(Properties, PartialEq)]
pub struct DpiInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub error: Option<String>,
    pub oninput: Callback<String>,
    pub on_increment: Callback<()>,
    pub on_decrement: Callback<()>,
}

#[function_component(DpiInput)]
pub fn dpi_input(props: &DpiInputProps) -> Html {
    let oninput = props.oninput.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="custom-number">
                <input type="number"
                    id={props.id.clone()}
                    value={props.value.clone()}
                    class={if props.error.is_some() { "invalid" } else { "" }}
                    {oninput}
                />
                <div class="custom-number-controls">
                    <div class="stepper" onclick={props.on_increment.reform(|_: MouseEvent| ())}>{ "▲" }</div>
                    <div class="stepper" onclick={props.on_decrement.reform(|_: MouseEvent| ())}>{ "▼" }</div>
                </div>
            </div>
            if let Some(ref err) = props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Conversion outcome: same-game warning, loading, result, error or hint.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub target_game: AttrValue,
    pub same_game: bool,
    pub loading: bool,
    pub result: Option<ConversionResult>,
    pub error: Option<String>,
    pub copy_success: bool,
    pub on_copy: Callback<()>,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    if props.same_game {
        return html! {
            <div class="result-panel">
                <div class="same-game-warning">
                    <div class="warning-icon">{ "⚠️" }</div>
                    <p class="warning-title">{ "Please choose different games" }</p>
                    <p class="warning-hint">{ "Source and Target games must be different for conversion" }</p>
                </div>
            </div>
        };
    }

    let summary = props.result.as_ref().map(ResultSummary::new);

    let headline = if props.loading {
        html! { <div class="calculating">{ "Calculating..." }</div> }
    } else if let Some(ref summary) = summary {
        html! {
            <div class="result-value-row">
                <p class="result-value">{ summary.target_sensitivity.clone() }</p>
                if props.result.is_some_and(|r| r.target_sensitivity != 0.0) {
                    <button class="copy-button"
                        title="Copy to clipboard"
                        onclick={props.on_copy.reform(|_: MouseEvent| ())}
                    >
                        { if props.copy_success { "✓ Copied" } else { "Copy" } }
                    </button>
                }
            </div>
        }
    } else if let Some(ref err) = props.error {
        html! { <p class="current-error">{ err }</p> }
    } else {
        html! { <p class="no-results-message">{ "Enter values to see conversion" }</p> }
    };

    let stats = match (&summary, &props.error) {
        (Some(summary), None) => render_stats(summary),
        _ => html! {},
    };

    html! {
        <div class="result-panel">
            <h2>{ format!("Your {} Sensitivity", props.target_game) }</h2>
            <div class="result-headline">{ headline }</div>
            { stats }
        </div>
    }
}

/// cm/360, cm/180 and the play-style analysis block.
fn render_stats(summary: &ResultSummary) -> Html {
    html! {
        <>
            <div class="stats-grid">
                <div class="stat">
                    <p class="stat-value">{ summary.cm_360.clone() }</p>
                    <p class="stat-label">{ "cm/360° (Full Turn Distance)" }</p>
                </div>
                <div class="stat">
                    <p class="stat-value">{ summary.cm_180.clone() }</p>
                    <p class="stat-label">{ "cm/180° (Turn Around Distance)" }</p>
                </div>
            </div>
            <div class="analysis">
                <h3>{ "💡 Sensitivity Analysis" }</h3>
                <p>
                    { "Your sensitivity corresponds to a " }
                    <strong>{ summary.play_style.label() }</strong>
                    { " play style." }
                </p>
                <p class="practical">
                    <strong>{ "Practical Application: " }</strong>
                    { summary.practical_note() }
                </p>
                <p class="hint">{ "Use a ruler to measure this distance on your mousepad to verify muscle memory." }</p>
            </div>
        </>
    }
}
