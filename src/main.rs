//! Main module for the FPS Sensitivity Calculator using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use fps_sens_calc::{
    api::{convert_sensitivity, fetch_games},
    config::{API_BASE_URL, COPY_FEEDBACK_MS, DEBOUNCE_MS},
    debounce::Debouncer,
    form::{DpiField, GameField},
    utils::{validate_dpi, validate_sensitivity},
    CatalogUpdate, ConversionFlow, ConversionView, FormAction, FormState, Step, ViewAction,
};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, Level};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod hooks;

use components::{DpiInput, GameSelectDropdown, ResultPanel};
use hooks::use_transient_flag;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Run the conversion gates over a settled form snapshot and, when they pass,
/// issue one request. Responses superseded by a newer request are dropped.
fn run_conversion(
    form: FormState,
    flow: Rc<RefCell<ConversionFlow>>,
    view: UseReducerDispatcher<ConversionView>,
) {
    let step = flow.borrow_mut().settle(&form);
    if let Some(action) = step.view_action() {
        view.dispatch(action);
    }
    let Step::Send(request_id, request) = step else {
        return;
    };

    debug!(
        "Converting {} -> {} (#{})",
        request.source_game, request.target_game, request_id
    );
    spawn_local(async move {
        let outcome = convert_sensitivity(API_BASE_URL, &request).await;
        if let Some(action) = flow.borrow().finish(request_id, outcome) {
            view.dispatch(action);
        }
    });
}

async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let clipboard = gloo_utils::window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await.map(|_| ())
}

// ──────────────────────────────────────────────────────────────────────────────

/// Sensitivity form wiring state, effects, and UI elements.
#[function_component(SensitivityForm)]
fn sensitivity_form() -> Html {
    let catalog = use_state(|| Rc::new(Vec::<String>::new()));
    let form = use_reducer(FormState::default);
    let view = use_reducer(ConversionView::default);
    let copy_feedback = use_transient_flag(COPY_FEEDBACK_MS);
    // Pending debounced snapshot and the id of the newest request in flight
    let debouncer = use_mut_ref(Debouncer::<FormState>::default);
    let flow = use_mut_ref(ConversionFlow::default);

    // Load the game catalog on mount
    {
        let catalog = catalog.clone();
        let form = form.dispatcher();
        let view = view.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let update = CatalogUpdate::from_fetch(fetch_games(API_BASE_URL).await);
                if let Some(games) = update.games() {
                    catalog.set(games);
                }
                if let Some(action) = update.form_action() {
                    form.dispatch(action);
                }
                if let Some(action) = update.view_action() {
                    view.dispatch(action);
                }
            });
            || ()
        });
    }

    // Debounced conversion: every change restarts the quiet window
    {
        let debouncer = debouncer.clone();
        let flow = flow.clone();
        let view = view.dispatcher();
        use_effect_with((*form).clone(), move |snapshot| {
            let ticket = debouncer.borrow_mut().schedule(snapshot.clone());
            let timeout = Timeout::new(DEBOUNCE_MS, move || {
                let Some(settled) = debouncer.borrow_mut().fire(ticket) else {
                    return;
                };
                run_conversion(settled, flow, view);
            });
            // Dropping the handle cancels the pending timer
            move || drop(timeout)
        });
    }

    let on_game_change = |field: GameField| {
        let form = form.dispatcher();
        let view = view.dispatcher();
        let clear_copy = copy_feedback.clear.clone();
        Callback::from(move |game: String| {
            form.dispatch(FormAction::SelectGame(field, game));
            view.dispatch(ViewAction::DismissError);
            clear_copy.emit(());
        })
    };

    let on_sensitivity_input = {
        let form = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::SetSensitivity(input.value()));
        })
    };

    let on_dpi_input = |field: DpiField| {
        let form = form.dispatcher();
        Callback::from(move |value: String| form.dispatch(FormAction::SetDpi(field, value)))
    };
    let on_dpi_step = |field: DpiField, up: bool| {
        let form = form.dispatcher();
        Callback::from(move |_: ()| {
            form.dispatch(if up {
                FormAction::IncrementDpi(field)
            } else {
                FormAction::DecrementDpi(field)
            })
        })
    };

    let on_reset = {
        let form = form.dispatcher();
        let catalog = catalog.clone();
        let flow = flow.clone();
        let view = view.dispatcher();
        let clear_copy = copy_feedback.clear.clone();
        Callback::from(move |_: MouseEvent| {
            flow.borrow_mut().reset();
            form.dispatch(FormAction::Reset((*catalog).clone()));
            view.dispatch(ViewAction::Reset);
            clear_copy.emit(());
        })
    };

    let on_copy = {
        let result = view.result;
        let raise = copy_feedback.raise.clone();
        Callback::from(move |_: ()| {
            let Some(converted) = result else {
                return;
            };
            let text = converted.target_sensitivity.to_string();
            let raise = raise.clone();
            spawn_local(async move {
                match copy_to_clipboard(&text).await {
                    Ok(()) => raise.emit(()),
                    Err(err) => error!("Failed to copy: {:?}", err),
                }
            });
        })
    };

    // Field messages; an untouched empty sensitivity is not an error
    let sensitivity_error = if form.source_sensitivity.trim().is_empty() {
        None
    } else {
        validate_sensitivity(&form.source_sensitivity)
            .err()
            .map(|e| e.to_string())
    };
    let source_dpi_error = validate_dpi(&form.source_mouse_dpi)
        .err()
        .map(|e| e.to_string());
    let target_dpi_error = validate_dpi(&form.target_mouse_dpi)
        .err()
        .map(|e| e.to_string());

    let catalog_empty = catalog.is_empty();

    html! {
        <div class="container">
            <header>
                <h1>{ "🎮 FPS Sensitivity Calculator" }</h1>
                <p class="subtitle">{ "Calculate your perfect sensitivity across all major FPS titles." }</p>
            </header>

            <div class="card">
                <div class="toolbar">
                    <button type="button" class="btn-secondary small" onclick={on_reset}>
                        { "↻ Reset" }
                    </button>
                </div>

                <form class="form-grid" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <GameSelectDropdown
                        label="Source Game (Your Current Setting)"
                        games={(*catalog).clone()}
                        selected={form.source_game.clone()}
                        on_change={on_game_change(GameField::Source)}
                        disabled={catalog_empty}
                    />
                    <GameSelectDropdown
                        label="Target Game (Sensitivity Required)"
                        games={(*catalog).clone()}
                        selected={form.target_game.clone()}
                        on_change={on_game_change(GameField::Target)}
                        disabled={catalog_empty}
                    />

                    <div class="form-group">
                        <label for="source_sensitivity">{ "Source Game Sensitivity Value" }</label>
                        <input
                            type="number"
                            id="source_sensitivity"
                            step="any"
                            placeholder="Enter your Sensitivity"
                            value={form.source_sensitivity.clone()}
                            class={if sensitivity_error.is_some() { "invalid" } else { "" }}
                            oninput={on_sensitivity_input}
                        />
                        if let Some(ref err) = sensitivity_error {
                            <div class="input-error">{ err }</div>
                        }
                    </div>

                    <DpiInput
                        id="source_mouse_dpi"
                        label="Source Game Mouse DPI"
                        value={form.source_mouse_dpi.clone()}
                        error={source_dpi_error}
                        oninput={on_dpi_input(DpiField::Source)}
                        on_increment={on_dpi_step(DpiField::Source, true)}
                        on_decrement={on_dpi_step(DpiField::Source, false)}
                    />
                    <DpiInput
                        id="target_mouse_dpi"
                        label="Target Game Mouse DPI"
                        value={form.target_mouse_dpi.clone()}
                        error={target_dpi_error}
                        oninput={on_dpi_input(DpiField::Target)}
                        on_increment={on_dpi_step(DpiField::Target, true)}
                        on_decrement={on_dpi_step(DpiField::Target, false)}
                    />
                </form>

                if catalog_empty {
                    if let Some(ref err) = view.error {
                        <div class="current-error">{ err }</div>
                    }
                }

                if !form.target_game.is_empty() {
                    <ResultPanel
                        target_game={form.target_game.clone()}
                        same_game={form.same_game()}
                        loading={view.loading}
                        result={view.result}
                        error={view.error.clone()}
                        copy_success={copy_feedback.active}
                        {on_copy}
                    />
                }
            </div>
        </div>
    }
}

/// Root component.
#[function_component]
pub fn App() -> Html {
    html! { <SensitivityForm /> }
}

/// Entry point: installs logging and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );
    yew::Renderer::<App>::new().render();
}
