//! Application-level configuration constants.

// Backend
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

// UI Behavior
pub const DEBOUNCE_MS: u32 = 300;
pub const COPY_FEEDBACK_MS: u32 = 2_000;

// Default values for input fields
pub const DEFAULT_MOUSE_DPI: u32 = 800;

// Min/Max limits for input fields
pub const MIN_MOUSE_DPI: u32 = 100;
pub const MIN_SENSITIVITY: f64 = 0.001;
pub const DPI_STEP: u32 = 50;

// Assets
pub const DEFAULT_GAME_IMAGE: &str = "/assets/games/default.png";
