// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Export directory text field, applied to `ExportOptions` on export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 760,
            out_dir_text: s!(crate::config::consts::DEFAULT_OUT_DIR),
            out_dir_dirty: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
