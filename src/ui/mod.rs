//! UI-Komponenten: Viewport-Input, Keyboard-Shortcuts, Optionen, Status-Bar.

pub mod input;
mod keyboard;
pub mod options_dialog;
pub mod status;

pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
