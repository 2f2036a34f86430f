pub mod display;
pub mod keypad;

pub use display::{font_size, render_display};
pub use keypad::{KEYPAD_COLUMNS, render_keypad};
