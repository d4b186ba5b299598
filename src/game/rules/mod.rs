//! Game rules: win and draw detection.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_win;
