pub mod buttons;
pub mod keyboard;
pub mod pointer;

pub use buttons::wire_buttons;
pub use keyboard::wire_global_keydown;
pub use pointer::{wire_pointer_handlers, wire_resize};
