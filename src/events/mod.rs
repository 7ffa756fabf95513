pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_mousemove, wire_resize, MouseState};

/// Shared callback that starts the overlay exit.
pub type ExitTrigger = std::rc::Rc<dyn Fn()>;
