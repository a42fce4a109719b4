pub mod hover;
pub mod nav;
pub mod wheel;

pub use hover::wire_section_hover;
pub use nav::{wire_keyboard_nav, wire_nav_buttons};
pub use wheel::wire_wheel;
