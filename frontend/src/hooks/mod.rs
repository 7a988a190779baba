//! Hooks that bind the motion engine to browser events.

mod entrance;
mod frame;
mod scroll;
mod spring;

pub use entrance::use_entrance;
pub use frame::use_frame_clock;
pub use scroll::use_scroll_progress;
pub use spring::use_spring_value;
