//! Host-independent motion math: scroll progress, interpolated channels,
//! spring smoothing and one-shot entrance animations.

pub mod channels;
pub mod easing;
pub mod entrance;
pub mod interpolate;
pub mod progress;
pub mod spring;
