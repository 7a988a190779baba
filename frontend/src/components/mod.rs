pub mod closing;
pub mod experience;
pub mod features;
pub mod gallery;
pub mod hero;
pub mod orbs;
pub mod progress_bar;
pub mod reveal;
pub mod sculpted;
pub mod timeline;
