//! UI layer for the desktop GUI: app shell, per-screen views, board painter, and theme.

pub mod app;
pub mod board;
pub mod confetti;
pub mod entry;
pub mod fonts;
pub mod roster;
pub mod summary;
pub mod theme;

pub use app::YutApp;
