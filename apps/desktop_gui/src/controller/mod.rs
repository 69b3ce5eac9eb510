//! Controller layer: UI intents and their application to the game flow.

pub mod events;
pub mod reducer;
