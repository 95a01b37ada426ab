//! Interaktions-Events und Path-Commands für den Event/Command-Datenfluss.

mod command;
mod intent;

pub use command::PathCommand;
pub use intent::InteractionEvent;
