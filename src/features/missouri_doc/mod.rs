mod collector;
mod reference;

pub use collector::{MissouriDocSource, SOURCE_NAME};
