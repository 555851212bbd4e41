mod collector;
mod reference;

pub use collector::{CdcHivSource, SOURCE_NAME};
