mod collector;
mod reference;

pub use collector::{BjsRecidivismSource, SOURCE_NAME};
