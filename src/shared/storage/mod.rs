mod json_storage;

pub use json_storage::JsonStorage;
