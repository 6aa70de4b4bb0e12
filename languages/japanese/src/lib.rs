pub mod dictionary;
pub mod frequency;
pub mod loader;
pub mod processor;

#[cfg(test)]
mod tests;

pub use dictionary::MetaIndex;
pub use frequency::{FrequencyLevel, FrequencyShape, FrequencyValue, resolve};
pub use loader::MetaBankLoader;
pub use processor::FrequencyLookup;
