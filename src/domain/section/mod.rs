//! Section aggregate

pub mod model;

pub use model::{CreateSection, Section, SectionPatch};
