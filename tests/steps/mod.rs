//! Step definitions, split by what they touch

pub mod assertions;
pub mod form_input;
