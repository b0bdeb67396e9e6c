//! Handlers for the site's forms

mod forms;
mod search;

pub use forms::*;
pub use search::*;
