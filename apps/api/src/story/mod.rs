// Story generation: request validation, the fixed templates, and the
// pluggable storyteller backend the handlers call through.

pub mod handlers;
pub mod models;
pub mod teller;
pub mod template;
