// Safegate: rule-based content validators for SEO/marketing pipelines.
//
// This is the library root. Each module corresponds to a major subsystem
// of the validation service.

pub mod config;
pub mod evaluator;
pub mod web;
