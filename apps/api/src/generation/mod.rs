// Resume Generation: two-stage rewrite (draft, then reformat) and the
// "Generate Resume" endpoints that chain extraction, analysis, rewrite and PDF layout.
// All LLM calls go through the TextGenerator trait, never a provider client directly.

pub mod generator;
pub mod handlers;
pub mod markup;
pub mod prompts;
