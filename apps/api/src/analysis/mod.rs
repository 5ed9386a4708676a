// Resume Analysis: keyword-match report between a resume and a job description.
// The report is opaque model text; report.rs holds the optional, fallible readers.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod report;
