// Shared prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains the placeholder substitution they all use.

/// Fills `{name}` placeholders in `template` with the matching value.
///
/// Substitution is a single left-to-right pass: inserted values are never
/// scanned again, so user text containing `{resume_text}` stays literal.
/// Unknown placeholders and stray braces are copied through untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
