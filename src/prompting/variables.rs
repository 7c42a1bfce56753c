use once_cell::sync::Lazy;
use regex::Regex;

/// `[[`, one or more characters other than `]`, then `]]`.
pub(crate) static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[([^\]]+)\]\]").expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// Returns the distinct placeholder names in `template`, in the order they
/// first appear. Names are returned exactly as written between the brackets.
pub fn extract_variables(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for captures in PLACEHOLDER_REGEX.captures_iter(template) {
        let name = &captures[1];
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Reports whether `template` references the placeholder `name`, ignoring case
/// and whitespace just inside the delimiters (`[[ Passage ]]` matches `passage`).
pub fn contains_placeholder(template: &str, name: &str) -> bool {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return false;
    }

    PLACEHOLDER_REGEX
        .captures_iter(template)
        .any(|captures| captures[1].trim().to_lowercase() == wanted)
}
