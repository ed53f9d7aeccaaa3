use crate::application::ports::util::{Sanitizer, SlugGenerator};
use regex::Regex;
use std::sync::OnceLock;

/// Fixed transliteration table for Icelandic characters. One-to-one or
/// one-to-many; applied after lowercasing.
const TRANSLITERATIONS: &[(char, &str)] = &[
    ('á', "a"),
    ('é', "e"),
    ('í', "i"),
    ('ó', "o"),
    ('ú', "u"),
    ('ý', "y"),
    ('ö', "o"),
    ('þ', "th"),
    ('ð', "d"),
    ('æ', "ae"),
];

#[derive(Default, Clone)]
pub struct IcelandicSlugGenerator;

impl SlugGenerator for IcelandicSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.trim().to_lowercase();
        let mut out = String::with_capacity(lowered.len());
        let mut pending_hyphen = false;

        for ch in lowered.chars() {
            let mapped = TRANSLITERATIONS
                .iter()
                .find(|(from, _)| *from == ch)
                .map(|(_, to)| *to);

            if let Some(mapped) = mapped {
                if pending_hyphen && !out.is_empty() {
                    out.push('-');
                }
                pending_hyphen = false;
                out.push_str(mapped);
                continue;
            }

            match ch {
                'a'..='z' | '0'..='9' => {
                    if pending_hyphen && !out.is_empty() {
                        out.push('-');
                    }
                    pending_hyphen = false;
                    out.push(ch);
                }
                // Runs of whitespace and hyphens collapse to one hyphen;
                // leading and trailing ones are dropped.
                c if c.is_whitespace() || c == '-' => pending_hyphen = true,
                _ => {}
            }
        }

        out
    }
}

fn script_blocks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").expect("valid pattern")
    })
}

fn html_comments() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<!--.*?-->").expect("valid pattern"))
}

fn html_tags() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)</?[a-zA-Z!][^>]*>").expect("valid pattern"))
}

/// Strips script/style elements (with their contents), HTML comments and
/// remaining tags from free-text fields before they reach persistence.
#[derive(Default, Clone)]
pub struct HtmlSanitizer;

impl Sanitizer for HtmlSanitizer {
    fn sanitize(&self, input: &str) -> String {
        let mut text = input.to_string();
        // Removing an outer tag can expose a new one ("<<b>script>..."),
        // so strip until a fixpoint to stay idempotent.
        loop {
            let stripped = strip_once(&text);
            if stripped == text {
                return text;
            }
            text = stripped;
        }
    }
}

fn strip_once(input: &str) -> String {
    let without_scripts = script_blocks().replace_all(input, "");
    let without_comments = html_comments().replace_all(without_scripts.as_ref(), "");
    html_tags()
        .replace_all(without_comments.as_ref(), "")
        .into_owned()
}
