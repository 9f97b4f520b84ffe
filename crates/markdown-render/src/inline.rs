use md5::{Digest, Md5};
use regex::Regex;

pub struct InlineRules {
    bold: Regex,
    emphasis: Regex,
    digest: Regex,
    strip: Regex,
}

impl InlineRules {
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*(.+?)\*\*").expect("hard-coded pattern compiles"),
            emphasis: Regex::new(r"__(.+?)__").expect("hard-coded pattern compiles"),
            digest: Regex::new(r"^\[\[(.+?)\]\]$").expect("hard-coded pattern compiles"),
            strip: Regex::new(r"^\(\((.+?)\)\)$").expect("hard-coded pattern compiles"),
        }
    }

    /// Span substitutions, in fixed order so the emphasis pass never
    /// re-matches markup produced by the bold pass.
    pub fn apply_spans(&self, text: &str) -> String {
        let bolded = self.bold.replace_all(text, "<b>$1</b>");
        self.emphasis.replace_all(&bolded, "<em>$1</em>").into_owned()
    }

    /// Whole-line transforms. These fire only when the pattern consumes the
    /// entire trimmed line, and the replacement bypasses block wrapping.
    pub fn apply_whole_line(&self, trimmed: &str) -> Option<String> {
        if let Some(caps) = self.digest.captures(trimmed) {
            return Some(md5_hex(&caps[1]));
        }

        if let Some(caps) = self.strip.captures(trimmed) {
            return Some(remove_c_chars(&caps[1]));
        }

        None
    }
}

impl Default for InlineRules {
    fn default() -> Self {
        Self::new()
    }
}

fn md5_hex(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

fn remove_c_chars(text: &str) -> String {
    text.chars()
        .filter(|ch| !ch.eq_ignore_ascii_case(&'c'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_is_non_greedy() {
        let rules = InlineRules::new();
        assert_eq!(
            rules.apply_spans("**a** and **b**"),
            "<b>a</b> and <b>b</b>"
        );
    }

    #[test]
    fn emphasis_rewrites_after_bold() {
        let rules = InlineRules::new();
        assert_eq!(
            rules.apply_spans("**bold** then __soft__"),
            "<b>bold</b> then <em>soft</em>"
        );
    }

    #[test]
    fn digest_replaces_the_whole_line() {
        let rules = InlineRules::new();
        assert_eq!(
            rules.apply_whole_line("[[hello]]").as_deref(),
            Some("5d41402abc4b2a76b9719d911017c592")
        );
    }

    #[test]
    fn digest_needs_the_full_line() {
        let rules = InlineRules::new();
        assert_eq!(rules.apply_whole_line("see [[hello]]"), None);
        assert_eq!(rules.apply_whole_line("[[hello]] there"), None);
    }

    #[test]
    fn strip_removes_both_cases_of_c() {
        let rules = InlineRules::new();
        assert_eq!(rules.apply_whole_line("((abcabc))").as_deref(), Some("abab"));
        assert_eq!(
            rules.apply_whole_line("((Hello Chicago))").as_deref(),
            Some("Hello hiago")
        );
    }
}
