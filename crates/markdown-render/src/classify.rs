use crate::config::Dialect;
use crate::inline::InlineRules;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading(usize),
    UnorderedItem,
    OrderedItem,
    Paragraph,
    Raw,
}

#[derive(Debug, Clone)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub html: String,
}

impl ClassifiedLine {
    fn new(kind: LineKind, html: String) -> Self {
        Self { kind, html }
    }
}

pub struct Classifier {
    heading: Regex,
    unordered: Regex,
    ordered: Regex,
    rules: InlineRules,
    heading_spans: bool,
}

impl Classifier {
    pub fn new(dialect: &Dialect) -> Self {
        Self {
            heading: Regex::new(r"^(#+) (.+)$").expect("hard-coded pattern compiles"),
            unordered: Regex::new(dialect.unordered_marker.item_pattern())
                .expect("hard-coded pattern compiles"),
            ordered: Regex::new(r"^\d+\. (.+)$").expect("hard-coded pattern compiles"),
            rules: InlineRules::new(),
            heading_spans: dialect.heading_spans,
        }
    }

    /// Maps one source line to its construct and rendered HTML. Total over
    /// all inputs: anything unmatched falls through to paragraph or raw.
    pub fn classify(&self, line: &str) -> ClassifiedLine {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return ClassifiedLine::new(LineKind::Raw, line.to_string());
        }

        if let Some(replacement) = self.rules.apply_whole_line(trimmed) {
            return ClassifiedLine::new(LineKind::Raw, replacement);
        }

        if let Some(caps) = self.heading.captures(line) {
            let depth = caps[1].len();
            let text = if self.heading_spans {
                self.rules.apply_spans(&caps[2])
            } else {
                caps[2].to_string()
            };
            return ClassifiedLine::new(
                LineKind::Heading(depth),
                format!("<h{depth}>{text}</h{depth}>"),
            );
        }

        if let Some(caps) = self.unordered.captures(line) {
            let text = self.rules.apply_spans(&caps[1]);
            return ClassifiedLine::new(LineKind::UnorderedItem, format!("<li>{text}</li>"));
        }

        if let Some(caps) = self.ordered.captures(line) {
            let text = self.rules.apply_spans(&caps[1]);
            return ClassifiedLine::new(LineKind::OrderedItem, format!("<li>{text}</li>"));
        }

        let text = self.rules.apply_spans(trimmed);
        ClassifiedLine::new(LineKind::Paragraph, format!("<p>{text}</p>"))
    }
}
