use crate::classify::{ClassifiedLine, LineKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    None,
    Unordered,
    Ordered,
}

impl ListState {
    fn open_tag(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Unordered => Some("<ul>"),
            Self::Ordered => Some("<ol>"),
        }
    }

    fn close_tag(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Unordered => Some("</ul>"),
            Self::Ordered => Some("</ol>"),
        }
    }
}

/// Accumulates HTML lines while tracking the open list container. At most
/// one container is open at a time; switching list kinds closes the old
/// container before opening the new one.
pub struct Assembler {
    state: ListState,
    html: Vec<String>,
}

impl Assembler {
    pub fn new() -> Self {
        Self {
            state: ListState::None,
            html: Vec::new(),
        }
    }

    pub fn append(&mut self, line: ClassifiedLine) {
        match line.kind {
            LineKind::UnorderedItem => self.enter_list(ListState::Unordered),
            LineKind::OrderedItem => self.enter_list(ListState::Ordered),
            LineKind::Heading(_) | LineKind::Paragraph | LineKind::Raw => self.exit_list(),
        }

        self.html.push(line.html);
    }

    pub fn finalize(mut self) -> Vec<String> {
        self.exit_list();
        self.html
    }

    fn enter_list(&mut self, target: ListState) {
        if self.state == target {
            return;
        }

        self.exit_list();
        if let Some(tag) = target.open_tag() {
            self.html.push(tag.to_string());
        }
        self.state = target;
    }

    fn exit_list(&mut self) {
        if let Some(tag) = self.state.close_tag() {
            self.html.push(tag.to_string());
        }
        self.state = ListState::None;
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: LineKind, html: &str) -> ClassifiedLine {
        ClassifiedLine {
            kind,
            html: html.to_string(),
        }
    }

    #[test]
    fn wraps_a_run_of_items_in_one_container() {
        let mut assembler = Assembler::new();
        assembler.append(item(LineKind::UnorderedItem, "<li>a</li>"));
        assembler.append(item(LineKind::UnorderedItem, "<li>b</li>"));
        assembler.append(item(LineKind::Paragraph, "<p>done</p>"));

        assert_eq!(
            assembler.finalize(),
            vec!["<ul>", "<li>a</li>", "<li>b</li>", "</ul>", "<p>done</p>"]
        );
    }

    #[test]
    fn switching_list_kinds_closes_before_opening() {
        let mut assembler = Assembler::new();
        assembler.append(item(LineKind::UnorderedItem, "<li>a</li>"));
        assembler.append(item(LineKind::OrderedItem, "<li>1</li>"));

        assert_eq!(
            assembler.finalize(),
            vec!["<ul>", "<li>a</li>", "</ul>", "<ol>", "<li>1</li>", "</ol>"]
        );
    }

    #[test]
    fn finalize_closes_a_trailing_container() {
        let mut assembler = Assembler::new();
        assembler.append(item(LineKind::OrderedItem, "<li>1</li>"));

        assert_eq!(assembler.finalize(), vec!["<ol>", "<li>1</li>", "</ol>"]);
    }

    #[test]
    fn raw_lines_interrupt_a_list() {
        let mut assembler = Assembler::new();
        assembler.append(item(LineKind::UnorderedItem, "<li>a</li>"));
        assembler.append(item(LineKind::Raw, ""));
        assembler.append(item(LineKind::UnorderedItem, "<li>b</li>"));

        assert_eq!(
            assembler.finalize(),
            vec!["<ul>", "<li>a</li>", "</ul>", "", "<ul>", "<li>b</li>", "</ul>"]
        );
    }
}
