//! Markdown list builders.
//!
//! Item numbers are derived from position at render time, so conditional
//! items never need hand-computed indices.

/// Ordered markdown list (`1. ...`), optionally with nested bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberedList {
    items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListItem {
    text: String,
    children: Vec<String>,
}

impl NumberedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.push(text);
        self
    }

    /// Item followed by indented `-` sub-bullets.
    pub fn item_with<I, S>(mut self, text: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.push(ListItem {
            text: text.into(),
            children: children.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn item_if(mut self, condition: bool, text: impl Into<String>) -> Self {
        if condition {
            self.push(text);
        }
        self
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.items.push(ListItem {
            text: text.into(),
            children: Vec::new(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, item.text));
            for child in &item.children {
                lines.push(format!("   - {child}"));
            }
        }
        lines.join("\n")
    }
}

/// Unordered markdown list (`- ...`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletList {
    items: Vec<String>,
}

impl BulletList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, text: impl Into<String>) -> Self {
        self.items.push(text.into());
        self
    }

    pub fn item_if(mut self, condition: bool, text: impl Into<String>) -> Self {
        if condition {
            self.items.push(text.into());
        }
        self
    }

    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(|i| format!("- {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_position() {
        let list = NumberedList::new()
            .item("a")
            .item_if(false, "skipped")
            .item("b");
        assert_eq!(list.render(), "1. a\n2. b");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn children_are_indented() {
        let list = NumberedList::new().item_with("parent", ["x", "y"]);
        assert_eq!(list.render(), "1. parent\n   - x\n   - y");
    }

    #[test]
    fn bullets_render_with_dash() {
        let list = BulletList::new().item("one").item_if(true, "two");
        assert_eq!(list.render(), "- one\n- two");
    }

    #[test]
    fn empty_lists_render_empty() {
        assert!(NumberedList::new().is_empty());
        assert_eq!(BulletList::new().render(), "");
    }
}
