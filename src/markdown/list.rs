use std::fmt;

use super::{Inline, MarkdownError};

/// Single list entry; may carry a checkbox and nested children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    inlines: Vec<Inline>,
    checkbox: Option<bool>,
    children: Vec<ListItem>,
}

impl ListItem {
    pub fn new(inline: impl Into<Inline>) -> Self {
        Self {
            inlines: vec![inline.into()],
            checkbox: None,
            children: Vec::new(),
        }
    }

    pub fn from_inlines(inlines: Vec<Inline>) -> Self {
        Self {
            inlines,
            checkbox: None,
            children: Vec::new(),
        }
    }

    /// Creates a check-list entry rendered with `[x]` or `[ ]`.
    pub fn checklist(inlines: Vec<Inline>, checked: bool) -> Self {
        Self {
            inlines,
            checkbox: Some(checked),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: ListItem) {
        self.children.push(child);
    }
}

/// Bullet list; nested items indent by two spaces per depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    bullet: char,
    items: Vec<ListItem>,
}

impl List {
    /// Creates an empty list with an explicit bullet.
    ///
    /// # Errors
    /// Returns `MarkdownError::InvalidBullet` unless the bullet is `'-'`,
    /// `'*'` or `'+'`.
    pub fn new(bullet: char) -> Result<Self, MarkdownError> {
        if !matches!(bullet, '-' | '*' | '+') {
            return Err(MarkdownError::InvalidBullet { bullet });
        }
        Ok(Self {
            bullet,
            items: Vec::new(),
        })
    }

    pub fn add_item(&mut self, item: ListItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn write_item(
        &self,
        f: &mut fmt::Formatter<'_>,
        item: &ListItem,
        depth: usize,
        first: &mut bool,
    ) -> fmt::Result {
        if *first {
            *first = false;
        } else {
            writeln!(f)?;
        }
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        write!(f, "{} ", self.bullet)?;
        if let Some(checked) = item.checkbox {
            f.write_str(if checked { "[x] " } else { "[ ] " })?;
        }
        for inline in &item.inlines {
            write!(f, "{}", inline)?;
        }
        for child in &item.children {
            self.write_item(f, child, depth + 1, first)?;
        }
        Ok(())
    }
}

impl Default for List {
    fn default() -> Self {
        Self {
            bullet: '-',
            items: Vec::new(),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in &self.items {
            self.write_item(f, item, 0, &mut first)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_validation() {
        assert!(List::new('-').is_ok());
        assert!(List::new('*').is_ok());
        assert!(List::new('+').is_ok());
        assert_eq!(
            List::new('>').unwrap_err(),
            MarkdownError::InvalidBullet { bullet: '>' }
        );
    }

    #[test]
    fn test_items_render_one_per_line() {
        let mut list = List::default();
        list.add_item(ListItem::new(Inline::text("first")));
        list.add_item(ListItem::new(Inline::text("second")));
        assert_eq!(list.to_string(), "- first\n- second");
    }

    #[test]
    fn test_checklist_prefixes() {
        let mut list = List::default();
        list.add_item(ListItem::checklist(vec![Inline::text("done")], true));
        list.add_item(ListItem::checklist(vec![Inline::text("open")], false));
        assert_eq!(list.to_string(), "- [x] done\n- [ ] open");
    }

    #[test]
    fn test_checklist_item_with_code_inline() {
        let mut list = List::default();
        list.add_item(ListItem::checklist(
            vec![Inline::code("serde:1.0"), Inline::text(" - 0 vulnerabilities")],
            true,
        ));
        assert_eq!(list.to_string(), "- [x] `serde:1.0` - 0 vulnerabilities");
    }

    #[test]
    fn test_nested_items_indent_two_spaces_per_depth() {
        let grandchild = ListItem::new(Inline::text("leaf"));
        let mut child = ListItem::new(Inline::text("child"));
        child.add_child(grandchild);
        let mut root = ListItem::new(Inline::text("root"));
        root.add_child(child);

        let mut list = List::new('*').unwrap();
        list.add_item(root);
        assert_eq!(list.to_string(), "* root\n  * child\n    * leaf");
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let list = List::default();
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "");
    }
}
