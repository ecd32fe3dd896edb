//! Arena-backed group tree construction
//!
//! Groups are appended to an arena while the stream is decoded; the open
//! groups form a stack of arena indices with the synthetic root at the
//! bottom. Children are always allocated after their parent, which lets
//! [`TreeBuilder::finish`] assemble the owned tree bottom-up without
//! recursion.

use crate::color::Color;
use crate::document::Group;

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct GroupNode {
    name: String,
    groups: Vec<usize>,
    colors: Vec<Color>,
}

#[derive(Debug)]
pub(crate) struct TreeBuilder {
    nodes: Vec<GroupNode>,
    stack: Vec<usize>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![GroupNode::default()],
            stack: vec![ROOT],
        }
    }

    fn top(&mut self) -> &mut GroupNode {
        let index = self.stack.last().copied().unwrap_or(ROOT);
        &mut self.nodes[index]
    }

    /// Number of open groups, the root not counted
    pub(crate) fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Append a new group to the current one and make it current
    pub(crate) fn open(&mut self, name: String) {
        let index = self.nodes.len();
        self.nodes.push(GroupNode {
            name,
            ..GroupNode::default()
        });
        self.top().groups.push(index);
        self.stack.push(index);
    }

    /// Close the current group; `false` if only the root is open
    pub(crate) fn close(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Append a color to the current group
    pub(crate) fn add_color(&mut self, color: Color) {
        self.top().colors.push(color);
    }

    /// Assemble the owned tree, returning the root's groups and colors
    pub(crate) fn finish(self) -> (Vec<Group>, Vec<Color>) {
        let mut built: Vec<Option<Group>> = Vec::with_capacity(self.nodes.len());
        built.resize_with(self.nodes.len(), || None);

        let mut nodes = self.nodes;
        let root = std::mem::take(&mut nodes[ROOT]);

        for (index, node) in nodes.into_iter().enumerate().skip(1).rev() {
            let groups = take_children(&mut built, &node.groups);
            built[index] = Some(Group::new(node.name, groups, node.colors));
        }

        (take_children(&mut built, &root.groups), root.colors)
    }
}

fn take_children(built: &mut [Option<Group>], children: &[usize]) -> Vec<Group> {
    children
        .iter()
        .filter_map(|&child| built[child].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorKind, ColorValue};

    fn gray(name: &str) -> Color {
        Color::new(name, ColorValue::Gray(0.5), ColorKind::Normal)
    }

    #[test]
    fn test_empty_tree() {
        let (groups, colors) = TreeBuilder::new().finish();
        assert!(groups.is_empty());
        assert!(colors.is_empty());
    }

    #[test]
    fn test_cannot_close_root() {
        let mut tree = TreeBuilder::new();
        assert!(!tree.close());
        tree.open("A".into());
        assert_eq!(tree.depth(), 1);
        assert!(tree.close());
        assert!(!tree.close());
    }

    #[test]
    fn test_nesting_and_order() {
        let mut tree = TreeBuilder::new();
        tree.add_color(gray("top"));
        tree.open("A".into());
        tree.add_color(gray("a1"));
        tree.open("B".into());
        tree.add_color(gray("b1"));
        tree.close();
        tree.open("C".into());
        tree.close();
        tree.add_color(gray("a2"));
        tree.close();
        tree.open("D".into());
        tree.close();

        let (groups, colors) = tree.finish();
        assert_eq!(colors, vec![gray("top")]);
        assert_eq!(groups.len(), 2);

        let a = &groups[0];
        assert_eq!(a.name(), "A");
        assert_eq!(a.colors(), &[gray("a1"), gray("a2")]);
        let names: Vec<&str> = a.groups().iter().map(Group::name).collect();
        assert_eq!(names, ["B", "C"]);
        assert_eq!(a.groups()[0].colors(), &[gray("b1")]);
        assert_eq!(groups[1].name(), "D");
    }

    #[test]
    fn test_unclosed_groups_are_kept() {
        let mut tree = TreeBuilder::new();
        tree.open("A".into());
        tree.open("B".into());
        tree.add_color(gray("x"));

        let (groups, _) = tree.finish();
        assert_eq!(groups[0].groups()[0].colors(), &[gray("x")]);
    }
}
