use super::EntryKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    pub size: u64,
    pub children: Vec<TreeNode>,
}

/// Walked children of the root. The root itself is never rendered.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirTree {
    pub children: Vec<TreeNode>,
}
