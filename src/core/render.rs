use std::io::{self, Write};

use crate::models::{EntryKind, TreeNode};

/// Connector strings used to draw one line of the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyphs {
    /// Connector for an entry with more siblings after it.
    pub branch: &'static str,
    /// Connector for the last entry among its siblings.
    pub corner: &'static str,
    /// Indent for an ancestor level that still has siblings below.
    pub vertical: &'static str,
    /// Indent for an ancestor level that was the last of its siblings.
    pub blank: &'static str,
}

pub const UNICODE: Glyphs = Glyphs {
    branch: "├───",
    corner: "└───",
    vertical: "│\t",
    blank: "\t",
};

pub const ASCII: Glyphs = Glyphs {
    branch: "|---",
    corner: "`---",
    vertical: "|\t",
    blank: "\t",
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Charset {
    #[default]
    Unicode,
    Ascii,
}

impl Charset {
    pub fn glyphs(self) -> &'static Glyphs {
        match self {
            Charset::Unicode => &UNICODE,
            Charset::Ascii => &ASCII,
        }
    }
}

pub fn write_children<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    glyphs: &Glyphs,
) -> io::Result<()> {
    write_children_inner(writer, children, glyphs, &[])
}

fn write_children_inner<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    glyphs: &Glyphs,
    ancestor_has_more: &[bool],
) -> io::Result<()> {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        for &has_more in ancestor_has_more {
            if has_more {
                writer.write_all(glyphs.vertical.as_bytes())?;
            } else {
                writer.write_all(glyphs.blank.as_bytes())?;
            }
        }

        if is_last {
            writer.write_all(glyphs.corner.as_bytes())?;
        } else {
            writer.write_all(glyphs.branch.as_bytes())?;
        }

        writer.write_all(node.name.as_bytes())?;

        if node.kind != EntryKind::Directory {
            write_size(writer, node.size)?;
        }

        writer.write_all(b"\n")?;

        if !node.children.is_empty() {
            let mut next_ancestor_has_more = ancestor_has_more.to_vec();
            next_ancestor_has_more.push(!is_last);
            write_children_inner(writer, &node.children, glyphs, &next_ancestor_has_more)?;
        }
    }

    Ok(())
}

fn write_size<W: Write>(writer: &mut W, size: u64) -> io::Result<()> {
    if size == 0 {
        writer.write_all(b" (empty)")
    } else {
        write!(writer, " ({size}b)")
    }
}
