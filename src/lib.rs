pub mod core;
pub mod error;
pub mod fs;
pub mod models;

use std::path::Path;

use log::info;

pub use crate::core::render::{Charset, Glyphs};
pub use crate::core::walk::WalkOptions;
pub use crate::error::{TreeError, TreeResult};

/// Render the tree below `root` as text, one newline-terminated line per
/// entry. The root itself gets no line.
pub async fn render_tree<F: fs::FileSystem>(
    fs: &F,
    root: &Path,
    options: &WalkOptions,
    charset: Charset,
) -> TreeResult<String> {
    let tree = crate::core::walk::walk_dir(fs, root, options).await?;

    let mut out = Vec::new();
    crate::core::render::write_children(&mut out, &tree.children, charset.glyphs())?;
    info!("rendered {} ({} bytes)", root.display(), out.len());

    // Names are stored as lossy UTF-8 and glyphs are UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
