//! JSON rendering of the descriptor list.

use arbor_compiler::ClassDescriptor;
use std::path::Path;

use crate::{EmitError, EmitResult};

/// Render the descriptor list as pretty-printed JSON.
pub fn render_descriptors(descriptors: &[ClassDescriptor]) -> EmitResult<String> {
    let mut rendered = serde_json::to_string_pretty(descriptors)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Render the descriptor list and write it to disk.
pub fn write_descriptors_file(path: &Path, descriptors: &[ClassDescriptor]) -> EmitResult<()> {
    let rendered = render_descriptors(descriptors)?;
    tracing::debug!(path = %path.display(), bytes = rendered.len(), "writing metadata listing");
    std::fs::write(path, rendered).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}
