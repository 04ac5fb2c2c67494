//! XML rendering of the containment tree.
//!
//! Each container becomes an element named after its class, carrying no
//! attributes; attribute leaves become child elements whose text is the
//! attribute's type string, emitted before any class children.

use arbor_compiler::ContainerNode;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::Path;

use crate::{EmitError, EmitResult};

/// Render the tree as an indented XML document with a declaration.
pub fn render_tree(tree: &ContainerNode) -> EmitResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_node(&mut writer, tree)?;

    // The writer only ever receives UTF-8 strings.
    let mut rendered = String::from_utf8_lossy(&writer.into_inner()).into_owned();
    rendered.push('\n');
    Ok(rendered)
}

/// Render the tree and write it to disk.
pub fn write_tree_file(path: &Path, tree: &ContainerNode) -> EmitResult<()> {
    let rendered = render_tree(tree)?;
    tracing::debug!(path = %path.display(), bytes = rendered.len(), "writing tree document");
    std::fs::write(path, rendered).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &ContainerNode) -> EmitResult<()> {
    if node.leaves.is_empty() && node.children.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(node.tag.as_str())))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(node.tag.as_str())))?;
    for (name, ty) in &node.leaves {
        writer.write_event(Event::Start(BytesStart::new(name.as_str())))?;
        writer.write_event(Event::Text(BytesText::new(ty)))?;
        writer.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
    Ok(())
}
