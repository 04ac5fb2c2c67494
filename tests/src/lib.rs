//! End-to-end helpers for driving the whole pipeline from an
//! interchange document string to rendered output.

use arbor_core::Model;

/// Both rendered artifacts of one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub tree_xml: String,
    pub descriptors_json: String,
}

/// Load, validate and lower a document.
pub fn model_from_source(xml: &str) -> anyhow::Result<Model> {
    let raw = arbor_loader::parse_model(xml)?;
    Ok(arbor_analyzer::validate(raw)?)
}

/// Run the full pipeline: load, validate, compile, render.
pub fn compile_source(xml: &str) -> anyhow::Result<Rendered> {
    let model = model_from_source(xml)?;
    let artifacts = arbor_compiler::compile(&model)?;
    Ok(Rendered {
        tree_xml: arbor_emit::render_tree(&artifacts.tree)?,
        descriptors_json: arbor_emit::render_descriptors(&artifacts.descriptors)?,
    })
}
