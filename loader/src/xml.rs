//! XML interchange reader.
//!
//! The document carries `Class` elements (with nested `Attribute`
//! elements) and `Aggregation` elements, in any surrounding structure.
//! Unknown elements are skipped; `Class` elements are collected at any
//! depth, `Attribute` elements attach to the innermost open class.

use arbor_core::{RawAggregation, RawAttribute, RawClass, RawModel};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

use crate::LoadResult;

/// Load and parse an interchange document from disk.
pub fn load_file(path: &Path) -> LoadResult<RawModel> {
    let source = std::fs::read_to_string(path).map_err(|source| crate::LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "loading model");
    parse_model(&source)
}

/// Parse an interchange document from a string.
pub fn parse_model(xml: &str) -> LoadResult<RawModel> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut model = RawModel::new();
    // Innermost-first stack of open Class elements.
    let mut open_classes: Vec<RawClass> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.name().as_ref() {
                b"Class" => open_classes.push(read_class(&element)?),
                b"Attribute" => {
                    if let Some(class) = open_classes.last_mut() {
                        class.attributes.push(read_attribute(&element)?);
                    }
                }
                b"Aggregation" => model.aggregations.push(read_aggregation(&element)?),
                _ => {}
            },
            Event::Empty(element) => match element.name().as_ref() {
                b"Class" => model.classes.push(read_class(&element)?),
                b"Attribute" => {
                    if let Some(class) = open_classes.last_mut() {
                        class.attributes.push(read_attribute(&element)?);
                    }
                }
                b"Aggregation" => model.aggregations.push(read_aggregation(&element)?),
                _ => {}
            },
            Event::End(element) => {
                if element.name().as_ref() == b"Class" {
                    if let Some(class) = open_classes.pop() {
                        model.classes.push(class);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(model)
}

fn read_class(element: &BytesStart<'_>) -> LoadResult<RawClass> {
    let mut class = RawClass::default();
    for attr in element.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"name" => class.name = Some(value),
            b"isRoot" => class.is_root = Some(value),
            key => class
                .extras
                .push((String::from_utf8_lossy(key).into_owned(), value)),
        }
    }
    Ok(class)
}

fn read_attribute(element: &BytesStart<'_>) -> LoadResult<RawAttribute> {
    let mut attribute = RawAttribute::default();
    for attr in element.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"name" => attribute.name = Some(value),
            b"type" => attribute.ty = Some(value),
            _ => {}
        }
    }
    Ok(attribute)
}

fn read_aggregation(element: &BytesStart<'_>) -> LoadResult<RawAggregation> {
    let mut aggregation = RawAggregation::default();
    for attr in element.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?.into_owned();
        match attr.key.as_ref() {
            b"source" => aggregation.source = Some(value),
            b"target" => aggregation.target = Some(value),
            b"sourceMultiplicity" => aggregation.source_multiplicity = Some(value),
            _ => {}
        }
    }
    Ok(aggregation)
}
