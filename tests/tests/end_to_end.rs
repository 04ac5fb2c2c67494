//! End-to-end pipeline tests: interchange document in, rendered
//! artifacts out.

use arbor_tests::{compile_source, model_from_source};
use serde_json::json;

const SCENARIO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Model>
    <Class name="Root" isRoot="true"/>
    <Class name="Child" isRoot="false">
        <Attribute name="id" type="uint32"/>
    </Class>
    <Aggregation source="Child" target="Root" sourceMultiplicity="0..1"/>
</Model>
"#;

#[test]
fn scenario_tree_document() {
    let rendered = compile_source(SCENARIO).unwrap();

    let xml = &rendered.tree_xml;
    assert!(xml.starts_with("<?xml"));
    let pos = |needle: &str| xml.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
    assert!(pos("<Root>") < pos("<Child>"));
    assert!(pos("<Child>") < pos("<id>uint32</id>"));
    assert!(pos("<id>uint32</id>") < pos("</Child>"));
    assert!(pos("</Child>") < pos("</Root>"));
}

#[test]
fn scenario_descriptor_listing() {
    let rendered = compile_source(SCENARIO).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered.descriptors_json).unwrap();

    assert_eq!(
        value,
        json!([
            {
                "name": "Root",
                "isRoot": true,
                "parameters": [{"name": "Child", "type": "class"}]
            },
            {
                "name": "Child",
                "isRoot": false,
                "min": "0",
                "max": "1",
                "parameters": [{"name": "id", "type": "uint32"}]
            }
        ])
    );
}

#[test]
fn compilation_is_deterministic() {
    let first = compile_source(SCENARIO).unwrap();
    let second = compile_source(SCENARIO).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dangling_class_is_omitted_from_tree_but_described() {
    let source = r#"
<Model>
    <Class name="Root" isRoot="true"/>
    <Class name="Child" isRoot="false"/>
    <Class name="Orphan" isRoot="false">
        <Attribute name="note" type="string"/>
    </Class>
    <Aggregation source="Child" target="Root" sourceMultiplicity="1..1"/>
</Model>
"#;
    let rendered = compile_source(source).unwrap();

    assert!(!rendered.tree_xml.contains("Orphan"));

    let value: serde_json::Value = serde_json::from_str(&rendered.descriptors_json).unwrap();
    let descriptors = value.as_array().unwrap();
    assert_eq!(descriptors.len(), 3);
    let orphan = &descriptors[2];
    assert_eq!(orphan["name"], "Orphan");
    assert!(orphan.get("min").is_none());
    assert!(orphan.get("max").is_none());
    assert_eq!(orphan["parameters"], json!([{"name": "note", "type": "string"}]));
}

#[test]
fn aggregation_cycle_is_rejected() {
    let source = r#"
<Model>
    <Class name="Root" isRoot="true"/>
    <Class name="A" isRoot="false"/>
    <Class name="B" isRoot="false"/>
    <Class name="C" isRoot="false"/>
    <Aggregation source="A" target="B" sourceMultiplicity="1..1"/>
    <Aggregation source="B" target="C" sourceMultiplicity="1..1"/>
    <Aggregation source="C" target="A" sourceMultiplicity="1..1"/>
</Model>
"#;
    let err = model_from_source(source).unwrap_err();
    assert!(err.to_string().contains("cycle"));
}

#[test]
fn shared_target_compiles() {
    let source = r#"
<Model>
    <Class name="Root" isRoot="true"/>
    <Class name="A" isRoot="false"/>
    <Class name="B" isRoot="false"/>
    <Aggregation source="A" target="Root" sourceMultiplicity="1..*"/>
    <Aggregation source="B" target="Root" sourceMultiplicity="0..5"/>
</Model>
"#;
    let rendered = compile_source(source).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered.descriptors_json).unwrap();

    assert_eq!(value[1]["min"], "1");
    assert_eq!(value[1]["max"], "*");
    assert_eq!(value[2]["min"], "0");
    assert_eq!(value[2]["max"], "5");
}

#[test]
fn boolean_coercion_in_extras() {
    let source = r#"
<Model>
    <Class name="Root" isRoot="true" abstract="true" documentation="maybe"/>
</Model>
"#;
    let rendered = compile_source(source).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered.descriptors_json).unwrap();

    assert_eq!(value[0]["abstract"], json!(true));
    assert_eq!(value[0]["documentation"], json!("maybe"));
}

#[test]
fn leaf_class_gets_empty_parameters() {
    let source = r#"
<Model>
    <Class name="Root" isRoot="true"/>
    <Class name="Leaf" isRoot="false"/>
    <Aggregation source="Leaf" target="Root" sourceMultiplicity="0..1"/>
</Model>
"#;
    let rendered = compile_source(source).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered.descriptors_json).unwrap();

    // An empty array, never an array holding an empty placeholder.
    assert_eq!(value[1]["parameters"], json!([]));
}

#[test]
fn nested_containment_renders_depth_first() {
    let source = r#"
<Model>
    <Class name="BTS" isRoot="true">
        <Attribute name="id" type="uint32"/>
    </Class>
    <Class name="HWE" isRoot="false">
        <Attribute name="index" type="uint16"/>
    </Class>
    <Class name="COMM" isRoot="false">
        <Attribute name="state" type="string"/>
    </Class>
    <Aggregation source="HWE" target="BTS" sourceMultiplicity="0..42"/>
    <Aggregation source="COMM" target="HWE" sourceMultiplicity="1"/>
</Model>
"#;
    let rendered = compile_source(source).unwrap();
    let xml = &rendered.tree_xml;

    let pos = |needle: &str| xml.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
    assert!(pos("<BTS>") < pos("<id>uint32</id>"));
    assert!(pos("<id>uint32</id>") < pos("<HWE>"));
    assert!(pos("<HWE>") < pos("<index>uint16</index>"));
    assert!(pos("<COMM>") < pos("<state>string</state>"));
    assert!(pos("</COMM>") < pos("</HWE>"));

    // Degenerate multiplicity "1" splits into min = max = "1".
    let value: serde_json::Value = serde_json::from_str(&rendered.descriptors_json).unwrap();
    assert_eq!(value[2]["name"], "COMM");
    assert_eq!(value[2]["min"], "1");
    assert_eq!(value[2]["max"], "1");
}
