use scenetemplate::{
    AttributeRecord, Attributes, Template, TemplateError, attributes, create_template,
    record_to_template,
};

fn record(pairs: &[(&str, &str)]) -> AttributeRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn tag_name_comes_first() {
    for name in ["Player", "Tree", "a.b", "X"] {
        let mut attrs = Attributes::new();
        attrs.insert("x".into(), "1".into());
        let out = create_template(name, &attrs);
        let tag = out
            .strip_prefix('<')
            .and_then(|rest| rest.split(' ').next())
            .expect("tag name");
        assert_eq!(tag, name);
    }
}

#[test]
fn attribute_groups_follow_insertion_order() {
    let mut attrs = Attributes::new();
    attrs.insert("zr".into(), "0.5".into());
    attrs.insert("count".into(), "3".into());
    attrs.insert("Transform.scale.x".into(), "2".into());
    let out = create_template("Rock", &attrs);
    assert_eq!(out, r#"<Rock zr="0.5" count="3" Transform.scale.x="2" />"#);
    assert_eq!(out.matches("=\"").count(), attrs.len());
}

#[test]
fn empty_attributes() {
    assert_eq!(create_template("Name", &Attributes::new()), "<Name  />");
}

#[test]
fn record_adapter_drops_name() {
    let r = record(&[("name", "Tree"), ("x", "1"), ("y", "2")]);
    assert_eq!(record_to_template(&r).unwrap(), r#"<Tree x="1" y="2" />"#);
    // caller's record is intact
    assert_eq!(r.len(), 3);
    assert_eq!(r["name"], "Tree");
}

#[test]
fn record_adapter_name_anywhere() {
    let r = record(&[("x", "1"), ("name", "Tree"), ("y", "2")]);
    assert_eq!(record_to_template(&r).unwrap(), r#"<Tree x="1" y="2" />"#);
}

#[test]
fn record_without_name_fails() {
    let r = record(&[("x", "1")]);
    let err = record_to_template(&r).unwrap_err();
    assert!(matches!(err, TemplateError::MissingName { index: None }));
}

#[test]
fn builder_matches_record_form() {
    let t = Template::new("Enemy")
        .count(4)
        .at(10, 0, -2.5)
        .jitter(1, 1, 0)
        .component("Health", "max", 100)
        .component_sub("Transform", "scale", "x", 2);
    assert_eq!(
        t.render(),
        r#"<Enemy count="4" x="10" y="0" z="-2.5" xr="1" yr="1" zr="0" Health.max="100" Transform.scale.x="2" />"#
    );
    assert_eq!(record_to_template(&t.to_record()).unwrap(), t.render());
    assert_eq!(t.to_string(), t.render());
    assert_eq!(Template::from_record(&t.to_record()).unwrap(), t);
    assert!(t.attributes().contains_key(&attributes::component_key("Health", "max")));
}

#[test]
fn name_set_through_builder_renames_element() {
    let t = Template::new("A").with("name", "B").with("x", 1);
    assert_eq!(t.render(), r#"<B x="1" />"#);
    assert_eq!(record_to_template(&t.to_record()).unwrap(), t.render());
    assert_eq!(Template::from_record(&t.to_record()).unwrap(), t);
}
