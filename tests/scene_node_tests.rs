use x3d_charts::scene::SceneNode;

#[test]
fn set_attr_replaces_in_place_keeping_order() {
    let mut node = SceneNode::new("material");
    node.set_attr("diffuseColor", "red");
    node.set_attr("transparency", "0.5");
    node.set_attr("diffuseColor", "blue");

    assert_eq!(node.attr("diffuseColor"), Some("blue"));
    assert_eq!(
        node.attributes(),
        &[
            ("diffuseColor".to_owned(), "blue".to_owned()),
            ("transparency".to_owned(), "0.5".to_owned()),
        ]
    );
}

#[test]
fn missing_attributes_read_as_none() {
    let node = SceneNode::new("group");
    assert_eq!(node.attr("class"), None);
    assert!(!node.has_attr("class"));
}

#[test]
fn children_keep_append_order() {
    let node = SceneNode::new("scene")
        .with_child(SceneNode::new("group").with_attr("class", "axis"))
        .with_child(SceneNode::new("group").with_attr("class", "bars"))
        .with_child(SceneNode::new("viewpoint"));

    assert_eq!(node.children().len(), 3);
    assert!(node.child_by_class("bars").is_some());
    assert!(node.child_by_tag("viewpoint").is_some());
    assert_eq!(node.children()[0].attr("class"), Some("axis"));
}

#[test]
fn descendant_search_is_depth_first() {
    let tree = SceneNode::new("scene").with_child(
        SceneNode::new("transform").with_child(SceneNode::new("shape").with_child(
            SceneNode::new("box").with_attr("size", "1 1 1"),
        )),
    );

    let found = tree.find_descendant("box").expect("box in tree");
    assert_eq!(found.attr("size"), Some("1 1 1"));
    assert_eq!(tree.count_descendants("box"), 1);
    assert_eq!(tree.count_descendants("group"), 0);
}

#[test]
fn markup_indents_and_self_closes() {
    let node = SceneNode::new("transform")
        .with_attr("translation", "1 2 3")
        .with_child(SceneNode::new("box").with_attr("size", "1 1 1"));

    assert_eq!(
        node.to_markup(),
        "<transform translation=\"1 2 3\">\n  <box size=\"1 1 1\"/>\n</transform>\n"
    );
}

#[test]
fn compact_markup_is_single_line() {
    let node = SceneNode::new("transform")
        .with_attr("translation", "1 2 3")
        .with_child(SceneNode::new("box").with_attr("size", "1 1 1"));

    assert_eq!(
        node.to_markup_compact(),
        "<transform translation=\"1 2 3\"><box size=\"1 1 1\"/></transform>"
    );
    assert_eq!(format!("{node}"), node.to_markup_compact());
}

#[test]
fn attribute_values_are_escaped() {
    let node = SceneNode::new("text").with_attr("string", "a<b & \"c\"");
    assert_eq!(node.to_markup_compact(), "<text string=\"a&lt;b &amp; &quot;c&quot;\"/>");
}

#[test]
fn equal_build_sequences_serialize_identically() {
    let build = || {
        SceneNode::new("scene")
            .with_attr("class", "chart")
            .with_child(SceneNode::new("group").with_attr("class", "bars"))
    };

    let first = build();
    let second = build();
    assert_eq!(first, second);
    assert_eq!(first.to_markup(), second.to_markup());
}
