use smallvec::SmallVec;

use crate::scene::writer;

/// One element in an X3D scene-graph fragment.
///
/// Attributes keep first-insertion order and setting an existing name
/// replaces its value in place, mirroring DOM `setAttribute`. Children
/// keep append order. Equal build sequences therefore produce equal
/// markup.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    tag: String,
    attributes: SmallVec<[(String, String); 8]>,
    children: Vec<SceneNode>,
}

impl SceneNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Sets or replaces an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self
            .attributes
            .iter_mut()
            .find(|(existing_name, _)| *existing_name == name)
        {
            existing.1 = value;
            return;
        }
        self.attributes.push((name, value));
    }

    /// Builder-style `set_attr`.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing_name, _)| existing_name == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn push_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Builder-style `push_child`.
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        &self.children
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child with the given tag.
    #[must_use]
    pub fn child_by_tag(&self, tag: &str) -> Option<&SceneNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// First direct child whose `class` attribute equals `class_name`.
    #[must_use]
    pub fn child_by_class(&self, class_name: &str) -> Option<&SceneNode> {
        self.children
            .iter()
            .find(|child| child.attr("class") == Some(class_name))
    }

    /// First node in the subtree (self included, depth-first) with the
    /// given tag.
    #[must_use]
    pub fn find_descendant(&self, tag: &str) -> Option<&SceneNode> {
        if self.tag == tag {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_descendant(tag))
    }

    /// Number of nodes in the subtree (self included) with the given tag.
    #[must_use]
    pub fn count_descendants(&self, tag: &str) -> usize {
        let own = usize::from(self.tag == tag);
        own + self
            .children
            .iter()
            .map(|child| child.count_descendants(tag))
            .sum::<usize>()
    }

    /// Serializes the subtree as indented X3D markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        writer::to_markup(self)
    }

    /// Serializes the subtree as single-line X3D markup, for embedding
    /// into host documents.
    #[must_use]
    pub fn to_markup_compact(&self) -> String {
        writer::to_markup_compact(self)
    }
}

impl std::fmt::Display for SceneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_markup_compact())
    }
}
