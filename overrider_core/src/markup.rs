use std::fmt::Debug;

/// The tree mutation API the annotator works against.
///
/// Attribute operations use the null namespace. Implementations own the
/// nodes; the annotator only borrows the tree while it mutates one node.
pub trait MarkupTree {
	/// A cheap handle to a node in the tree.
	type Node: Copy + Eq + Debug;

	/// The tag name exactly as stored.
	fn tag(&self, node: Self::Node) -> &str;
	/// Replace the tag name, keeping attributes and children.
	fn set_tag(&mut self, node: Self::Node, tag: &str);
	fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;
	fn has_attribute(&self, node: Self::Node, name: &str) -> bool {
		self.attribute(node, name).is_some()
	}
	fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);
	fn remove_attribute(&mut self, node: Self::Node, name: &str);
	/// Serialized inner content of the node.
	fn inner_markup(&self, node: Self::Node) -> String;
	/// Remove all inner content of the node.
	fn clear_inner(&mut self, node: Self::Node);
	fn parent(&self, node: Self::Node) -> Option<Self::Node>;
	/// Wrap `node` in a new element named `tag` which takes its place in the
	/// parent. Returns the wrapper.
	fn wrap(&mut self, node: Self::Node, tag: &str) -> Self::Node;
}

/// Elements serialized without a closing tag when they have no children.
pub const VOID_ELEMENTS: [&str; 13] = [
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeData {
	Element {
		tag: String,
		attributes: Vec<(String, String)>,
		children: Vec<NodeId>,
	},
	Text(String),
}

#[derive(Debug, Clone)]
struct Slot {
	data: NodeData,
	parent: Option<NodeId>,
}

/// An arena-backed markup tree with a JSX-friendly serializer.
///
/// Attributes keep insertion order and names are unique per element. Empty
/// values serialize as `name=""`, which is the shape the attribute markers
/// rely on.
#[derive(Debug, Clone, Default)]
pub struct Document {
	nodes: Vec<Slot>,
	roots: Vec<NodeId>,
}

impl Document {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an element and append it to `parent`, or to the document roots
	/// when `parent` is `None`.
	pub fn element(
		&mut self,
		parent: Option<NodeId>,
		tag: &str,
		attributes: &[(&str, &str)],
	) -> NodeId {
		let id = self.push(NodeData::Element {
			tag: tag.to_string(),
			attributes: Vec::new(),
			children: Vec::new(),
		});

		for (name, value) in attributes {
			self.set_attribute(id, name, value);
		}

		self.attach(parent, id);
		id
	}

	/// Append a text node to `parent`.
	pub fn text(&mut self, parent: NodeId, content: &str) -> NodeId {
		let id = self.push(NodeData::Text(content.to_string()));
		self.attach(Some(parent), id);
		id
	}

	pub fn roots(&self) -> &[NodeId] {
		&self.roots
	}

	pub fn children(&self, node: NodeId) -> &[NodeId] {
		match &self.nodes[node.0].data {
			NodeData::Element { children, .. } => children,
			NodeData::Text(_) => &[],
		}
	}

	/// Attribute names of an element in serialization order.
	pub fn attribute_names(&self, node: NodeId) -> Vec<&str> {
		match &self.nodes[node.0].data {
			NodeData::Element { attributes, .. } => {
				attributes.iter().map(|(name, _)| name.as_str()).collect()
			}
			NodeData::Text(_) => Vec::new(),
		}
	}

	/// Serialize the whole document.
	pub fn to_markup(&self) -> String {
		let mut output = String::new();
		for root in &self.roots {
			self.write_node(*root, &mut output);
		}
		output
	}

	/// Serialize a single node including its own tags.
	pub fn node_markup(&self, node: NodeId) -> String {
		let mut output = String::new();
		self.write_node(node, &mut output);
		output
	}

	fn push(&mut self, data: NodeData) -> NodeId {
		let id = NodeId(self.nodes.len());
		self.nodes.push(Slot { data, parent: None });
		id
	}

	fn attach(&mut self, parent: Option<NodeId>, child: NodeId) {
		self.nodes[child.0].parent = parent;
		match parent {
			Some(parent) => {
				if let NodeData::Element { children, .. } = &mut self.nodes[parent.0].data {
					children.push(child);
				}
			}
			None => self.roots.push(child),
		}
	}

	fn write_node(&self, node: NodeId, output: &mut String) {
		match &self.nodes[node.0].data {
			NodeData::Text(content) => output.push_str(&escape_text(content)),
			NodeData::Element {
				tag,
				attributes,
				children,
			} => {
				output.push('<');
				output.push_str(tag);
				for (name, value) in attributes {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&escape_attribute(value));
					output.push('"');
				}

				if children.is_empty() && VOID_ELEMENTS.contains(&tag.as_str()) {
					output.push_str("/>");
					return;
				}

				output.push('>');
				for child in children {
					self.write_node(*child, output);
				}
				output.push_str("</");
				output.push_str(tag);
				output.push('>');
			}
		}
	}
}

impl MarkupTree for Document {
	type Node = NodeId;

	fn tag(&self, node: NodeId) -> &str {
		match &self.nodes[node.0].data {
			NodeData::Element { tag, .. } => tag,
			NodeData::Text(_) => "#text",
		}
	}

	fn set_tag(&mut self, node: NodeId, new_tag: &str) {
		if let NodeData::Element { tag, .. } = &mut self.nodes[node.0].data {
			*tag = new_tag.to_string();
		}
	}

	fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
		match &self.nodes[node.0].data {
			NodeData::Element { attributes, .. } => {
				attributes
					.iter()
					.find(|(key, _)| key == name)
					.map(|(_, value)| value.as_str())
			}
			NodeData::Text(_) => None,
		}
	}

	fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
		if let NodeData::Element { attributes, .. } = &mut self.nodes[node.0].data {
			match attributes.iter_mut().find(|(key, _)| key == name) {
				Some((_, existing)) => *existing = value.to_string(),
				None => attributes.push((name.to_string(), value.to_string())),
			}
		}
	}

	fn remove_attribute(&mut self, node: NodeId, name: &str) {
		if let NodeData::Element { attributes, .. } = &mut self.nodes[node.0].data {
			attributes.retain(|(key, _)| key != name);
		}
	}

	fn inner_markup(&self, node: NodeId) -> String {
		let mut output = String::new();
		for child in self.children(node) {
			self.write_node(*child, &mut output);
		}
		output
	}

	fn clear_inner(&mut self, node: NodeId) {
		let removed = match &mut self.nodes[node.0].data {
			NodeData::Element { children, .. } => std::mem::take(children),
			NodeData::Text(_) => Vec::new(),
		};

		for child in removed {
			self.nodes[child.0].parent = None;
		}
	}

	fn parent(&self, node: NodeId) -> Option<NodeId> {
		self.nodes[node.0].parent
	}

	fn wrap(&mut self, node: NodeId, tag: &str) -> NodeId {
		let parent = self.nodes[node.0].parent;
		let wrapper = self.push(NodeData::Element {
			tag: tag.to_string(),
			attributes: Vec::new(),
			children: vec![node],
		});
		self.nodes[wrapper.0].parent = parent;
		self.nodes[node.0].parent = Some(wrapper);

		let siblings = match parent {
			Some(parent) => {
				match &mut self.nodes[parent.0].data {
					NodeData::Element { children, .. } => children,
					NodeData::Text(_) => return wrapper,
				}
			}
			None => &mut self.roots,
		};

		if let Some(slot) = siblings.iter_mut().find(|sibling| **sibling == node) {
			*slot = wrapper;
		}

		wrapper
	}
}

fn escape_text(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
	value.replace('&', "&amp;").replace('"', "&quot;")
}
