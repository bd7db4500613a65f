//! Widget trees delivered by the backend for one render cycle.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Widget type of sidebar deck containers.
pub const DECK_TYPE: &str = "deck";
/// Widget type of tree list boxes.
pub const TREE_LIST_BOX_TYPE: &str = "treelistbox";

/// One node of a backend widget tree.
///
/// Fields the sidebar does not interpret are kept in `extra` so the tree can
/// be handed to the builder unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetNode {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "nullable_children",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<WidgetNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WidgetNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// Append a child node, builder style.
    pub fn with_child(mut self, child: WidgetNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_deck(&self) -> bool {
        self.kind == DECK_TYPE
    }

    pub fn is_tree_list_box(&self) -> bool {
        self.kind == TREE_LIST_BOX_TYPE
    }

    /// Only an explicit `visible: false` hides a node.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Return a copy of `node` whose first tree list box (depth-first) can no
/// longer be dragged, or `None` when the tree has no tree list box.
///
/// The search stops at the first match: later tree list boxes keep their
/// own draggable capability.
pub fn mark_navigator_tree_view(node: &WidgetNode) -> Option<WidgetNode> {
    let mut patched = node.clone();
    mark_in_place(&mut patched).then_some(patched)
}

/// Patch the first tree list box found across `nodes`, in order.
pub(crate) fn mark_first_tree_list_box(nodes: &mut [WidgetNode]) -> bool {
    nodes.iter_mut().any(mark_in_place)
}

fn mark_in_place(node: &mut WidgetNode) -> bool {
    if node.is_tree_list_box() {
        node.draggable = Some(false);
        return true;
    }
    mark_first_tree_list_box(&mut node.children)
}

pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(id)) => id,
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    })
}

fn nullable_children<'de, D>(
    deserializer: D,
) -> Result<Vec<WidgetNode>, D::Error>
where
    D: Deserializer<'de>,
{
    let children = Option::<Vec<WidgetNode>>::deserialize(deserializer)?;
    Ok(children.unwrap_or_default())
}
