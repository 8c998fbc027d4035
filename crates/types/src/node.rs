use crate::hexid::{decode_id, encode_id, hex_id_type, IdError, ID_BYTES};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

hex_id_type! {
    /// Identifier of a node in the naming tree.
    ///
    /// Node identifiers are derived, never allocated: the identifier of a
    /// child is `Sha256(parent ∥ label_hash)`, and the tree root is the
    /// all-zero identifier. Every point in an unbounded naming tree gets a
    /// collision-resistant, globally unique address this way.
    NodeId
}

hex_id_type! {
    /// Hash of a single path segment of a hierarchical name.
    LabelHash
}

impl NodeId {
    /// The well-known root of the naming tree (all zero bytes).
    pub const ROOT: NodeId = NodeId([0u8; ID_BYTES]);

    /// Whether this identifier is the tree root.
    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }

    /// Derive the identifier of the child named by `label` under this node.
    ///
    /// Pure function of `(parent, label)`: the same label under the same
    /// parent always maps to the same identifier.
    pub fn child(&self, label: &LabelHash) -> NodeId {
        let mut hasher = Sha256::new();
        hasher.update(self.0);
        hasher.update(label.as_bytes());
        NodeId(hasher.finalize().into())
    }
}

impl LabelHash {
    /// Hash a label string (a single path segment, e.g. `"domain"`).
    pub fn hash(label: &str) -> LabelHash {
        let mut hasher = Sha256::new();
        hasher.update(label.as_bytes());
        LabelHash(hasher.finalize().into())
    }
}

/// Compute the node identifier of a dot-separated hierarchical name.
///
/// Labels are folded from the top of the tree down, so
/// `namehash("sub.domain.eth")` is
/// `ROOT.child("eth").child("domain").child("sub")`. The empty string maps
/// to [`NodeId::ROOT`].
pub fn namehash(name: &str) -> NodeId {
    let mut node = NodeId::ROOT;
    if name.is_empty() {
        return node;
    }
    for label in name.split('.').rev() {
        node = node.child(&LabelHash::hash(label));
    }
    node
}
