use std::fmt;

pub const VNODE_SEPARATOR: char = '#';

/// One of the `replicas` synthetic identities of a node, rendered as `<node>#<replica>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualNode<'a> {
    pub node_id: &'a str,
    pub replica: usize,
}

impl<'a> VirtualNode<'a> {
    #[inline]
    pub fn new(node_id: &'a str, replica: usize) -> Self {
        Self { node_id, replica }
    }
}

impl fmt::Display for VirtualNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.node_id, VNODE_SEPARATOR, self.replica)
    }
}
