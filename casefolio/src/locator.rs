//! Name-based lookup of nodes
//!
//! Name equality is identity: the first node with a matching name wins.

use crate::host::{DocumentHost, HostError, NodeId};

/// Find a top-level node by name
///
/// # Returns
/// * `Ok(Some(NodeId))` - First top-level node named `name`
/// * `Ok(None)` - No such node
/// * `Err(HostError)` - The host could not report a node name
pub fn find_page<H: DocumentHost + ?Sized>(
    host: &H,
    name: &str,
) -> Result<Option<NodeId>, HostError> {
    first_named(host, host.top_level(), name)
}

/// Find an immediate child of `parent` by name
pub fn find_child<H: DocumentHost + ?Sized>(
    host: &H,
    parent: NodeId,
    name: &str,
) -> Result<Option<NodeId>, HostError> {
    first_named(host, host.children(parent)?, name)
}

fn first_named<H: DocumentHost + ?Sized>(
    host: &H,
    candidates: Vec<NodeId>,
    name: &str,
) -> Result<Option<NodeId>, HostError> {
    for node in candidates {
        if host.name(node)? == name {
            return Ok(Some(node));
        }
    }
    Ok(None)
}
