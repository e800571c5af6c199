//! Bulk removal of existing pages
//!
//! A document may never be left without a page, and the focused page may
//! never be removed. Clearing therefore goes through a placeholder page:
//!
//! 1. create the placeholder,
//! 2. focus it,
//! 3. remove every other top-level node,
//! 4. hand the placeholder back as a [`PendingPlaceholder`]; it is removed
//!    only once the first real page of the new structure exists.

use crate::host::{DocumentHost, HostError, NodeId};

/// Reserved name of the placeholder page
pub const PLACEHOLDER_PAGE_NAME: &str = "🗑️ Temporary (will be deleted)";

/// Placeholder page still waiting to be removed
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the placeholder page stays in the document until closed or discarded"]
pub struct PendingPlaceholder {
    page: NodeId,
}

impl PendingPlaceholder {
    /// Handle of the placeholder page
    pub fn page(&self) -> NodeId {
        self.page
    }

    /// Focus `real_page`, then remove the placeholder
    pub fn close<H: DocumentHost + ?Sized>(
        self,
        host: &mut H,
        real_page: NodeId,
    ) -> Result<(), HostError> {
        host.set_current_page(real_page)?;
        host.remove(self.page)
    }

    /// Remove the placeholder without a freshly created page to land on
    ///
    /// Focus moves to `fallback` first when one is given. Without it the
    /// removal usually fails, because the placeholder is both focused and
    /// the only page left.
    pub fn discard<H: DocumentHost + ?Sized>(
        self,
        host: &mut H,
        fallback: Option<NodeId>,
    ) -> Result<(), HostError> {
        if host.is_removed(self.page) {
            return Ok(());
        }
        if let Some(page) = fallback {
            host.set_current_page(page)?;
        }
        host.remove(self.page)
    }
}

/// Remove every top-level node, leaving only a focused placeholder page
///
/// # Returns
/// * `Ok(PendingPlaceholder)` - The placeholder, to be closed once a real
///   page exists
/// * `Err(HostError)` - A host call failed; the placeholder and any nodes
///   not yet removed stay in the document
pub fn clear_existing<H: DocumentHost + ?Sized>(
    host: &mut H,
) -> Result<PendingPlaceholder, HostError> {
    let placeholder = host.create_page(PLACEHOLDER_PAGE_NAME)?;
    host.set_current_page(placeholder)?;

    let doomed: Vec<NodeId> = host
        .top_level()
        .into_iter()
        .filter(|node| *node != placeholder)
        .collect();
    log::debug!("Removing {} existing top-level nodes", doomed.len());
    for node in doomed {
        host.remove(node)?;
    }

    Ok(PendingPlaceholder { page: placeholder })
}
