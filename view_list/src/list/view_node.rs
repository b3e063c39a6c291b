// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`ViewNode`] describes one window `[offset, offset + length)` over a
//! [`super::SharedBuffer`]. Nodes form a tree through their `parent` link: the root
//! has no parent and `offset == 0`, each sub-view points at the node it was carved
//! out of.
//!
//! The `offset` of a node is absolute (it already includes the offsets of all its
//! ancestors), so turning a view-relative index into a buffer index is a single
//! addition. The only thing that has to travel up the tree is a change in length,
//! which is what [`ViewNode::adjust_length()`] does.
//!
//! ```text
//! buffer:  [ a  b  c  d  e  f ]
//! root:    [───────────────────]  offset 0, length 6
//! child:      [────────]          offset 1, length 3   (root.sub_view(1, 4))
//! grand:         [──]             offset 2, length 1   (child.sub_view(1, 2))
//! ```
//!
//! Inserting through `grand` grows `grand`, `child` and `root` by one. Siblings and
//! cousins are not visited, their cached windows go stale.

use std::{cell::RefCell, ops::Range, rc::Rc};

use super::{DEBUG_VIEW_LIST_MOD, ListError, ListResult};

/// Shared handle to a [`ViewNode`]. A child holds a strong reference to its parent, so
/// an ancestor stays alive (and keeps receiving length updates) for as long as any of
/// its descendants does.
pub type ViewNodeRef = Rc<RefCell<ViewNode>>;

#[derive(Debug)]
pub struct ViewNode {
    offset: usize,
    length: usize,
    parent: Option<ViewNodeRef>,
}

impl ViewNode {
    /// A root node spanning the first `length` slots of its buffer.
    #[must_use]
    pub fn new_root(length: usize) -> ViewNodeRef {
        Rc::new(RefCell::new(Self {
            offset: 0,
            length,
            parent: None,
        }))
    }

    /// A child node over the view-relative range `from..to` of `parent`.
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidRange`] unless `from <= to <= parent.length`.
    pub fn new_child(parent: &ViewNodeRef, from: usize, to: usize) -> ListResult<ViewNodeRef> {
        let (parent_offset, parent_length) = {
            let it = parent.borrow();
            (it.offset, it.length)
        };

        if from > to || to > parent_length {
            return Err(ListError::InvalidRange {
                from,
                to,
                len: parent_length,
            });
        }

        let child = Self {
            offset: parent_offset + from,
            length: to - from,
            parent: Some(Rc::clone(parent)),
        };

        DEBUG_VIEW_LIST_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🪟 new sub-view",
                offset = %child.offset,
                length = %child.length,
                parent_offset = %parent_offset,
            );
        });

        Ok(Rc::new(RefCell::new(child)))
    }

    #[must_use]
    pub fn offset(&self) -> usize { self.offset }

    #[must_use]
    pub fn length(&self) -> usize { self.length }

    #[must_use]
    pub fn parent(&self) -> Option<&ViewNodeRef> { self.parent.as_ref() }

    #[must_use]
    pub fn is_root(&self) -> bool { self.parent.is_none() }

    /// The absolute buffer range this node currently covers.
    #[must_use]
    pub fn window(&self) -> Range<usize> { self.offset..self.offset + self.length }

    /// Translate a view-relative index into an absolute buffer index. No bounds check,
    /// callers validate `local_index` against [`Self::length()`] first.
    #[must_use]
    pub fn absolute_index(&self, local_index: usize) -> usize { self.offset + local_index }

    /// Add `delta` to the length of `node` and of every one of its ancestors, walking
    /// the parent chain up to the root. This keeps every ancestor's size correct
    /// without ever rescanning the buffer.
    pub fn adjust_length(node: &ViewNodeRef, delta: isize) {
        let mut depth = 0_usize;
        let mut maybe_current = Some(Rc::clone(node));

        while let Some(current) = maybe_current {
            let mut it = current.borrow_mut();
            it.length = it.length.saturating_add_signed(delta);
            maybe_current = it.parent.clone();
            depth += 1;
        }

        DEBUG_VIEW_LIST_MOD.then(|| {
            tracing::debug!(
                message = "📏 propagated length delta",
                delta = %delta,
                nodes_updated = %depth,
            );
        });
    }

    /// Number of ancestors between `node` and the root (the root has depth 0).
    #[must_use]
    pub fn depth(node: &ViewNodeRef) -> usize {
        let mut depth = 0;
        let mut maybe_parent = node.borrow().parent.clone();
        while let Some(parent) = maybe_parent {
            depth += 1;
            maybe_parent = parent.borrow().parent.clone();
        }
        depth
    }
}
