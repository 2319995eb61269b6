//! Detail-view and create-flow selection state.

use crate::lists::ResourceListController;

/// Which selection, if any, is open for a resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Nothing open.
    #[default]
    None,
    /// A detail view is open.
    Viewing,
    /// The create flow is open.
    Creating,
}

/// The open selection of a resource family.
///
/// At most one selection is active at a time; the item is carried inside
/// the `Viewing` variant, so "item present iff viewing" holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    /// Nothing open.
    #[default]
    None,
    /// Detail view open for this item.
    Viewing(T),
    /// Create flow open.
    Creating,
}

impl<T> Selection<T> {
    /// The record-style mode view of the selection.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::None => SelectionMode::None,
            Self::Viewing(_) => SelectionMode::Viewing,
            Self::Creating => SelectionMode::Creating,
        }
    }

    /// The open item, present only while viewing.
    #[must_use]
    pub const fn item(&self) -> Option<&T> {
        match self {
            Self::Viewing(item) => Some(item),
            _ => None,
        }
    }
}

/// Tracks which single item is open in a detail view and whether the
/// create flow is active.
///
/// Opening one flow implicitly closes the other; opening a second detail
/// view replaces the first. The controller never mutates its lists except
/// through [`SelectionController::complete_create`].
#[derive(Debug, Default)]
pub struct SelectionController<T> {
    selection: Selection<T>,
}

impl<T> SelectionController<T> {
    /// Creates a controller with nothing open.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selection: Selection::None,
        }
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection<T> {
        &self.selection
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// The open item, present only while viewing.
    #[must_use]
    pub const fn item(&self) -> Option<&T> {
        self.selection.item()
    }

    /// Opens the detail view for `item`, replacing any prior selection.
    pub fn open_detail(&mut self, item: T) {
        self.selection = Selection::Viewing(item);
    }

    /// Opens the create flow, closing any open detail view.
    pub fn open_create(&mut self) {
        self.selection = Selection::Creating;
    }

    /// Closes whatever is open. Idempotent.
    pub fn close(&mut self) {
        self.selection = Selection::None;
    }

    /// Finishes a successful create flow: closes the modal and prepends
    /// the new item to its list.
    ///
    /// Both effects complete before this returns, so a render that happens
    /// after the await observes "modal closed" and "item in list" together,
    /// never one without the other.
    pub async fn complete_create(&mut self, item: T, list: &ResourceListController<T>) {
        self.close();
        list.prepend(item).await;
    }
}
