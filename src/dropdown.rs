//! Open/search state of the searchable game dropdown.

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownAction {
    /// Button press. Ignored while the control is disabled.
    Toggle { disabled: bool },
    Search(String),
    /// An option was picked; the parent has already been notified.
    Selected,
    /// Pointer-down landed outside the control's subtree.
    OutsideClick,
}

impl DropdownState {
    pub fn apply(&self, action: DropdownAction) -> Self {
        match action {
            DropdownAction::Toggle { disabled: true } => self.clone(),
            DropdownAction::Toggle { disabled: false } => Self {
                open: !self.open,
                search: self.search.clone(),
            },
            DropdownAction::Search(text) => Self {
                open: self.open,
                search: text,
            },
            DropdownAction::Selected | DropdownAction::OutsideClick => Self::default(),
        }
    }
}

impl Reducible for DropdownState {
    type Action = DropdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
