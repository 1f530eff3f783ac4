/// Tri-state check mark shown for a field.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum CheckboxState {
    /// The field itself is selected (for a parent node: every child is).
    Checked,

    /// Neither the field nor anything below it is selected.
    Unchecked,

    /// Some, but not all, of the field's descendants are selected. Always
    /// derived, never set by a click.
    Partial,
}
impl CheckboxState {
    /// The state a click moves to. A partially checked box becomes fully
    /// checked.
    pub fn toggled(self) -> Self {
        match self {
            Self::Checked => Self::Unchecked,
            Self::Unchecked | Self::Partial => Self::Checked,
        }
    }

    /// Derive a parent's state from the states of its direct children.
    pub fn from_children(states: impl IntoIterator<Item = CheckboxState>) -> Self {
        let mut all_checked = true;
        let mut all_unchecked = true;
        for state in states {
            all_checked &= state == Self::Checked;
            all_unchecked &= state == Self::Unchecked;
        }
        match (all_checked, all_unchecked) {
            (true, _) => Self::Checked,
            (_, true) => Self::Unchecked,
            _ => Self::Partial,
        }
    }

    pub(crate) fn marker(&self) -> &'static str {
        match self {
            Self::Checked => "[x]",
            Self::Unchecked => "[ ]",
            Self::Partial => "[-]",
        }
    }
}
