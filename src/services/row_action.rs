/// Buttons a management table can put on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 1] = [RowAction::Delete];

    /// Resolves the action name a table emits. Unknown names yield `None` and
    /// are ignored by every manager.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "delete" => Some(RowAction::Delete),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RowAction::Delete => "delete",
        }
    }
}
