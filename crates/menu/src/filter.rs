use crate::category::category_name;

/// The active filter selection
///
/// `All` shows every category; `Category` holds a filter identifier taken
/// from a filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub const ALL: &'static str = "all";

    /// Value carried by filter controls for this selection
    pub fn as_value(&self) -> &str {
        match self {
            Filter::All => Self::ALL,
            Filter::Category(id) => id,
        }
    }

    /// Category name this filter resolves to, `None` for `All` or an
    /// identifier missing from the category map
    pub fn category_name(&self) -> Option<&'static str> {
        match self {
            Filter::All => None,
            Filter::Category(id) => category_name(id),
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        if value == Self::ALL {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }
}
