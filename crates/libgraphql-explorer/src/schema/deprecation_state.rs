#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(Option<&'a str>),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn new(is_deprecated: bool, reason: Option<&'a str>) -> Self {
        if is_deprecated {
            Self::Deprecated(reason)
        } else {
            Self::NotDeprecated
        }
    }

    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }

    pub fn reason(&self) -> Option<&'a str> {
        match self {
            Self::Deprecated(reason) => *reason,
            Self::NotDeprecated => None,
        }
    }
}
