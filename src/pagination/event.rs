use serenity::all::{ComponentInteractionData, ComponentInteractionDataKind};

pub const BACK_ID: &str = "back";
pub const FOLLOW_ID: &str = "follow";
pub const CLOSE_ID: &str = "close";

/// A user action on a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Back,
    Follow,
    Close,
    /// Value picked from a select menu.
    Select(String),
}

impl NavigationEvent {
    /// Reads an event from a component's custom id and selected values.
    ///
    /// Any custom id other than the three navigation buttons is treated as a select
    /// menu; a menu with nothing selected yields no event.
    pub fn parse(custom_id: &str, values: &[String]) -> Option<Self> {
        match custom_id {
            BACK_ID => Some(Self::Back),
            FOLLOW_ID => Some(Self::Follow),
            CLOSE_ID => Some(Self::Close),
            _ => values.first().map(|value| Self::Select(value.clone())),
        }
    }

    pub fn from_component(data: &ComponentInteractionData) -> Option<Self> {
        match &data.kind {
            ComponentInteractionDataKind::StringSelect { values } => {
                Self::parse(&data.custom_id, values)
            }
            _ => Self::parse(&data.custom_id, &[]),
        }
    }
}

/// An event together with the user who caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Incoming {
    pub user_id: u64,
    /// `None` when the component is not one the session understands.
    pub event: Option<NavigationEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_buttons() {
        assert_eq!(NavigationEvent::parse("back", &[]), Some(NavigationEvent::Back));
        assert_eq!(
            NavigationEvent::parse("follow", &[]),
            Some(NavigationEvent::Follow)
        );
        assert_eq!(
            NavigationEvent::parse("close", &[]),
            Some(NavigationEvent::Close)
        );
    }

    #[test]
    fn parses_select_values() {
        assert_eq!(
            NavigationEvent::parse("demon", &["3".to_string()]),
            Some(NavigationEvent::Select("3".to_string()))
        );
        assert_eq!(NavigationEvent::parse("demon", &[]), None);
    }
}
