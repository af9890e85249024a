use serde::{Deserialize, Serialize};

/// Event that fires a shrine.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Trigger {
    /// The shrine block was broken.
    OnBreak,
    /// An item was offered to the shrine.
    OnInsert,
    /// Periodic tick while the shrine holds an item.
    OnTick,
}

impl TryFrom<String> for Trigger {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Trigger> for String {
    fn from(trigger: Trigger) -> Self {
        trigger.as_ref().to_string()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_case_insensitively_and_emits_lowercase() {
        assert_eq!("ON_BREAK".parse::<Trigger>().unwrap(), Trigger::OnBreak);
        assert_eq!("on_Insert".parse::<Trigger>().unwrap(), Trigger::OnInsert);
        assert!("on_explode".parse::<Trigger>().is_err());

        for trigger in Trigger::iter() {
            let json = serde_json::to_string(&trigger).unwrap();
            assert_eq!(json, format!("\"{}\"", trigger.to_string().to_lowercase()));
        }
        assert_eq!(serde_json::to_string(&Trigger::OnTick).unwrap(), "\"on_tick\"");
    }
}
