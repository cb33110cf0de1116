use std::collections::HashMap;
use std::fmt::{Display, Write};

use crate::catalog::StringId;

pub const APP_NAME: StringId = StringId::new("app_name");
pub const ABOUT: StringId = StringId::new("about");
pub const YEARS_OLD: StringId = StringId::new("years_old");
pub const EXPAND_BUTTON_DESCRIPTION: StringId =
    StringId::new("expand_button_content_description");
pub const WOOF_LOGO_DESCRIPTION: StringId = StringId::new("woof_logo_description");

const ENGLISH: [(&str, &str); 23] = [
    ("app_name", "Woof"),
    ("about", "About:"),
    ("years_old", "%d years old"),
    (
        "expand_button_content_description",
        "See more information about this dog",
    ),
    ("woof_logo_description", "Woof logo"),
    ("dog_name_1", "Koda"),
    ("dog_name_2", "Lola"),
    ("dog_name_3", "Frankie"),
    ("dog_name_4", "Nox"),
    ("dog_name_5", "Faye"),
    ("dog_name_6", "Bella"),
    ("dog_name_7", "Moana"),
    ("dog_name_8", "Tzeitel"),
    ("dog_name_9", "Leroy"),
    ("dog_description_1", "Eating treats on the terrace"),
    ("dog_description_2", "Barking at Daddy"),
    ("dog_description_3", "Stealing socks"),
    ("dog_description_4", "Meeting new animals"),
    ("dog_description_5", "Digging in the garden"),
    ("dog_description_6", "Chasing cars"),
    ("dog_description_7", "Eating sand"),
    ("dog_description_8", "Sunbathing"),
    ("dog_description_9", "Sleeping in dangerous places"),
];

/// Resolves display strings, substituting `%d`/`%s` with `args` in order.
pub trait StringResolver {
    fn resolve_string(&self, id: StringId, args: &[&dyn Display]) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: HashMap<&'static str, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn english() -> Self {
        ENGLISH
            .iter()
            .fold(Self::new(), |table, &(key, text)| {
                table.with(StringId::new(key), text)
            })
    }

    pub fn with(mut self, id: StringId, text: impl Into<String>) -> Self {
        self.entries.insert(id.key(), text.into());
        self
    }

    pub fn contains(&self, id: StringId) -> bool {
        self.entries.contains_key(id.key())
    }
}

impl StringResolver for StringTable {
    fn resolve_string(&self, id: StringId, args: &[&dyn Display]) -> String {
        match self.entries.get(id.key()) {
            Some(template) => substitute(template, args),
            None => {
                tracing::warn!(id = id.key(), "missing string resource");
                id.key().to_string()
            }
        }
    }
}

fn substitute(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('d' | 's')) => {
                chars.next();
                match args.next() {
                    Some(arg) => {
                        let _ = write!(out, "{arg}");
                    }
                    None => {
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_old_substitutes_age() {
        let strings = StringTable::english();
        assert_eq!(strings.resolve_string(YEARS_OLD, &[&2]), "2 years old");
    }

    #[test]
    fn missing_id_resolves_to_its_key() {
        let strings = StringTable::new();
        assert_eq!(strings.resolve_string(APP_NAME, &[]), "app_name");
    }

    #[test]
    fn substitution_handles_escapes_and_missing_args() {
        assert_eq!(substitute("100%% %s", &[&"done"]), "100% done");
        assert_eq!(substitute("%d and %d", &[&1]), "1 and %d");
        assert_eq!(substitute("trailing %", &[]), "trailing %");
        assert_eq!(substitute("%x stays", &[&5]), "%x stays");
    }

    #[test]
    fn with_overrides_existing_entry() {
        let strings = StringTable::english().with(APP_NAME, "Wuff");
        assert_eq!(strings.resolve_string(APP_NAME, &[]), "Wuff");
    }
}
