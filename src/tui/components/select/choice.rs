//! Choice input and its normalized form.
//!
//! Callers hand the prompt a list of [`Entry`] values: plain labels,
//! [`Choice`] records, or [`Separator`]s. [`normalize`] turns that into the
//! fixed [`Item`] list the prompt works on for its whole lifetime.

use std::fmt;

/// Why (or whether) a choice is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Disabled {
    #[default]
    No,
    Yes,
    Because(String),
}

impl Disabled {
    pub fn is_disabled(&self) -> bool {
        !matches!(self, Disabled::No)
    }

    /// The suffix shown after a disabled row's name.
    pub fn label(&self) -> Option<String> {
        match self {
            Disabled::No => None,
            Disabled::Yes => Some("(completed)".to_string()),
            Disabled::Because(reason) => Some(format!("({reason})")),
        }
    }
}

impl From<bool> for Disabled {
    fn from(disabled: bool) -> Self {
        if disabled { Disabled::Yes } else { Disabled::No }
    }
}

/// An empty reason means "not disabled".
impl From<&str> for Disabled {
    fn from(reason: &str) -> Self {
        if reason.is_empty() {
            Disabled::No
        } else {
            Disabled::Because(reason.to_string())
        }
    }
}

/// A non-selectable divider line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    pub text: String,
}

impl Separator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::new("─".repeat(14))
    }
}

/// A structured choice. Only `value` is required.
#[derive(Debug, Clone)]
pub struct Choice<T> {
    pub value: T,
    pub name: Option<String>,
    pub description: Option<String>,
    pub short: Option<String>,
    pub disabled: Disabled,
}

impl<T> Choice<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            name: None,
            description: None,
            short: None,
            disabled: Disabled::No,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }
}

/// One entry of the prompt's input list.
#[derive(Debug, Clone)]
pub enum Entry<T> {
    Choice(Choice<T>),
    Separator(Separator),
}

impl<T> From<Choice<T>> for Entry<T> {
    fn from(choice: Choice<T>) -> Self {
        Entry::Choice(choice)
    }
}

impl<T> From<Separator> for Entry<T> {
    fn from(separator: Separator) -> Self {
        Entry::Separator(separator)
    }
}

/// A plain label: value, name and short are all the label.
impl From<&str> for Entry<String> {
    fn from(label: &str) -> Self {
        Entry::Choice(Choice::new(label.to_string()))
    }
}

impl From<String> for Entry<String> {
    fn from(label: String) -> Self {
        Entry::Choice(Choice::new(label))
    }
}

/// A choice with every display field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedChoice<T> {
    pub value: T,
    pub name: String,
    pub short: String,
    pub description: Option<String>,
    pub disabled: Disabled,
}

impl<T> NormalizedChoice<T> {
    pub fn is_disabled(&self) -> bool {
        self.disabled.is_disabled()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<T> {
    Choice(NormalizedChoice<T>),
    Separator(Separator),
}

impl<T> Item<T> {
    /// Separators are the only entries navigation skips.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Item::Choice(_))
    }

    pub fn as_choice(&self) -> Option<&NormalizedChoice<T>> {
        match self {
            Item::Choice(choice) => Some(choice),
            Item::Separator(_) => None,
        }
    }
}

/// Resolve defaults: `name` falls back to the value's `Display`, `short` to `name`.
/// Order and length are preserved; duplicates are kept.
pub fn normalize<T: fmt::Display>(entries: Vec<Entry<T>>) -> Vec<Item<T>> {
    entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Separator(separator) => Item::Separator(separator),
            Entry::Choice(choice) => {
                let name = choice.name.unwrap_or_else(|| choice.value.to_string());
                let short = choice.short.unwrap_or_else(|| name.clone());
                Item::Choice(NormalizedChoice {
                    value: choice.value,
                    name,
                    short,
                    description: choice.description,
                    disabled: choice.disabled,
                })
            }
        })
        .collect()
}
