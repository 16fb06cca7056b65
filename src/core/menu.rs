//! # Menu Letters
//!
//! The task list is driven by letter keys, not by Enter. Which letters are
//! live depends on the application state and on the highlighted row, so the
//! set is recomputed before every keypress.
//!
//! ```text
//! error?  ──yes──▶ {Q}
//!   │no
//!   ▼
//! {Q} ∪ {D if tasks} ∪ {E,M if tasks and row enabled} ∪ {C}
//! ```

use std::fmt;

/// Actions reachable from the main task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Create,
    Delete,
    Edit,
    MarkDone,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Create,
        MenuAction::Edit,
        MenuAction::MarkDone,
        MenuAction::Delete,
        MenuAction::Quit,
    ];

    pub fn letter(self) -> char {
        match self {
            MenuAction::Create => 'C',
            MenuAction::Delete => 'D',
            MenuAction::Edit => 'E',
            MenuAction::MarkDone => 'M',
            MenuAction::Quit => 'Q',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Create => "create",
            MenuAction::Delete => "delete",
            MenuAction::Edit => "edit",
            MenuAction::MarkDone => "mark done",
            MenuAction::Quit => "quit",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|action| action.letter() == upper)
    }
}

/// A set of uppercase ASCII letters, one bit per letter.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> Self {
        Self(0)
    }

    /// Builds a set from every ASCII letter in `letters`; other characters are ignored.
    pub fn from_letters(letters: &str) -> Self {
        let mut set = Self::new();
        for c in letters.chars() {
            set.insert(c);
        }
        set
    }

    fn bit(c: char) -> Option<u32> {
        let upper = c.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| 1 << (upper as u32 - 'A' as u32))
    }

    /// Returns `false` when `c` is not an ASCII letter.
    pub fn insert(&mut self, c: char) -> bool {
        match Self::bit(c) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    /// Case-insensitive membership.
    pub fn contains(&self, c: char) -> bool {
        Self::bit(c).is_some_and(|bit| self.0 & bit != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        ('A'..='Z').filter(|c| self.contains(*c))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().collect();
        write!(f, "LetterSet({letters:?})")
    }
}

/// Inputs to the letter gating, passed in explicitly on every menu display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuPolicy {
    pub error: bool,
    pub has_tasks: bool,
}

impl MenuPolicy {
    pub fn allowed_letters(&self, active_disabled: bool) -> LetterSet {
        let mut allowed = LetterSet::new();
        allowed.insert(MenuAction::Quit.letter());
        if self.error {
            return allowed;
        }

        if self.has_tasks {
            allowed.insert(MenuAction::Delete.letter());
            if !active_disabled {
                allowed.insert(MenuAction::Edit.letter());
                allowed.insert(MenuAction::MarkDone.letter());
            }
        }
        allowed.insert(MenuAction::Create.letter());
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_set_membership_is_case_insensitive() {
        let set = LetterSet::from_letters("QC");
        assert!(set.contains('q'));
        assert!(set.contains('C'));
        assert!(!set.contains('m'));
        assert!(!set.contains('1'));
    }

    #[test]
    fn test_letter_set_ignores_non_letters() {
        let mut set = LetterSet::new();
        assert!(!set.insert('7'));
        assert!(!set.insert('é'));
        assert!(set.is_empty());
        assert_eq!(format!("{:?}", LetterSet::from_letters("mq")), "LetterSet(\"MQ\")");
    }

    #[test]
    fn test_error_allows_only_quit() {
        let policy = MenuPolicy { error: true, has_tasks: true };
        assert_eq!(policy.allowed_letters(false), LetterSet::from_letters("Q"));
    }

    #[test]
    fn test_no_tasks_allows_quit_and_create() {
        let policy = MenuPolicy { error: false, has_tasks: false };
        assert_eq!(policy.allowed_letters(false), LetterSet::from_letters("QC"));
    }

    #[test]
    fn test_enabled_row_allows_everything() {
        let policy = MenuPolicy { error: false, has_tasks: true };
        assert_eq!(policy.allowed_letters(false), LetterSet::from_letters("QCDEM"));
    }

    #[test]
    fn test_disabled_row_blocks_edit_and_mark_done() {
        let policy = MenuPolicy { error: false, has_tasks: true };
        let allowed = policy.allowed_letters(true);
        assert_eq!(allowed, LetterSet::from_letters("QCD"));
        assert!(!allowed.contains('E'));
        assert!(!allowed.contains('M'));
    }

    #[test]
    fn test_action_from_letter() {
        assert_eq!(MenuAction::from_letter('e'), Some(MenuAction::Edit));
        assert_eq!(MenuAction::from_letter('M'), Some(MenuAction::MarkDone));
        assert_eq!(MenuAction::from_letter('x'), None);
    }
}
