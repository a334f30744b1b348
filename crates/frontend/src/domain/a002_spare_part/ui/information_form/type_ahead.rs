use contracts::domain::a002_spare_part::{filter_spare_types, SpareTypeOption};

/// What a key press in the type-ahead input should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Select(SpareTypeOption),
    Ignore,
}

/// Local state of the spare type selector: the search text and whether the
/// suggestion list is open. The selected value itself lives in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeAheadState {
    pub search: String,
    pub open: bool,
}

impl TypeAheadState {
    /// Typing reopens the list. Returns true when the input was emptied and
    /// the current selection should be cleared.
    pub fn input(&mut self, value: String) -> bool {
        let cleared = value.is_empty();
        self.search = value;
        self.open = true;
        cleared
    }

    pub fn focus(&mut self, has_selection: bool) {
        self.open = true;
        if !has_selection {
            self.search.clear();
        }
    }

    /// A choice was made (click, Enter or clear button).
    pub fn finish(&mut self) {
        self.search.clear();
        self.open = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn filtered(&self, options: &[SpareTypeOption]) -> Vec<SpareTypeOption> {
        filter_spare_types(options, &self.search)
    }

    /// Escape closes; Enter picks the only remaining match.
    pub fn key_action(&self, key: &str, options: &[SpareTypeOption]) -> KeyAction {
        match key {
            "Escape" => KeyAction::Close,
            "Enter" => {
                let mut filtered = self.filtered(options);
                if filtered.len() == 1 {
                    KeyAction::Select(filtered.remove(0))
                } else {
                    KeyAction::Ignore
                }
            }
            _ => KeyAction::Ignore,
        }
    }

    /// Text shown in the input: the search while typing, otherwise the
    /// label of the selected option.
    pub fn display_text(&self, selected: &str, options: &[SpareTypeOption]) -> String {
        if !self.search.is_empty() {
            return self.search.clone();
        }
        options
            .iter()
            .find(|o| o.value == selected)
            .map(|o| o.label.clone())
            .unwrap_or_default()
    }

    pub fn suggestions_visible(&self, options: &[SpareTypeOption]) -> bool {
        self.open && !self.filtered(options).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SpareTypeOption> {
        vec![
            SpareTypeOption::new("screen", "Screen"),
            SpareTypeOption::new("battery", "Battery"),
            SpareTypeOption::new("back_cover", "Back Cover"),
        ]
    }

    #[test]
    fn test_escape_closes() {
        let state = TypeAheadState { search: "b".into(), open: true };
        assert_eq!(state.key_action("Escape", &options()), KeyAction::Close);
    }

    #[test]
    fn test_enter_selects_single_match() {
        let state = TypeAheadState { search: "scr".into(), open: true };
        assert_eq!(
            state.key_action("Enter", &options()),
            KeyAction::Select(SpareTypeOption::new("screen", "Screen"))
        );
    }

    #[test]
    fn test_enter_ignored_with_several_or_no_matches() {
        let state = TypeAheadState { search: "ba".into(), open: true };
        assert_eq!(state.key_action("Enter", &options()), KeyAction::Ignore);

        let state = TypeAheadState { search: "speaker".into(), open: true };
        assert_eq!(state.key_action("Enter", &options()), KeyAction::Ignore);
    }

    #[test]
    fn test_other_keys_ignored() {
        let state = TypeAheadState { search: "scr".into(), open: true };
        assert_eq!(state.key_action("a", &options()), KeyAction::Ignore);
    }

    #[test]
    fn test_emptying_input_clears_selection() {
        let mut state = TypeAheadState::default();
        assert!(!state.input("bat".into()));
        assert!(state.open);
        assert!(state.input(String::new()));
    }

    #[test]
    fn test_focus_without_selection_resets_search() {
        let mut state = TypeAheadState { search: "old".into(), open: false };
        state.focus(false);
        assert!(state.open);
        assert!(state.search.is_empty());

        let mut state = TypeAheadState { search: "keep".into(), open: false };
        state.focus(true);
        assert_eq!(state.search, "keep");
    }

    #[test]
    fn test_display_text() {
        let mut state = TypeAheadState::default();
        assert_eq!(state.display_text("battery", &options()), "Battery");
        assert_eq!(state.display_text("", &options()), "");
        state.input("scr".into());
        assert_eq!(state.display_text("battery", &options()), "scr");
    }

    #[test]
    fn test_suggestions_visible_only_with_matches() {
        let mut state = TypeAheadState::default();
        assert!(!state.suggestions_visible(&options()));
        state.input("back".into());
        assert!(state.suggestions_visible(&options()));
        state.input("zzz".into());
        assert!(!state.suggestions_visible(&options()));
        state.finish();
        assert!(!state.open);
        assert!(state.search.is_empty());
    }
}
