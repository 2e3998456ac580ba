//! Key contexts and the hint strings shown in the help bar.

/// Which part of the UI currently receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Overview,
    /// A list screen whose table has a row action.
    ActionList,
    /// A list screen without a row action.
    PlainList,
    /// A detail screen with its own table.
    DetailTable,
    SessionDetail,
    Settings,
    /// A text field or dialog has focus.
    Editing,
    Help,
    /// The log out dialog.
    Confirm,
}

impl KeyContext {
    /// Section heading in the help panel.
    pub fn display(&self) -> &'static str {
        match self {
            KeyContext::Overview => "Overview",
            KeyContext::ActionList => "Lists",
            KeyContext::PlainList => "Earnings",
            KeyContext::DetailTable => "Detail Screens",
            KeyContext::SessionDetail => "Session Detail",
            KeyContext::Settings => "Settings",
            KeyContext::Editing => "Dialogs and Search",
            KeyContext::Help => "Global",
            KeyContext::Confirm => "Log Out",
        }
    }
}

/// One key and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: String,
    pub description: String,
}

impl Keybinding {
    fn new(key: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            description: description.to_string(),
        }
    }
}

/// Every key binding, grouped by context, in help panel order.
pub fn get_keybindings_grouped() -> Vec<(KeyContext, Vec<Keybinding>)> {
    let b = Keybinding::new;
    vec![
        (
            KeyContext::Help,
            vec![
                b("1-6", "Switch screen"),
                b("Tab / Shift+Tab", "Next / previous screen"),
                b("?", "Toggle this help"),
                b("q", "Log out (asks first)"),
                b("Ctrl+C", "Quit immediately"),
            ],
        ),
        (KeyContext::Overview, vec![b("p", "Toggle This Week / This Month")]),
        (
            KeyContext::ActionList,
            vec![
                b("j / k", "Next / previous row"),
                b("h / l", "Previous / next page"),
                b("g / G", "First / last page"),
                b("s", "Cycle page size 10 / 25 / 50"),
                b("Space", "Select row"),
                b("/", "Search"),
                b("Enter", "Open details"),
            ],
        ),
        (
            KeyContext::DetailTable,
            vec![
                b("j / k / h / l", "Move in the history table"),
                b("/", "Search history"),
                b("Esc", "Back"),
            ],
        ),
        (
            KeyContext::SessionDetail,
            vec![
                b("j / k", "Focus next / previous player"),
                b("Enter", "Player details and score"),
                b("i", "Session info"),
                b("m", "Match result"),
                b("Enter (info)", "Submit final result"),
                b("d (info)", "Disable match"),
                b("Esc", "Close overlay or go back"),
            ],
        ),
        (
            KeyContext::Settings,
            vec![b("e", "Edit account info"), b("c", "Change password")],
        ),
        (
            KeyContext::Editing,
            vec![
                b("Tab", "Next field"),
                b("Enter", "Submit"),
                b("Ctrl+U", "Clear field"),
                b("Esc", "Close"),
            ],
        ),
    ]
}

/// The hint line for `context`. Keys are in brackets.
pub fn get_context_hints(context: KeyContext) -> &'static str {
    match context {
        KeyContext::Overview => "[1-6] screens  [p] period  [?] help  [q] quit",
        KeyContext::ActionList => {
            "[j/k] row  [h/l] page  [Enter] view  [Space] select  [/] search  [s] page size  [q] quit"
        }
        KeyContext::PlainList => {
            "[j/k] row  [h/l] page  [Space] select  [/] search  [s] page size  [q] quit"
        }
        KeyContext::DetailTable => "[j/k] row  [h/l] page  [Space] select  [/] search  [Esc] back",
        KeyContext::SessionDetail => {
            "[j/k] player  [Enter] open/submit  [i] info  [m] result  [d] disable  [Esc] back"
        }
        KeyContext::Settings => "[e] edit  [c] change password  [q] quit",
        KeyContext::Editing => "[Tab] next field  [Enter] submit  [Esc] close",
        KeyContext::Help => "[Esc/?] close",
        KeyContext::Confirm => "[y/Enter] log out  [n/Esc] cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_context_has_hints() {
        for context in [
            KeyContext::Overview,
            KeyContext::ActionList,
            KeyContext::PlainList,
            KeyContext::DetailTable,
            KeyContext::SessionDetail,
            KeyContext::Settings,
            KeyContext::Editing,
            KeyContext::Help,
            KeyContext::Confirm,
        ] {
            assert!(get_context_hints(context).contains('['), "{:?}", context);
        }
    }

    #[test]
    fn test_keybindings_grouped() {
        let grouped = get_keybindings_grouped();
        assert_eq!(grouped[0].0, KeyContext::Help);
        assert!(grouped.iter().all(|(_, bindings)| !bindings.is_empty()));
        assert!(grouped
            .iter()
            .flat_map(|(_, bindings)| bindings)
            .any(|b| b.key == "s" && b.description.contains("page size")));
    }

    #[test]
    fn test_plain_list_has_no_view_hint() {
        assert!(!get_context_hints(KeyContext::PlainList).contains("view"));
        assert!(get_context_hints(KeyContext::ActionList).contains("view"));
    }
}
