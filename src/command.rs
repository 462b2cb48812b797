/// Menu commands, one letter each.
#[derive(Debug, Eq, Ord, PartialEq, PartialOrd, Clone, Copy)]
pub enum Cmd {
    Add,
    Delete,
    Insert,
    Move,
    Open,
    Save,
    Clear,
    View,
    Quit,
}

/// What the command prompt accepts.
pub const PATTERN: &str = "[AaDdIiMmOoSsCcVvQq]";

impl Cmd {
    /// In menu order.
    pub const ALL: [Cmd; 9] = [
        Cmd::Add,
        Cmd::Delete,
        Cmd::Insert,
        Cmd::Move,
        Cmd::Open,
        Cmd::Save,
        Cmd::Clear,
        Cmd::View,
        Cmd::Quit,
    ];

    pub fn letter(self) -> char {
        use Cmd::*;
        match self {
            Add => 'A',
            Delete => 'D',
            Insert => 'I',
            Move => 'M',
            Open => 'O',
            Save => 'S',
            Clear => 'C',
            View => 'V',
            Quit => 'Q',
        }
    }

    pub fn label(self) -> &'static str {
        use Cmd::*;
        match self {
            Add => "Add item",
            Delete => "Delete item",
            Insert => "Insert item",
            Move => "Move item",
            Open => "Open list from disk",
            Save => "Save current list",
            Clear => "Clear list",
            View => "View list",
            Quit => "Quit",
        }
    }

    pub fn from_letter(answer: &str) -> Option<Cmd> {
        let mut chars = answer.chars();
        let c = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        Cmd::ALL.iter().copied().find(|cmd| cmd.letter() == c)
    }

    /// `Enter command [A D I M O S C V Q]`
    pub fn prompt() -> String {
        let letters: Vec<String> = Cmd::ALL.iter().map(|c| c.letter().to_string()).collect();
        format!("Enter command [{}]", letters.join(" "))
    }
}
