use crossterm::style::Color;

/// Design tokens for the paramtree terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and tree glyphs must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const CURSOR: &str = "❯";

    // Check states. Leaves within a group behave like radio buttons.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const CURSOR: &str = ">";

    pub const SELECTED: &str = "(*)";
    pub const UNSELECTED: &str = "( )";
    pub const PARTIAL: &str = "(-)";

    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
}

/// Connector glyphs for indented tree renderings.
pub mod connectors {
    pub const BRANCH: &str = "├── ";
    pub const LAST: &str = "└── ";
    pub const PIPE: &str = "│   ";
    pub const BLANK: &str = "    ";
}

pub mod connectors_ascii {
    pub const BRANCH: &str = "|-- ";
    pub const LAST: &str = "`-- ";
    pub const PIPE: &str = "|   ";
    pub const BLANK: &str = "    ";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Pick the unicode or ASCII variant of a token.
pub fn pick(supports_unicode: bool, unicode: &'static str, ascii: &'static str) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}
