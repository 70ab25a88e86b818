//! Icon resolution
//!
//! The UI refers to icons by symbolic kebab-case names. The set is closed,
//! so names resolve to an enum at one site with an explicit fallback
//! instead of a dynamic lookup.

/// The closed set of icons the UI uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    LayoutDashboard,
    Users,
    Clock,
    Calendar,
    CreditCard,
    BarChart,
    FileText,
    Settings,
    Moon,
    Sun,
    Menu,
    ChevronLeft,
    Bell,
    User,
    UserPlus,
    LogOut,
    ClipboardCheck,
    Search,
    Send,
    CheckCircle,
    Cake,
    AlertCircle,
    Edit,
    Trash,
    Eye,
    Grid,
    List,
    /// Unknown name fallback
    Fallback,
}

impl Icon {
    /// Resolve a symbolic kebab-case name to an icon.
    ///
    /// Unknown names resolve to [`Icon::Fallback`] rather than failing.
    pub fn resolve(name: &str) -> Self {
        match name {
            "layout-dashboard" => Self::LayoutDashboard,
            "users" => Self::Users,
            "clock" => Self::Clock,
            "calendar" => Self::Calendar,
            "credit-card" => Self::CreditCard,
            "bar-chart" => Self::BarChart,
            "file-text" => Self::FileText,
            "settings" => Self::Settings,
            "moon" => Self::Moon,
            "sun" => Self::Sun,
            "menu" => Self::Menu,
            "chevron-left" => Self::ChevronLeft,
            "bell" => Self::Bell,
            "user" => Self::User,
            "user-plus" => Self::UserPlus,
            "log-out" => Self::LogOut,
            "clipboard-check" => Self::ClipboardCheck,
            "search" => Self::Search,
            "send" => Self::Send,
            "check-circle" => Self::CheckCircle,
            "cake" => Self::Cake,
            "alert-circle" => Self::AlertCircle,
            "edit" => Self::Edit,
            "trash-2" => Self::Trash,
            "eye" => Self::Eye,
            "grid" => Self::Grid,
            "list" => Self::List,
            _ => Self::Fallback,
        }
    }

    /// Glyph rendered for this icon in the terminal
    pub fn glyph(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "▦",
            Self::Users => "👥",
            Self::Clock => "🕒",
            Self::Calendar => "📅",
            Self::CreditCard => "💳",
            Self::BarChart => "📊",
            Self::FileText => "📄",
            Self::Settings => "⚙",
            Self::Moon => "🌙",
            Self::Sun => "☀",
            Self::Menu => "☰",
            Self::ChevronLeft => "‹",
            Self::Bell => "🔔",
            Self::User => "👤",
            Self::UserPlus => "➕",
            Self::LogOut => "⎋",
            Self::ClipboardCheck => "📋",
            Self::Search => "🔍",
            Self::Send => "✉",
            Self::CheckCircle => "✔",
            Self::Cake => "🎂",
            Self::AlertCircle => "⚠",
            Self::Edit => "✎",
            Self::Trash => "🗑",
            Self::Eye => "👁",
            Self::Grid => "▦",
            Self::List => "≡",
            Self::Fallback => "?",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(Icon::resolve("layout-dashboard"), Icon::LayoutDashboard);
        assert_eq!(Icon::resolve("user-plus"), Icon::UserPlus);
        assert_eq!(Icon::resolve("trash-2"), Icon::Trash);
    }

    #[test]
    fn test_unknown_names_fall_back() {
        assert_eq!(Icon::resolve("does-not-exist"), Icon::Fallback);
        assert_eq!(Icon::resolve(""), Icon::Fallback);
        assert_eq!(Icon::Fallback.glyph(), "?");
    }
}
