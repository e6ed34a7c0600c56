//! Icon slot shared by skills and page chrome.
//!
//! An icon is either a remote image or a named glyph; renderers match on the
//! variant instead of inspecting values at runtime.

/// Tagged icon reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Image { url: &'static str },
    Glyph(Glyph),
}

/// Built-in glyph set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    ArrowLeft,
    Award,
    Briefcase,
    ChevronRight,
    Code,
    Download,
    Film,
    Globe,
    GraduationCap,
    Layers,
    Layout,
    Mail,
    MapPin,
    Moon,
    Palette,
    PenTool,
    Sun,
    User,
}

impl Glyph {
    /// Stable identifier, used as the `glyph--{id}` class suffix.
    pub fn id(self) -> &'static str {
        match self {
            Self::ArrowLeft => "arrow-left",
            Self::Award => "award",
            Self::Briefcase => "briefcase",
            Self::ChevronRight => "chevron-right",
            Self::Code => "code",
            Self::Download => "download",
            Self::Film => "film",
            Self::Globe => "globe",
            Self::GraduationCap => "graduation-cap",
            Self::Layers => "layers",
            Self::Layout => "layout",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Moon => "moon",
            Self::Palette => "palette",
            Self::PenTool => "pen-tool",
            Self::Sun => "sun",
            Self::User => "user",
        }
    }

    /// Text fallback rendered inside the glyph span.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::ArrowLeft => "←",
            Self::Award => "🏅",
            Self::Briefcase => "💼",
            Self::ChevronRight => "›",
            Self::Code => "</>",
            Self::Download => "⬇",
            Self::Film => "🎞",
            Self::Globe => "🌐",
            Self::GraduationCap => "🎓",
            Self::Layers => "◫",
            Self::Layout => "▦",
            Self::Mail => "✉",
            Self::MapPin => "📍",
            Self::Moon => "☾",
            Self::Palette => "🎨",
            Self::PenTool => "✒",
            Self::Sun => "☀",
            Self::User => "👤",
        }
    }
}

impl Icon {
    pub const fn image(url: &'static str) -> Self {
        Self::Image { url }
    }

    pub const fn glyph(glyph: Glyph) -> Self {
        Self::Glyph(glyph)
    }
}
