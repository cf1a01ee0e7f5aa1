//! Closed set of inline SVG icons.
//!
//! Every icon the site can show is a variant of [`IconName`]; content refers to
//! icons by variant, never by string, so a missing icon is a compile error.
//! Paths are stroke outlines on a 256x256 viewBox, drawn with round caps (a
//! zero-length segment such as `h0` renders as a dot).

use serde::{Deserialize, Serialize};

/// Icon identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum IconName {
    Code,
    Smartphone,
    Palette,
    Users,
    User,
    Target,
    Eye,
    Linkedin,
    Github,
    Twitter,
    Instagram,
    Mail,
    Phone,
    MapPin,
    Send,
    CheckCircle,
    AlertCircle,
    Star,
    ChevronLeft,
    ChevronRight,
    ChevronDown,
    Quote,
    Menu,
    Close,
    Moon,
    Sun,
    ArrowUp,
    ArrowRight,
}

impl IconName {
    /// Every icon, for previews and tests.
    pub const ALL: [IconName; 28] = [
        IconName::Code,
        IconName::Smartphone,
        IconName::Palette,
        IconName::Users,
        IconName::User,
        IconName::Target,
        IconName::Eye,
        IconName::Linkedin,
        IconName::Github,
        IconName::Twitter,
        IconName::Instagram,
        IconName::Mail,
        IconName::Phone,
        IconName::MapPin,
        IconName::Send,
        IconName::CheckCircle,
        IconName::AlertCircle,
        IconName::Star,
        IconName::ChevronLeft,
        IconName::ChevronRight,
        IconName::ChevronDown,
        IconName::Quote,
        IconName::Menu,
        IconName::Close,
        IconName::Moon,
        IconName::Sun,
        IconName::ArrowUp,
        IconName::ArrowRight,
    ];

    /// SVG path data (`d` attribute).
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Code => ICON_CODE,
            IconName::Smartphone => ICON_SMARTPHONE,
            IconName::Palette => ICON_PALETTE,
            IconName::Users => ICON_USERS,
            IconName::User => ICON_USER,
            IconName::Target => ICON_TARGET,
            IconName::Eye => ICON_EYE,
            IconName::Linkedin => ICON_LINKEDIN,
            IconName::Github => ICON_GITHUB,
            IconName::Twitter => ICON_TWITTER,
            IconName::Instagram => ICON_INSTAGRAM,
            IconName::Mail => ICON_MAIL,
            IconName::Phone => ICON_PHONE,
            IconName::MapPin => ICON_MAP_PIN,
            IconName::Send => ICON_SEND,
            IconName::CheckCircle => ICON_CHECK_CIRCLE,
            IconName::AlertCircle => ICON_ALERT_CIRCLE,
            IconName::Star => ICON_STAR,
            IconName::ChevronLeft => ICON_CHEVRON_LEFT,
            IconName::ChevronRight => ICON_CHEVRON_RIGHT,
            IconName::ChevronDown => ICON_CHEVRON_DOWN,
            IconName::Quote => ICON_QUOTE,
            IconName::Menu => ICON_MENU,
            IconName::Close => ICON_CLOSE,
            IconName::Moon => ICON_MOON,
            IconName::Sun => ICON_SUN,
            IconName::ArrowUp => ICON_ARROW_UP,
            IconName::ArrowRight => ICON_ARROW_RIGHT,
        }
    }

    /// Accessible label.
    pub fn label(&self) -> &'static str {
        match self {
            IconName::Code => "Code",
            IconName::Smartphone => "Smartphone",
            IconName::Palette => "Palette",
            IconName::Users => "Users",
            IconName::User => "User",
            IconName::Target => "Target",
            IconName::Eye => "Eye",
            IconName::Linkedin => "LinkedIn",
            IconName::Github => "GitHub",
            IconName::Twitter => "Twitter",
            IconName::Instagram => "Instagram",
            IconName::Mail => "Email",
            IconName::Phone => "Phone",
            IconName::MapPin => "Address",
            IconName::Send => "Send",
            IconName::CheckCircle => "Success",
            IconName::AlertCircle => "Error",
            IconName::Star => "Star",
            IconName::ChevronLeft => "Previous",
            IconName::ChevronRight => "Next",
            IconName::ChevronDown => "Scroll down",
            IconName::Quote => "Quote",
            IconName::Menu => "Open menu",
            IconName::Close => "Close menu",
            IconName::Moon => "Dark mode",
            IconName::Sun => "Light mode",
            IconName::ArrowUp => "Back to top",
            IconName::ArrowRight => "Continue",
        }
    }
}

// =============================================================================
// Path data (256x256, stroke outlines)
// =============================================================================

const ICON_CODE: &str = "M64,88 L24,128 L64,168 M192,88 L232,128 L192,168 M160,40 L96,216";

const ICON_SMARTPHONE: &str = "M80,24 H176 A16,16 0 0 1 192,40 V216 A16,16 0 0 1 176,232 H80 A16,16 0 0 1 64,216 V40 A16,16 0 0 1 80,24 Z M64,56 H192 M64,200 H192";

const ICON_PALETTE: &str = "M128,32 A96,96 0 1 0 128,224 C144,224 152,212 148,198 C142,180 156,168 172,168 H200 A24,24 0 0 0 224,144 A96,96 0 0 0 128,32 Z M84,104 h0 M128,80 h0 M172,104 h0 M84,152 h0";

const ICON_USERS: &str = "M88,160 A40,40 0 1 0 88,80 A40,40 0 1 0 88,160 Z M16,208 C40,172 136,172 160,208 M168,80 A36,36 0 0 1 168,152 M184,172 C208,176 228,188 240,208";

const ICON_USER: &str = "M128,160 A56,56 0 1 0 128,48 A56,56 0 1 0 128,160 Z M32,216 C64,176 192,176 224,216";

const ICON_TARGET: &str = "M128,32 A96,96 0 1 0 128,224 A96,96 0 1 0 128,32 Z M128,80 A48,48 0 1 0 128,176 A48,48 0 1 0 128,80 Z M128,128 h0";

const ICON_EYE: &str = "M16,128 C56,56 200,56 240,128 C200,200 56,200 16,128 Z M128,96 A32,32 0 1 0 128,160 A32,32 0 1 0 128,96 Z";

const ICON_LINKEDIN: &str = "M40,40 H216 V216 H40 Z M80,112 V176 M80,80 h0 M120,176 V112 M120,140 C120,112 176,104 176,140 V176";

const ICON_GITHUB: &str = "M96,216 V184 C96,172 100,164 108,158 C72,152 48,136 48,100 C48,88 52,76 60,68 C56,56 56,44 62,32 C76,32 88,40 96,48 C116,42 140,42 160,48 C168,40 180,32 194,32 C200,44 200,56 196,68 C204,76 208,88 208,100 C208,136 184,152 148,158 C156,164 160,172 160,184 V216 M96,196 C64,204 56,180 40,176";

const ICON_TWITTER: &str = "M40,40 L176,216 H216 L80,40 Z M40,216 L112,144 M216,40 L144,112";

const ICON_INSTAGRAM: &str = "M80,32 H176 A48,48 0 0 1 224,80 V176 A48,48 0 0 1 176,224 H80 A48,48 0 0 1 32,176 V80 A48,48 0 0 1 80,32 Z M128,88 A40,40 0 1 0 128,168 A40,40 0 1 0 128,88 Z M184,72 h0";

const ICON_MAIL: &str = "M32,56 H224 V200 H32 Z M32,56 L128,144 L224,56";

const ICON_PHONE: &str = "M92,40 L64,40 C48,40 40,52 40,64 C40,160 96,216 192,216 C204,216 216,208 216,192 V164 L168,144 L148,168 C120,156 100,136 88,108 L112,88 Z";

const ICON_MAP_PIN: &str = "M128,232 C128,232 48,160 48,104 A80,80 0 0 1 208,104 C208,160 128,232 128,232 Z M128,72 A32,32 0 1 0 128,136 A32,32 0 1 0 128,72 Z";

const ICON_SEND: &str = "M224,32 L112,144 M224,32 L152,224 L112,144 L32,104 Z";

const ICON_CHECK_CIRCLE: &str = "M128,32 A96,96 0 1 0 128,224 A96,96 0 1 0 128,32 Z M88,132 L116,160 L172,104";

const ICON_ALERT_CIRCLE: &str = "M128,32 A96,96 0 1 0 128,224 A96,96 0 1 0 128,32 Z M128,80 V136 M128,172 h0";

const ICON_STAR: &str = "M128,24 L158,96 L236,100 L176,150 L196,228 L128,184 L60,228 L80,150 L20,100 L98,96 Z";

const ICON_CHEVRON_LEFT: &str = "M160,48 L80,128 L160,208";

const ICON_CHEVRON_RIGHT: &str = "M96,48 L176,128 L96,208";

const ICON_CHEVRON_DOWN: &str = "M48,96 L128,176 L208,96";

const ICON_QUOTE: &str = "M104,72 H48 V136 H104 V160 C104,184 88,200 64,200 M208,72 H152 V136 H208 V160 C208,184 192,200 168,200";

const ICON_MENU: &str = "M40,64 H216 M40,128 H216 M40,192 H216";

const ICON_CLOSE: &str = "M200,56 L56,200 M56,56 L200,200";

const ICON_MOON: &str = "M216,152 A96,96 0 0 1 104,40 A96,96 0 1 0 216,152 Z";

const ICON_SUN: &str = "M128,80 A48,48 0 1 0 128,176 A48,48 0 1 0 128,80 Z M128,16 V40 M128,216 V240 M16,128 H40 M216,128 H240 M48,48 L64,64 M192,192 L208,208 M48,208 L64,192 M192,64 L208,48";

const ICON_ARROW_UP: &str = "M128,216 V40 M56,112 L128,40 L200,112";

const ICON_ARROW_RIGHT: &str = "M40,128 H216 M144,56 L216,128 L144,200";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_icon_has_a_path() {
        for icon in IconName::ALL {
            let path = icon.path();
            assert!(path.starts_with('M'), "{icon:?} path must start with a moveto");
            assert!(!icon.label().is_empty());
        }
    }

    #[test]
    fn icons_are_distinct() {
        let paths: HashSet<_> = IconName::ALL.iter().map(IconName::path).collect();
        assert_eq!(paths.len(), IconName::ALL.len());
    }
}
