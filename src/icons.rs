use yew::prelude::*;

/// Icons the admin panel lets the psychologist pick for specialty cards.
/// The stored value is the symbolic name; anything unrecognized renders as
/// [`Icon::Brain`] so a card never shows up without its glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Brain,
    Heart,
    BookOpen,
    Users,
    Award,
    Clock,
    MapPin,
    Phone,
    Mail,
    Star,
    CheckCircle,
    Camera,
    Stethoscope,
    Activity,
    Zap,
    Shield,
    Target,
    UserPlus,
    UserCheck,
    UserX,
    UserCog,
    Sun,
    Moon,
    Sparkles,
    MessageCircle,
    MessageSquare,
    Mic,
    Volume2,
    TrendingUp,
    BarChart,
    PieChart,
    Gauge,
    Leaf,
    Flower,
    TreePine,
    Wind,
    Handshake,
    HelpCircle,
    LifeBuoy,
    Umbrella,
    Home,
    Gamepad2,
    Puzzle,
    Palette,
    Footprints,
    Waves,
    Mountain,
    Compass,
    Timer,
    Calendar,
    Hourglass,
}

impl Icon {
    pub fn resolve(name: &str) -> Self {
        match name {
            "Brain" => Icon::Brain,
            "Heart" => Icon::Heart,
            "BookOpen" => Icon::BookOpen,
            "Users" => Icon::Users,
            "Award" => Icon::Award,
            "Clock" => Icon::Clock,
            "MapPin" => Icon::MapPin,
            "Phone" => Icon::Phone,
            "Mail" => Icon::Mail,
            "Star" => Icon::Star,
            "CheckCircle" => Icon::CheckCircle,
            "Camera" => Icon::Camera,
            "Stethoscope" => Icon::Stethoscope,
            "Activity" => Icon::Activity,
            "Zap" => Icon::Zap,
            "Shield" => Icon::Shield,
            "Target" => Icon::Target,
            "UserPlus" => Icon::UserPlus,
            "UserCheck" => Icon::UserCheck,
            "UserX" => Icon::UserX,
            "UserCog" => Icon::UserCog,
            "Sun" => Icon::Sun,
            "Moon" => Icon::Moon,
            "Sparkles" => Icon::Sparkles,
            "MessageCircle" => Icon::MessageCircle,
            "MessageSquare" => Icon::MessageSquare,
            "Mic" => Icon::Mic,
            "Volume2" => Icon::Volume2,
            "TrendingUp" => Icon::TrendingUp,
            "BarChart" => Icon::BarChart,
            "PieChart" => Icon::PieChart,
            "Gauge" => Icon::Gauge,
            "Leaf" => Icon::Leaf,
            "Flower" => Icon::Flower,
            "TreePine" => Icon::TreePine,
            "Wind" => Icon::Wind,
            "Handshake" => Icon::Handshake,
            "HelpCircle" => Icon::HelpCircle,
            "LifeBuoy" => Icon::LifeBuoy,
            "Umbrella" => Icon::Umbrella,
            "Home" => Icon::Home,
            "Gamepad2" => Icon::Gamepad2,
            "Puzzle" => Icon::Puzzle,
            "Palette" => Icon::Palette,
            "Footprints" => Icon::Footprints,
            "Waves" => Icon::Waves,
            "Mountain" => Icon::Mountain,
            "Compass" => Icon::Compass,
            "Timer" => Icon::Timer,
            "Calendar" => Icon::Calendar,
            "Hourglass" => Icon::Hourglass,
            _ => Icon::Brain,
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            Icon::Brain => "🧠",
            Icon::Heart => "💗",
            Icon::BookOpen => "📖",
            Icon::Users => "👥",
            Icon::Award => "🏅",
            Icon::Clock => "🕐",
            Icon::MapPin => "📍",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::Star => "⭐",
            Icon::CheckCircle => "✅",
            Icon::Camera => "📷",
            Icon::Stethoscope => "🩺",
            Icon::Activity => "📈",
            Icon::Zap => "⚡",
            Icon::Shield => "🛡️",
            Icon::Target => "🎯",
            Icon::UserPlus => "🤝",
            Icon::UserCheck => "🙋",
            Icon::UserX => "🚷",
            Icon::UserCog => "⚙️",
            Icon::Sun => "☀️",
            Icon::Moon => "🌙",
            Icon::Sparkles => "✨",
            Icon::MessageCircle => "💬",
            Icon::MessageSquare => "🗨️",
            Icon::Mic => "🎤",
            Icon::Volume2 => "🔊",
            Icon::TrendingUp => "📊",
            Icon::BarChart => "📊",
            Icon::PieChart => "📉",
            Icon::Gauge => "🧭",
            Icon::Leaf => "🍃",
            Icon::Flower => "🌸",
            Icon::TreePine => "🌲",
            Icon::Wind => "🌬️",
            Icon::Handshake => "🤝",
            Icon::HelpCircle => "❓",
            Icon::LifeBuoy => "🛟",
            Icon::Umbrella => "☂️",
            Icon::Home => "🏠",
            Icon::Gamepad2 => "🎮",
            Icon::Puzzle => "🧩",
            Icon::Palette => "🎨",
            Icon::Footprints => "👣",
            Icon::Waves => "🌊",
            Icon::Mountain => "⛰️",
            Icon::Compass => "🧭",
            Icon::Timer => "⏱️",
            Icon::Calendar => "📅",
            Icon::Hourglass => "⏳",
        }
    }

    /// Glyph tinted with the specialty's accent color.
    pub fn render(&self, color: &str) -> Html {
        html! {
            <span
                class="specialty-icon"
                style={format!("color: {};", color)}
                aria-hidden="true"
            >
                { self.glyph() }
            </span>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Icon::resolve("Heart"), Icon::Heart);
        assert_eq!(Icon::resolve("Hourglass"), Icon::Hourglass);
        assert_eq!(Icon::resolve("TreePine"), Icon::TreePine);
    }

    #[test]
    fn unknown_name_falls_back_to_brain() {
        assert_eq!(Icon::resolve("NotAnIcon"), Icon::Brain);
        assert_eq!(Icon::resolve(""), Icon::Brain);
        // Lookup is exact, not case-insensitive.
        assert_eq!(Icon::resolve("heart"), Icon::Brain);
    }
}
