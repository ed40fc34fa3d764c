use yew::prelude::*;

/// Closed set of pictograms used across the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Phone,
    MessageCircle,
    Mail,
    Calendar,
    Database,
    Building,
    BarChart,
    Spreadsheet,
    Presentation,
    Search,
    Bot,
    Cpu,
    Brain,
    Zap,
    ArrowRight,
    Menu,
    Close,
    ChevronLeft,
    ChevronRight,
    Globe,
    Users,
    Target,
    Shield,
    Clock,
    Code,
    Rocket,
    Handshake,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Phone => "📞",
            Icon::MessageCircle => "💬",
            Icon::Mail => "✉️",
            Icon::Calendar => "📅",
            Icon::Database => "🗄️",
            Icon::Building => "🏨",
            Icon::BarChart => "📊",
            Icon::Spreadsheet => "🧮",
            Icon::Presentation => "📑",
            Icon::Search => "🔍",
            Icon::Bot => "🤖",
            Icon::Cpu => "⚙️",
            Icon::Brain => "🧠",
            Icon::Zap => "⚡",
            Icon::ArrowRight => "→",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
            Icon::Globe => "🌐",
            Icon::Users => "👥",
            Icon::Target => "🎯",
            Icon::Shield => "🛡️",
            Icon::Clock => "⏱️",
            Icon::Code => "💻",
            Icon::Rocket => "🚀",
            Icon::Handshake => "🤝",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class={classes!("icon", props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}
