//! Symbolic icon identifiers.
//!
//! Content tables and components name icons by [`IconId`]; the SVG data
//! is resolved by the UI layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    ArrowRight,
    Calendar,
    Check,
    CheckCircle,
    ChevronDown,
    ChevronRight,
    ClipboardList,
    Clock,
    DollarSign,
    FileText,
    Home,
    Layers,
    LayoutDashboard,
    Lightbulb,
    Loader,
    Mail,
    MapPin,
    Menu,
    Phone,
    RefreshCw,
    Shield,
    Smartphone,
    Target,
    Users,
    X,
    Zap,
}

impl IconId {
    /// Kebab-case name, used for `data-icon` and accessible labels
    pub fn name(&self) -> &'static str {
        match self {
            IconId::ArrowRight => "arrow-right",
            IconId::Calendar => "calendar",
            IconId::Check => "check",
            IconId::CheckCircle => "check-circle",
            IconId::ChevronDown => "chevron-down",
            IconId::ChevronRight => "chevron-right",
            IconId::ClipboardList => "clipboard-list",
            IconId::Clock => "clock",
            IconId::DollarSign => "dollar-sign",
            IconId::FileText => "file-text",
            IconId::Home => "home",
            IconId::Layers => "layers",
            IconId::LayoutDashboard => "layout-dashboard",
            IconId::Lightbulb => "lightbulb",
            IconId::Loader => "loader",
            IconId::Mail => "mail",
            IconId::MapPin => "map-pin",
            IconId::Menu => "menu",
            IconId::Phone => "phone",
            IconId::RefreshCw => "refresh-cw",
            IconId::Shield => "shield",
            IconId::Smartphone => "smartphone",
            IconId::Target => "target",
            IconId::Users => "users",
            IconId::X => "x",
            IconId::Zap => "zap",
        }
    }
}
