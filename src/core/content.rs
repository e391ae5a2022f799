//! Static marketing copy for every page.
//!
//! Pages render these tables; keeping them here lets tests check the
//! invariants the layout relies on (unique keys, numeric stats, ...).

use super::icon::IconId;

pub const BRAND: &str = "Arc";
pub const TAGLINE: &str = "Project Management for Construction";
pub const SCREENSHOT_PATH: &str = "/arc-app.png";
pub const APP_HOST: &str = "app.arc.build";

/// Footprint of a bento grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BentoSize {
    #[default]
    Default,
    /// Two columns by two rows
    Large,
    /// One column by two rows
    Tall,
    /// Two columns by one row
    Wide,
}

impl BentoSize {
    pub fn grid_class(&self) -> &'static str {
        match self {
            BentoSize::Default => "",
            BentoSize::Large => "md:col-span-2 md:row-span-2 p-8",
            BentoSize::Tall => "md:row-span-2",
            BentoSize::Wide => "md:col-span-2",
        }
    }

    pub fn is_large(&self) -> bool {
        *self == BentoSize::Large
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconId,
    pub title: &'static str,
    pub description: &'static str,
    pub size: BentoSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub era: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    pub id: &'static str,
    pub icon: IconId,
    pub title: &'static str,
    pub short_title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub bullets: &'static [&'static str],
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStep {
    pub icon: IconId,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: IconId,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub description: Option<&'static str>,
}

// ============================================================================
// Home
// ============================================================================

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        icon: IconId::LayoutDashboard,
        title: "Complete Project Lifecycle",
        description: "Lead tracking through warranty management, every project phase in one dashboard. Track progress, manage milestones, and maintain complete visibility from first contact to final walkthrough.",
        size: BentoSize::Large,
    },
    Feature {
        icon: IconId::FileText,
        title: "Document Management",
        description: "E-signatures, plan markup, drawing revisions, and version control without external tools.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Smartphone,
        title: "Mobile Access",
        description: "Daily logs, photo documentation, and real-time updates from any job site.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Users,
        title: "Client Portal",
        description: "Selective access permissions for change orders, draw schedules, project timelines, and communications. Keep clients informed without overwhelming them.",
        size: BentoSize::Wide,
    },
    Feature {
        icon: IconId::Calendar,
        title: "Gantt Scheduling",
        description: "Visual project timelines with milestone tracking and benchmark management.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::RefreshCw,
        title: "QuickBooks Sync",
        description: "Two-way accounting integration with bidirectional data synchronization.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::ClipboardList,
        title: "Change Orders",
        description: "Digital submission, approval workflows, and documentation, all in one place.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Home,
        title: "Post-Construction",
        description: "Transition completed projects to estate management for ongoing homeowner service.",
        size: BentoSize::Default,
    },
];

pub const HOME_INTRO: &[&str] = &[
    "Residential construction demands precision at every level, from initial estimates through final inspections and beyond. Arc eliminates the fragmentation that undermines project success. This is comprehensive project management built specifically for builders and trades: sales pipeline management, scheduling, estimating, documentation, client communication, and warranty tracking unified in a single platform.",
    "No third-party integrations required. No switching between systems. Just complete visibility and control from foundation to completion.",
    "Your field teams access critical tools directly from job sites. Your clients engage through customized portals. Your accounting syncs seamlessly with QuickBooks. Every element of the construction process finds its place within Arc's organized structure.",
];

pub const HOME_PURPOSE: &[&str] = &[
    "Arc exists because residential construction in Southwest Florida demands software as discerning as the clients you serve. We've watched talented builders struggle with fragmented systems: juggling multiple applications, losing critical information between platforms, watching projects suffer from inadequate tools.",
    "The region's builders needed something better: a comprehensive solution built on the principles of how construction actually works.",
    "This isn't software adapted from other industries. It's a platform engineered specifically for the challenges you face daily, designed by people who understand that successful projects require more than task lists and spreadsheets.",
];

// ============================================================================
// About
// ============================================================================

pub const TIMELINE: &[Milestone] = &[
    Milestone {
        era: "THE BEGINNING",
        title: "Roots in the Trade",
        description: "Agustin's family established their electrical contracting business in Southwest Florida, cultivating relationships with builders and developers throughout the region.",
    },
    Milestone {
        era: "THE INSIGHT",
        title: "Pattern Recognition",
        description: "Working alongside builders revealed a consistent pattern: missed deadlines, informal change orders, inadequate organizational systems. The industry was underserved by existing tools.",
    },
    Milestone {
        era: "THE PERSPECTIVE",
        title: "Builder's View",
        description: "As a project manager for a residential builder, Agustin confirmed the local industry lacked software designed for the demands of high-end residential construction.",
    },
    Milestone {
        era: "THE PARTNERSHIP",
        title: "Complementary Expertise",
        description: "Gabi's deep market knowledge and agency relationships across the construction sector, combined with Agustin's technical expertise, revealed an opportunity to create something better.",
    },
    Milestone {
        era: "THE SOLUTION",
        title: "Arc is Born",
        description: "Comprehensive project management software designed specifically for the region's builders, priced fairly and engineered for the actual challenges faced by Southwest Florida's residential construction professionals.",
    },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        value: "SWFL",
        suffix: "",
        label: "Based & Focused",
    },
    Stat {
        value: "100",
        suffix: "%",
        label: "Residential Focus",
    },
    Stat {
        value: "1",
        suffix: "",
        label: "Complete Platform",
    },
    Stat {
        value: "0",
        suffix: "",
        label: "External Tools Needed",
    },
];

pub const VALUES: &[Feature] = &[
    Feature {
        icon: IconId::Target,
        title: "Purpose-Built",
        description: "Every feature exists because residential construction demands it. No bloat, no compromises. Just tools that work the way you do.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Lightbulb,
        title: "Clarity Over Complexity",
        description: "Information should illuminate, not overwhelm. We design for immediate understanding and decisive action.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Shield,
        title: "Reliable Foundation",
        description: "Your projects depend on consistent, dependable systems. We build software with the same structural integrity you bring to construction.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Zap,
        title: "Responsive Evolution",
        description: "Construction practices evolve. Your software should too. We iterate based on real feedback from builders in the field.",
        size: BentoSize::Default,
    },
];

pub const ABOUT_QUOTE: &str = "The majority relied on platforms that were prohibitively expensive, built for broader markets, and fundamentally misaligned with Southwest Florida's distinctive real estate landscape.";

// ============================================================================
// Product
// ============================================================================

pub const MODULES: &[Module] = &[
    Module {
        id: "lifecycle",
        icon: IconId::LayoutDashboard,
        title: "Project Lifecycle",
        short_title: "Lifecycle",
        description: "Track every project from initial inquiry through warranty periods and beyond.",
        full_description: "Sales pipeline management transitions seamlessly into active project dashboards. Upon completion, projects move into warranty tracking or optional estate management for ongoing homeowner services. Nothing falls through transitions between phases: your entire client relationship exists in one continuous record.",
        bullets: &[
            "Lead tracking and qualification",
            "Sales pipeline visualization",
            "Project status dashboards",
            "Milestone and phase tracking",
            "Warranty management tools",
            "Estate management transition",
        ],
        gradient: "from-blue-500/20 to-cyan-500/20",
    },
    Module {
        id: "financial",
        icon: IconId::DollarSign,
        title: "Financial Tools",
        short_title: "Financial",
        description: "Integrated estimating with real-time cost tracking and QuickBooks sync.",
        full_description: "Generate detailed estimates directly within the platform. As projects progress, track actual costs against projections. Change orders integrate automatically into project financials. Two-way QuickBooks synchronization keeps your accounting current without manual data entry.",
        bullets: &[
            "Integrated estimating tools",
            "Budget tracking and cost management",
            "Change order financial integration",
            "Two-way QuickBooks synchronization",
            "Project profitability analysis",
            "Financial reporting across projects",
        ],
        gradient: "from-emerald-500/20 to-teal-500/20",
    },
    Module {
        id: "scheduling",
        icon: IconId::Calendar,
        title: "Scheduling",
        short_title: "Scheduling",
        description: "Gantt-style scheduling with task dependencies and milestone tracking.",
        full_description: "Clear visualization of project timelines, task dependencies, and critical milestones. Set benchmarks for key phases. Track progress against established timelines. Identify potential delays before they impact completion dates. Your entire team operates from the same schedule.",
        bullets: &[
            "Gantt chart project visualization",
            "Milestone and benchmark setting",
            "Task dependency mapping",
            "Timeline adjustment and scenario planning",
            "Progress tracking against schedule",
            "Team-wide schedule visibility",
        ],
        gradient: "from-violet-500/20 to-purple-500/20",
    },
    Module {
        id: "documents",
        icon: IconId::FileText,
        title: "Documents",
        short_title: "Documents",
        description: "Complete document management with markup, versioning, and e-signatures.",
        full_description: "Store, organize, and manage all project documentation within each project's dashboard. Upload and markup construction drawings. Track revisions with complete version history. Process contracts and change orders with integrated e-signature functionality.",
        bullets: &[
            "Drawing upload and organization",
            "Plan markup tools",
            "Revision tracking and version control",
            "Integrated e-signature",
            "Document permissions and access control",
            "Searchable document repository",
        ],
        gradient: "from-amber-500/20 to-orange-500/20",
    },
    Module {
        id: "mobile",
        icon: IconId::Smartphone,
        title: "Mobile Access",
        short_title: "Mobile",
        description: "Field-ready mobile tools for daily logs, photos, and real-time updates.",
        full_description: "Your field teams access critical tools directly from their mobile devices. Submit daily logs with photo documentation. Record site conditions, progress updates, and challenges in real-time. Access current drawings and project information without returning to the office.",
        bullets: &[
            "Daily log submission with photos",
            "Real-time progress documentation",
            "Contact management and communication",
            "Drawing and document access",
            "Task and schedule viewing",
            "Offline functionality",
        ],
        gradient: "from-rose-500/20 to-pink-500/20",
    },
    Module {
        id: "client-portal",
        icon: IconId::Users,
        title: "Client Portal",
        short_title: "Portal",
        description: "Professional client portals with customizable access permissions.",
        full_description: "Provide clients with professional access to their project information through customized portals. You determine exactly what each client sees: project schedules, daily logs with photos, change orders, draw schedules, general messages, or any combination.",
        bullets: &[
            "Selective access permissions by client",
            "Change order submission and approval",
            "Draw schedule visibility",
            "Project timeline and milestone viewing",
            "Photo gallery access with approval controls",
            "Integrated messaging within the platform",
        ],
        gradient: "from-sky-500/20 to-blue-500/20",
    },
];

pub const WORKFLOW: &[WorkflowStep] = &[
    WorkflowStep {
        icon: IconId::Target,
        label: "Lead",
        description: "Capture & qualify",
    },
    WorkflowStep {
        icon: IconId::DollarSign,
        label: "Estimate",
        description: "Scope & price",
    },
    WorkflowStep {
        icon: IconId::Calendar,
        label: "Schedule",
        description: "Plan & assign",
    },
    WorkflowStep {
        icon: IconId::Layers,
        label: "Build",
        description: "Execute & track",
    },
    WorkflowStep {
        icon: IconId::Shield,
        label: "Complete",
        description: "Handoff & warranty",
    },
    WorkflowStep {
        icon: IconId::Home,
        label: "Maintain",
        description: "Ongoing service",
    },
];

pub const PRODUCT_STATS: &[Stat] = &[
    Stat {
        value: "1",
        suffix: "",
        label: "Unified Platform",
    },
    Stat {
        value: "8",
        suffix: "+",
        label: "Core Modules",
    },
    Stat {
        value: "100",
        suffix: "%",
        label: "Residential Focus",
    },
    Stat {
        value: "0",
        suffix: "",
        label: "External Tools Needed",
    },
];

pub const EXTRA_FEATURES: &[Feature] = &[
    Feature {
        icon: IconId::ClipboardList,
        title: "Change Order Management",
        description: "Digital submission, approval workflows, and automatic budget integration. Both parties protected through proper documentation.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Home,
        title: "Post-Construction Services",
        description: "Transition completed projects into estate management for ongoing homeowner service and recurring revenue.",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Zap,
        title: "QuickBooks Integration",
        description: "Two-way synchronization keeps your accounting current without manual data entry or reconciliation headaches.",
        size: BentoSize::Default,
    },
];

// ============================================================================
// Contact
// ============================================================================

pub const TRUST_INDICATORS: &[Feature] = &[
    Feature {
        icon: IconId::Clock,
        title: "Quick Response",
        description: "Replies within 24 hours",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Zap,
        title: "Expert Support",
        description: "Construction-focused guidance",
        size: BentoSize::Default,
    },
    Feature {
        icon: IconId::Shield,
        title: "No Obligations",
        description: "Explore at your own pace",
        size: BentoSize::Default,
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: IconId::Mail,
        label: "Email",
        value: "hello@arc.build",
        href: Some("mailto:hello@arc.build"),
        description: None,
    },
    ContactMethod {
        icon: IconId::Phone,
        label: "Phone",
        value: "(239) 555-1234",
        href: Some("tel:+12395551234"),
        description: None,
    },
    ContactMethod {
        icon: IconId::MapPin,
        label: "Location",
        value: "Naples, Florida",
        href: None,
        description: Some("Serving Southwest Florida"),
    },
];

/// Module shown in the product showcase detail panel.
///
/// Out-of-range selections fall back to the first module.
pub fn module_at(index: usize) -> &'static Module {
    MODULES.get(index).unwrap_or(&MODULES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::CounterValue;
    use std::collections::HashSet;

    #[test]
    fn test_module_ids_unique() {
        let ids: HashSet<_> = MODULES.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), MODULES.len());
    }

    #[test]
    fn test_every_module_has_bullets() {
        for module in MODULES {
            assert!(!module.bullets.is_empty(), "{}", module.id);
        }
    }

    #[test]
    fn test_home_features_has_single_large_cell() {
        let large = HOME_FEATURES.iter().filter(|f| f.size.is_large()).count();
        assert_eq!(large, 1);
    }

    #[test]
    fn test_stats_parse_as_expected() {
        // Only the region label is a literal; the rest count up
        let literals: Vec<_> = ABOUT_STATS
            .iter()
            .chain(PRODUCT_STATS)
            .filter(|s| !CounterValue::parse(s.value).is_numeric())
            .map(|s| s.value)
            .collect();
        assert_eq!(literals, vec!["SWFL"]);
    }

    #[test]
    fn test_bento_classes() {
        assert_eq!(BentoSize::Default.grid_class(), "");
        assert!(BentoSize::Wide.grid_class().contains("col-span-2"));
        assert!(BentoSize::Tall.grid_class().contains("row-span-2"));
    }

    #[test]
    fn test_module_selection_clamps() {
        assert_eq!(module_at(0).id, "lifecycle");
        assert_eq!(module_at(2).id, "scheduling");
        assert_eq!(module_at(MODULES.len()).id, "lifecycle");
    }
}
