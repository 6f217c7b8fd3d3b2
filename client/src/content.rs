//! Static page copy: section anchors, tab catalogs, and marketing blurbs.
//!
//! DESIGN
//! ======
//! Everything the page renders as data lives here so the section list used by
//! the nav bar and the scroll-spy can never drift apart, and so the tab
//! switchers can be instantiated from plain slices.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// A navigable page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Navigable sections in document order (top to bottom).
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home" },
    Section { id: "services", label: "Services" },
    Section { id: "about", label: "About" },
    Section { id: "why-us", label: "Why Us" },
    Section { id: "contact", label: "Contact" },
];

/// Anchor of the contact section, the target of every call-to-action.
pub const CONTACT_SECTION: &str = "contact";

/// Anchor of the services section.
pub const SERVICES_SECTION: &str = "services";

/// One card inside a tab panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// One tab of a [`TabSwitcher`](crate::components::tab_switcher::TabSwitcher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub tagline: Option<&'static str>,
    pub accent: &'static str,
    pub items: &'static [TabItem],
}

const BRAND_ORANGE: &str = "#ff6b00";

pub const SERVICES: &[TabCategory] = &[
    TabCategory {
        id: "cyber",
        label: "Cybersecurity Products",
        icon: "\u{1F6E1}",
        tagline: Some("Defend. Detect. Respond."),
        accent: BRAND_ORANGE,
        items: &[
            TabItem {
                icon: "\u{2694}",
                title: "Penetration Testing",
                desc: "Simulated real-world cyberattacks to identify vulnerabilities.",
            },
            TabItem {
                icon: "\u{1F441}",
                title: "Vulnerability Assessment",
                desc: "Comprehensive scanning of infrastructure security gaps.",
            },
            TabItem {
                icon: "\u{1F41E}",
                title: "Malware Analysis",
                desc: "Reverse-engineering malicious code to understand threats.",
            },
            TabItem {
                icon: "\u{2611}",
                title: "Security Audits",
                desc: "Compliance audits aligned with ISO, NIST, and OWASP.",
            },
        ],
    },
    TabCategory {
        id: "web",
        label: "Website Development",
        icon: "\u{2328}",
        tagline: Some("Build. Secure. Scale."),
        accent: "#c94e00",
        items: &[
            TabItem { icon: "\u{1F310}", title: "Business Websites", desc: "High-performance conversion-focused sites." },
            TabItem { icon: "\u{1F512}", title: "Secure Web Apps", desc: "Security-first full-stack applications." },
            TabItem { icon: "\u{1F6D2}", title: "E-commerce", desc: "PCI-DSS compliant scalable stores." },
            TabItem { icon: "\u{1F4CA}", title: "Admin Dashboards", desc: "Role-based analytics systems." },
            TabItem {
                icon: "\u{1F4F1}",
                title: "Android App Development",
                desc: "Native & cross-platform mobile applications.",
            },
        ],
    },
];

pub const TRAINING: &[TabCategory] = &[
    TabCategory {
        id: "cybersecurity",
        label: "Cybersecurity",
        icon: "\u{1F6E1}",
        tagline: None,
        accent: BRAND_ORANGE,
        items: &[
            TabItem {
                icon: "\u{2694}",
                title: "CEH (Certified Ethical Hacker)",
                desc: "Industry-standard ethical hacking certification prep.",
            },
            TabItem { icon: "\u{1F3AF}", title: "OSCP Preparation", desc: "Hands-on offensive security lab training." },
            TabItem {
                icon: "\u{1F916}",
                title: "AI-Based Cybersecurity",
                desc: "Leverage machine learning for threat detection.",
            },
            TabItem { icon: "\u{1F465}", title: "Red Team Operations", desc: "Advanced adversary simulation techniques." },
            TabItem {
                icon: "\u{1F441}",
                title: "Blue Team & SOC Analyst",
                desc: "Defensive security, SIEM & incident response.",
            },
        ],
    },
    TabCategory {
        id: "ai-data",
        label: "AI & Data",
        icon: "\u{1F9E0}",
        tagline: None,
        accent: BRAND_ORANGE,
        items: &[
            TabItem {
                icon: "\u{2728}",
                title: "Generative AI (GenAI)",
                desc: "Build with LLMs, prompt engineering & RAG.",
            },
            TabItem { icon: "\u{1F4BB}", title: "AI & Machine Learning", desc: "Neural networks, NLP & computer vision." },
            TabItem { icon: "\u{1F4C8}", title: "Data Science", desc: "Analytics, visualization & statistical modeling." },
        ],
    },
    TabCategory {
        id: "development",
        label: "Development",
        icon: "\u{2328}",
        tagline: None,
        accent: BRAND_ORANGE,
        items: &[TabItem {
            icon: "\u{1F4DA}",
            title: "Full Stack Development",
            desc: "MERN/MEAN stack with real-world projects.",
        }],
    },
    TabCategory {
        id: "devops-cloud",
        label: "DevOps & Cloud",
        icon: "\u{2601}",
        tagline: None,
        accent: BRAND_ORANGE,
        items: &[TabItem { icon: "\u{1F500}", title: "DevOps Engineering", desc: "CI/CD pipelines, Docker & Kubernetes." }],
    },
    TabCategory {
        id: "databases",
        label: "Databases",
        icon: "\u{1F5C4}",
        tagline: None,
        accent: BRAND_ORANGE,
        items: &[
            TabItem {
                icon: "\u{1F4CB}",
                title: "MySQL Database Training",
                desc: "Relational DB design, queries & optimization.",
            },
            TabItem { icon: "\u{1F343}", title: "MongoDB Training", desc: "NoSQL, aggregation & schema design patterns." },
        ],
    },
];

/// A titled blurb with an icon, used by the about and why-us grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const VALUES: &[Highlight] = &[
    Highlight {
        icon: "\u{1F441}",
        title: "Transparency",
        desc: "We keep you informed at every step. No jargon, no hidden costs, just honest communication.",
    },
    Highlight {
        icon: "\u{1F6E1}",
        title: "Integrity",
        desc: "We handle your data and systems with the highest ethical standards and confidentiality.",
    },
    Highlight {
        icon: "\u{1F525}",
        title: "Passion",
        desc: "We're driven by a genuine love for cybersecurity and a hunger to make the digital world safer.",
    },
    Highlight {
        icon: "\u{1F91D}",
        title: "Collaboration",
        desc: "We work alongside your team as partners, not just vendors. Your goals become ours.",
    },
];

pub const ACHIEVEMENTS: &[&str] = &[
    "CEH & OSCP Certified Team Members",
    "Modern Threat Intelligence Approach",
    "Affordable Security for Startups & SMBs",
    "Transparent Pricing, No Hidden Costs",
];

pub const REASONS: &[Highlight] = &[
    Highlight {
        icon: "\u{1F3C6}",
        title: "Certified Team",
        desc: "Our team members hold CEH, OSCP, and AWS certifications to back up their skills.",
    },
    Highlight {
        icon: "\u{1F680}",
        title: "Client First",
        desc: "Your success is our priority. We tailor every engagement to your unique needs and goals.",
    },
    Highlight {
        icon: "\u{1F3A7}",
        title: "24/7 Support",
        desc: "Our team is always on-call. Threats don't keep business hours.",
    },
    Highlight {
        icon: "\u{1F6E1}",
        title: "End-to-End Security",
        desc: "From assessment to remediation, we handle the complete security lifecycle in-house.",
    },
];

pub const HERO_TAGS: &[&str] = &["Penetration Testing", "Security Training", "Web Development", "Threat Monitoring"];

/// A labelled link (contact channel or social profile).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CHANNELS: &[LinkItem] = &[
    LinkItem {
        icon: "\u{2709}",
        label: "Email Us",
        value: "hello@astraxfusiontech.io",
        href: "mailto:hello@astraxfusiontech.io",
    },
    LinkItem { icon: "\u{260E}", label: "Call Us", value: "Coming Soon", href: "#" },
    LinkItem { icon: "\u{1F4CD}", label: "Based In", value: "India", href: "#" },
];

pub const SOCIAL_LINKS: &[LinkItem] = &[
    LinkItem { icon: "\u{1D54F}", label: "Twitter", value: "", href: "#" },
    LinkItem { icon: "in", label: "LinkedIn", value: "", href: "#" },
    LinkItem { icon: "\u{2325}", label: "GitHub", value: "", href: "#" },
    LinkItem { icon: "\u{25CE}", label: "Instagram", value: "", href: "#" },
];

/// Footer link columns, in display order.
pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    (
        "Services",
        &["Penetration Testing", "Vulnerability Assessment", "Malware Analysis", "Security Audits"],
    ),
    (
        "Training",
        &["Ethical Hacking", "Web Security", "SOC Analyst Training", "Malware Analysis Course"],
    ),
    (
        "Development",
        &["Business Websites", "Secure Web Apps", "E-commerce Development", "Admin Dashboards"],
    ),
    ("Company", &["About Us", "Blog", "Careers", "Privacy Policy", "Terms of Service"]),
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Cookie Policy"];

/// Position of `id` in [`SECTIONS`], if declared.
pub fn section_index(id: &str) -> Option<usize> {
    SECTIONS.iter().position(|s| s.id == id)
}
