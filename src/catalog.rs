//! Static portfolio content. Rendered in source order.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub client: &'static str,
    pub summary: &'static str,
    pub problem: &'static str,
    pub approach: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub impact: &'static [&'static str],
    pub url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub metric: &'static str,
    pub url: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Website {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "8+", label: "Years designing products" },
    Stat { value: "40+", label: "Features shipped" },
    Stat { value: "12", label: "Teams partnered with" },
];

pub const SKILLS: &[&str] = &[
    "Product strategy",
    "User research",
    "Interaction design",
    "Design systems",
    "Prototyping",
    "Accessibility audits",
    "Figma",
    "Usability testing",
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Reworking onboarding for a B2B payroll tool",
        client: "Ledgerline",
        summary: "Cut the time from sign-up to first payroll run from days to under an hour.",
        problem: "New admins stalled on a 14-step setup wizard and most opened a support ticket before finishing.",
        approach: &[
            "Shadowed 9 onboarding calls and mapped every drop-off point",
            "Split setup into a guided checklist that could be finished in any order",
            "Prefilled company data from the tax registry lookup",
        ],
        tags: &["B2B", "Onboarding", "Research"],
        impact: &["-62% setup support tickets", "+31% week-one activation"],
        url: None,
    },
    CaseStudy {
        title: "A design system for three product teams",
        client: "Northwind Health",
        summary: "One component library and token set shared by web, iOS and the clinician dashboard.",
        problem: "Three teams had drifted into three visual languages and duplicated every form control.",
        approach: &[
            "Audited 600+ screens and merged 41 button variants into 4",
            "Defined colour and type tokens with contrast checks built in",
            "Ran fortnightly office hours so teams could propose components",
        ],
        tags: &["Design systems", "Accessibility", "Healthcare"],
        impact: &["2x faster UI delivery", "WCAG AA across all surfaces"],
        url: Some("https://www.figma.com/community/file/northwind-design-system"),
    },
    CaseStudy {
        title: "Checkout for a local grocery marketplace",
        client: "Basketful",
        summary: "A mobile checkout that handles substitutions before they become complaints.",
        problem: "One in five orders had an out-of-stock item and customers only found out at the door.",
        approach: &[
            "Prototyped three substitution flows and tested them in-store",
            "Moved substitution preferences into the cart",
            "Added live picker updates with one-tap approve or refund",
        ],
        tags: &["Mobile", "E-commerce", "Prototyping"],
        impact: &["-45% refund requests", "+18% repeat orders"],
        url: None,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Contrast Checker plugin",
        description: "Figma plugin that flags text layers failing WCAG contrast against whatever sits behind them.",
        tags: &["Figma", "Accessibility", "Side project"],
        metric: "3,200 installs",
        url: Some("https://www.figma.com/community/plugin/contrast-checker"),
    },
    Project {
        title: "Habit tracker concept",
        description: "A calm habit tracker built around weekly reflection instead of streaks.",
        tags: &["Mobile", "Concept"],
        metric: "Featured on Dribbble",
        url: Some("https://dribbble.com/shots/habit-tracker-concept"),
    },
    Project {
        title: "Research repository",
        description: "Notion template for tagging interview snippets so insights outlive the project.",
        tags: &["Research ops", "Template"],
        metric: "Used by 5 teams",
        url: None,
    },
];

pub const WEBSITES: &[Website] = &[
    Website {
        title: "Fjord Coffee Roasters",
        description: "Storefront and subscription flow for a small-batch roastery.",
        tags: &["Web", "E-commerce"],
        url: "https://fjordcoffee.example.com",
    },
    Website {
        title: "Studio Oma",
        description: "Portfolio site for an architecture practice, built around large photography.",
        tags: &["Web", "Portfolio"],
        url: "https://studio-oma.example.com",
    },
    Website {
        title: "Run Club Helsinki",
        description: "Event calendar and sign-up pages for a community running club.",
        tags: &["Web", "Community"],
        url: "https://runclubhelsinki.example.com",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_have_content() {
        for study in CASE_STUDIES {
            assert!(!study.title.is_empty());
            assert!(!study.tags.is_empty());
            assert!(!study.impact.is_empty());
        }
        for project in PROJECTS {
            assert!(!project.tags.is_empty());
        }
        for site in WEBSITES {
            assert!(site.url.starts_with("https://"));
        }
    }

    #[test]
    fn external_links_are_https() {
        let urls = CASE_STUDIES
            .iter()
            .filter_map(|c| c.url)
            .chain(PROJECTS.iter().filter_map(|p| p.url));
        for url in urls {
            assert!(url.starts_with("https://"), "{url}");
        }
    }
}
