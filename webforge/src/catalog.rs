//! Package catalogue and fuzzy search.
//!
//! The catalogue is the fixed list of npm packages the tool knows how to
//! offer. It is initialized once at process start and never mutated.
//! Searches are pure functions over that list, so concurrent queries
//! cannot interfere with each other.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Every package the tool can offer, in display order.
///
/// The order is significant: an empty search returns the catalogue
/// exactly as declared here.
const CATALOG: &[&str] = &[
    "why-did-you-render",
    "eslint-plugin-tailwindcss",
    "framer-motion",
    "tailwindcss",
    "postcss",
    "autoprefixer",
    "sass",
    "prettier",
    "eslint-config-prettier",
    "eslint-plugin-react",
    "eslint-plugin-react-hooks",
    "clsx",
    "lucide-react",
    "@headlessui/react",
    "zod",
    "react-loading-skeleton",
    "react-hot-toast",
    "react-hook-form",
    "uuid",
    "lodash",
    "axios",
    "zustand",
    "openai",
    "fuse.js",
    "msw",
];

/// A package offered in one of the init prompt groups.
#[derive(Debug, Clone, Copy)]
pub struct GroupEntry {
    /// Package name, must be a catalogue member.
    pub name: &'static str,
    /// Whether the checkbox starts checked.
    pub default_selected: bool,
}

/// A named set of packages shown together in one checkbox prompt.
///
/// Groups partition the catalogue; both group order and entry order are
/// display-significant and preserved.
#[derive(Debug, Clone, Copy)]
pub struct PackageGroup {
    pub name: &'static str,
    pub entries: &'static [GroupEntry],
}

const fn entry(name: &'static str, default_selected: bool) -> GroupEntry {
    GroupEntry {
        name,
        default_selected,
    }
}

const GROUPS: &[PackageGroup] = &[
    PackageGroup {
        name: "Icons",
        entries: &[entry("lucide-react", false)],
    },
    PackageGroup {
        name: "Utilities",
        entries: &[
            entry("clsx", true),
            entry("lodash", false),
            entry("uuid", false),
        ],
    },
    PackageGroup {
        name: "Animations",
        entries: &[entry("framer-motion", false)],
    },
    PackageGroup {
        name: "Linting & Formatting",
        entries: &[
            entry("eslint-plugin-tailwindcss", true),
            entry("prettier", true),
            entry("eslint-config-prettier", true),
            entry("eslint-plugin-react", true),
            entry("eslint-plugin-react-hooks", true),
        ],
    },
    PackageGroup {
        name: "Extras",
        entries: &[
            entry("why-did-you-render", true),
            entry("tailwindcss", true),
            entry("postcss", true),
            entry("autoprefixer", true),
            entry("sass", true),
            entry("@headlessui/react", false),
            entry("zod", false),
            entry("react-loading-skeleton", false),
            entry("react-hot-toast", false),
            entry("react-hook-form", false),
            entry("axios", false),
            entry("zustand", false),
            entry("openai", false),
            entry("fuse.js", false),
            entry("msw", false),
        ],
    },
];

/// The package groups presented by the `init` flow, in prompt order.
pub fn groups() -> &'static [PackageGroup] {
    GROUPS
}

/// Searchable view over the static package catalogue.
#[derive(Debug, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    /// All catalogue entries in declaration order.
    pub fn entries(&self) -> &'static [&'static str] {
        CATALOG
    }

    /// Whether `name` is a catalogue member (exact match).
    pub fn contains(&self, name: &str) -> bool {
        CATALOG.contains(&name)
    }

    /// Rank catalogue entries against a free-text query.
    ///
    /// An empty query returns the full catalogue in declaration order,
    /// not relevance order. Otherwise entries are returned best match
    /// first; entries the matcher rejects are excluded entirely, so a
    /// result list never contains low-confidence noise.
    pub fn search(&self, query: &str) -> Vec<&'static str> {
        if query.is_empty() {
            return CATALOG.to_vec();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, &'static str)> = CATALOG
            .iter()
            .filter_map(|name| matcher.fuzzy_match(name, query).map(|score| (score, *name)))
            .collect();

        // Stable sort keeps declaration order for equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, name)| name).collect()
    }
}
