//! Portfolio projects and their technology stacks.

use serde::{Deserialize, Serialize};

/// A technology stack entry attached to a project.
///
/// Entries are normally drawn from [`TECH_CATALOG`], but custom entries are
/// not rejected server-side (policy decision: the catalog drives the picker
/// UI, not validation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    /// Path to the icon asset.
    pub logo: String,
    /// Reference URL for the technology.
    pub link: String,
}

/// A portfolio project as persisted on the user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Store-assigned identifier. `None` until the record has been saved;
    /// client-supplied values are never trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub stack: Vec<Technology>,

    /// Project logo URL; only set through an independent upload path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Fixed catalog entry backing the stack picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub logo: &'static str,
    pub link: &'static str,
}

impl CatalogEntry {
    pub fn to_technology(&self) -> Technology {
        Technology {
            name: self.name.to_string(),
            logo: self.logo.to_string(),
            link: self.link.to_string(),
        }
    }
}

/// The fixed technology catalog.
pub const TECH_CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "React",
        logo: "/icons/react.svg",
        link: "https://react.dev",
    },
    CatalogEntry {
        name: "Next.js",
        logo: "/icons/nextjs.svg",
        link: "https://nextjs.org",
    },
    CatalogEntry {
        name: "Vue",
        logo: "/icons/vue.svg",
        link: "https://vuejs.org",
    },
    CatalogEntry {
        name: "Svelte",
        logo: "/icons/svelte.svg",
        link: "https://svelte.dev",
    },
    CatalogEntry {
        name: "Node.js",
        logo: "/icons/nodejs.svg",
        link: "https://nodejs.org",
    },
    CatalogEntry {
        name: "TypeScript",
        logo: "/icons/typescript.svg",
        link: "https://www.typescriptlang.org",
    },
    CatalogEntry {
        name: "Rust",
        logo: "/icons/rust.svg",
        link: "https://www.rust-lang.org",
    },
    CatalogEntry {
        name: "Tailwind CSS",
        logo: "/icons/tailwind.svg",
        link: "https://tailwindcss.com",
    },
    CatalogEntry {
        name: "PostgreSQL",
        logo: "/icons/postgresql.svg",
        link: "https://www.postgresql.org",
    },
    CatalogEntry {
        name: "MongoDB",
        logo: "/icons/mongodb.svg",
        link: "https://www.mongodb.com",
    },
];

/// Look up a catalog entry by its display name.
pub fn catalog_entry(name: &str) -> Option<&'static CatalogEntry> {
    TECH_CATALOG.iter().find(|entry| entry.name == name)
}
