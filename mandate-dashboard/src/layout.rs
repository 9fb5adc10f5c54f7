//! Tab and section tree.

use serde::Serialize;

/// Every renderable section, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    General,
    Nfp,
    Wages,
    Alternatives,
    InflationOverview,
    Cpi,
    Pce,
}

impl SectionId {
    pub const ALL: [Self; 7] = [
        Self::General,
        Self::Nfp,
        Self::Wages,
        Self::Alternatives,
        Self::InflationOverview,
        Self::Cpi,
        Self::Pce,
    ];

    /// Owning tab.
    #[must_use]
    pub const fn tab(self) -> Tab {
        match self {
            Self::General | Self::Nfp | Self::Wages | Self::Alternatives => Tab::Employment,
            Self::InflationOverview | Self::Cpi | Self::Pce => Tab::Inflation,
        }
    }

    /// URL segment within the tab.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Nfp => "nfp",
            Self::Wages => "wages",
            Self::Alternatives => "alternatives",
            Self::InflationOverview => "overview",
            Self::Cpi => "cpi",
            Self::Pce => "pce",
        }
    }

    /// Sub-tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Nfp => "NFP",
            Self::Wages => "Wages",
            Self::Alternatives => "Alternatives",
            Self::InflationOverview => "Overview",
            Self::Cpi => "CPI",
            Self::Pce => "PCE – SF FED",
        }
    }

    /// `tab/section` path used in URLs and section ids.
    #[must_use]
    pub fn path(self) -> String {
        format!("{}/{}", self.tab().slug(), self.slug())
    }

    /// Resolve a `tab`/`section` pair from a URL. Matching is case-insensitive.
    #[must_use]
    pub fn lookup(tab: &str, section: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| {
            s.tab().slug().eq_ignore_ascii_case(tab) && s.slug().eq_ignore_ascii_case(section)
        })
    }
}

/// First-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Employment,
    Inflation,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Employment, Self::Inflation];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Employment => "employment",
            Self::Inflation => "inflation",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Employment => "Employment",
            Self::Inflation => "Inflation",
        }
    }

    /// Sections shown under this tab, in order.
    pub fn sections(self) -> impl Iterator<Item = SectionId> {
        SectionId::ALL.into_iter().filter(move |s| s.tab() == self)
    }
}

/// Serializable tab tree for the page shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub path: String,
}

/// The whole navigation tree.
#[must_use]
pub fn tabs() -> Vec<TabEntry> {
    Tab::ALL
        .into_iter()
        .map(|t| TabEntry {
            id: t.slug(),
            title: t.title(),
            sections: t
                .sections()
                .map(|s| SectionEntry {
                    id: s.slug(),
                    title: s.title(),
                    path: s.path(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_matches_tab_order() {
        let tree = tabs();
        let titles: Vec<Vec<&str>> = tree
            .iter()
            .map(|t| t.sections.iter().map(|s| s.title).collect())
            .collect();
        assert_eq!(
            titles,
            vec![
                vec!["General", "NFP", "Wages", "Alternatives"],
                vec!["Overview", "CPI", "PCE – SF FED"],
            ]
        );
        assert_eq!(tree[1].sections[2].path, "inflation/pce");
    }

    #[test]
    fn lookup_is_case_insensitive_and_scoped_to_tab() {
        assert_eq!(SectionId::lookup("Employment", "NFP"), Some(SectionId::Nfp));
        assert_eq!(SectionId::lookup("inflation", "nfp"), None);
        assert_eq!(SectionId::lookup("inflation", "overview"), Some(SectionId::InflationOverview));
    }
}
