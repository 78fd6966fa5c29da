//! Copy shown on each carousel page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const PAGES: [PageContent; 3] = [
    PageContent {
        title: "Capture tasks quickly",
        subtitle: "Add todos in seconds and keep your day organized. Fast entry, smart defaults.",
    },
    PageContent {
        title: "Organize & prioritize",
        subtitle: "Group tasks, set priorities and deadlines so you focus on what matters.",
    },
    PageContent {
        title: "Track progress",
        subtitle: "See completed tasks and progress stats. \
                   Sync across devices and stay in control.",
    },
];

/// Which control a page shows below its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Arrow,
    GetStarted,
}

pub fn control_for(page: usize, page_count: usize) -> PageControl {
    if page + 1 >= page_count {
        PageControl::GetStarted
    } else {
        PageControl::Arrow
    }
}

pub fn content(page: usize) -> Option<&'static PageContent> {
    PAGES.get(page)
}
