use blog_core::domain::{PageEntry, Pager};

/// One page selector slot. Ellipses have no link.
#[derive(Clone)]
pub struct PageLinkView {
    pub label: String,
    pub href: String,
    pub is_active: bool,
    pub is_ellipsis: bool,
}

/// Previous or next control.
#[derive(Clone)]
pub struct StepLinkView {
    pub href: String,
    pub disabled: bool,
}

#[derive(Clone)]
pub struct PaginationView {
    pub previous: StepLinkView,
    pub next: StepLinkView,
    pub pages: Vec<PageLinkView>,
}

fn page_href(page: u64) -> String {
    format!("?page={page}")
}

impl From<&Pager> for PaginationView {
    fn from(pager: &Pager) -> Self {
        let pages = pager
            .entries()
            .into_iter()
            .map(|entry| match entry {
                PageEntry::Page(page) => PageLinkView {
                    label: page.to_string(),
                    href: page_href(page),
                    is_active: pager.is_active(page),
                    is_ellipsis: false,
                },
                PageEntry::Ellipsis => PageLinkView {
                    label: "…".to_string(),
                    href: String::new(),
                    is_active: false,
                    is_ellipsis: true,
                },
            })
            .collect();

        Self {
            previous: StepLinkView {
                href: page_href(pager.current.saturating_sub(1)),
                disabled: !pager.has_previous(),
            },
            next: StepLinkView {
                href: page_href(pager.current.saturating_add(1)),
                disabled: !pager.has_next(),
            },
            pages,
        }
    }
}
