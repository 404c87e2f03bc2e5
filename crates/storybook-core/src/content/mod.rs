//! Static story content.

mod story;

pub use story::STILL_CHOOSE_YOU;

/// One unit of story content.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page<'a> {
    pub content: &'a str,
    pub title: Option<&'a str>,
    /// Marks the page that closes the story.
    pub is_last_page: bool,
}

impl<'a> Page<'a> {
    pub const fn new(content: &'a str) -> Self {
        Self {
            content,
            title: None,
            is_last_page: false,
        }
    }

    pub const fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub const fn last(mut self) -> Self {
        self.is_last_page = true;
        self
    }
}

/// Read-only, index-addressed page sequence.
pub trait PageSource {
    fn page_count(&self) -> u16;

    /// Page at `index`, or `None` when the index is past the end.
    fn page_at(&self, index: u16) -> Option<Page<'_>>;

    fn title(&self) -> &str {
        ""
    }

    fn byline(&self) -> &str {
        ""
    }
}

/// A story fixed at build time.
#[derive(Clone, Copy, Debug)]
pub struct Story<'a> {
    pub title: &'a str,
    pub byline: &'a str,
    pub pages: &'a [Page<'a>],
}

impl<'a> Story<'a> {
    pub const fn new(title: &'a str, byline: &'a str, pages: &'a [Page<'a>]) -> Self {
        Self {
            title,
            byline,
            pages,
        }
    }
}

impl PageSource for Story<'_> {
    fn page_count(&self) -> u16 {
        self.pages.len().min(u16::MAX as usize) as u16
    }

    fn page_at(&self, index: u16) -> Option<Page<'_>> {
        self.pages.get(index as usize).copied()
    }

    fn title(&self) -> &str {
        self.title
    }

    fn byline(&self) -> &str {
        self.byline
    }
}
