use leptos::prelude::*;

/// Top-level destinations reachable from the sidebar. A closed enum rather
/// than free-form paths: the shell is a single-page app without a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Courses,
    Playground,
    About,
}

impl Page {
    pub fn all() -> [Page; 4] {
        [Page::Dashboard, Page::Courses, Page::Playground, Page::About]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Courses => "Course Content",
            Page::Playground => "Playground",
            Page::About => "About",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::Dashboard => "grid",
            Page::Courses => "book",
            Page::Playground => "code",
            Page::About => "info",
        }
    }
}

/// Shell state shared through context: current page, sidebar visibility
/// and the notifications dropdown.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
    pub notifications_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::Dashboard),
            sidebar_open: RwSignal::new(true),
            notifications_open: RwSignal::new(false),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.current_page.set(page);
        self.notifications_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}
