// Page markup contract and timing constants for the web frontend.
// Element ids and class names are fixed by the page template.

// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADER_ID: &str = "loader";
pub const HERO_ID: &str = "hero";
pub const PROJECTS_GRID_ID: &str = "projectsGrid";
pub const PROJECT_COUNT_ID: &str = "projectCount";
pub const THEME_TOGGLE_ID: &str = "themeToggle";

// Selectors and attributes
pub const SECTION_SELECTOR: &str = "section";
pub const NAV_DOT_SELECTOR: &str = ".nav-dot";
pub const NAV_TARGET_ATTR: &str = "data-section";
pub const THEME_ATTR: &str = "data-theme";
pub const RENDERER_ATTR: &str = "data-renderer";
pub const VARIANT_ATTR: &str = "data-variant";
pub const CARD_LIMIT_ATTR: &str = "data-limit";

// State classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_ACTIVE: &str = "active";

// Feed
pub const PROJECTS_URL: &str = "projects.json";

// Timing
pub const LOADER_DELAY_MS: i32 = 800;

// Canvas backing store never exceeds this many device pixels per CSS pixel.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
