pub mod cloud;
pub mod compose;
pub mod constants;
pub mod cycle;
pub mod easing;
pub mod feed;
pub mod input;
pub mod mesh;
pub mod particles;
pub mod projection;
pub mod scene;
pub mod sections;
pub mod theme;

pub use cloud::{CloudInstance, PointsUniforms, POINTS_WGSL};
pub use compose::{scroll_fade, Blend, DrawOp, Frame};
pub use cycle::{CycleClock, CyclePhase, CycleState};
pub use feed::{
    cards, grid_html, parse_feed, project_count, CardLimit, FeedError, Project, ProjectTag,
};
pub use input::{scroll_progress, FrameInput, Smoothed, SmoothedInput};
pub use particles::{build_field, FieldShape, Particle};
pub use projection::{depth_order, Projected, Projector, Viewport};
pub use scene::{Scene, SceneConfig, Variant};
pub use sections::{section_activity, SectionActivity, SectionRect};
pub use theme::{
    MemoryStore, Palette, PreferenceStore, Theme, ThemeController, THEME_STORAGE_KEY,
};
