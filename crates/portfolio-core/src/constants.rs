// Animation tuning shared by every scene variant.

// Particle field
pub const GOLDEN_ANGLE: f32 = 2.399963;
pub const SPHERE_RADIUS: f32 = 0.8;
pub const SPHERE_DEFORM: f32 = 0.06; // amplitude of the low-frequency radius wobble
pub const SHELL_RADIUS_MIN: f32 = 0.6;
pub const SHELL_RADIUS_MAX: f32 = 1.0;
pub const PARTICLE_SIZE_MIN: f32 = 0.8;
pub const PARTICLE_SIZE_SPAN: f32 = 1.6;

// Point cloud grid
pub const GRID_COLUMNS: usize = 175;
pub const GRID_SPACING: f32 = 0.23;
pub const GRID_OFFSET: f32 = -20.0;

// Input smoothing (per frame, not per second)
pub const MOUSE_SMOOTHING: f32 = 0.05;
pub const SCROLL_SMOOTHING: f32 = 0.03;
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Projection
pub const FOCAL_LENGTH: f32 = 2.5;
pub const VIEW_RADIUS_FRACTION: f32 = 0.38; // of min(width, height)
pub const DEPTH_RANGE: f32 = 1.2;
pub const DEPTH_ALPHA_MIN: f32 = 0.3;

// Motion
pub const ORBIT_SPEED: f32 = 0.12; // rad/s about the vertical axis
pub const BREATH_AMPLITUDE: f32 = 0.04;
pub const BREATH_RATE: f32 = 0.8;
pub const WAVE_AMPLITUDE: f32 = 0.025;
pub const WAVE_RATE: f32 = 1.5;
pub const SPIN_RATE_Y: f32 = 0.15;
pub const TILT_RATE_X: f32 = 0.1;
pub const TILT_AMPLITUDE_X: f32 = 0.2;
pub const MOUSE_YAW: f32 = 0.6;
pub const MOUSE_PITCH: f32 = 0.35;

// Mouse repulsion in screen space
pub const REPULSION_RADIUS_PX: f32 = 140.0;
pub const REPULSION_STRENGTH_PX: f32 = 36.0;
pub const REPULSION_EASE: f32 = 0.12;

// Reconstruction cycle (seconds)
pub const CYCLE_PERIOD_SEC: f32 = 14.0;
pub const ACQUIRE_END_SEC: f32 = 3.5;
pub const RECONSTRUCT_END_SEC: f32 = 8.0;
pub const HOLD_END_SEC: f32 = 11.0;
pub const SCATTER_RADIUS: f32 = 1.6;
pub const MESH_FADE_FLOOR: f32 = 0.55; // particle alpha once the mesh fully covers it
pub const TRIANGLE_STAGGER: f32 = 0.6;

// Mesh construction
pub const MESH_NEIGHBORS: usize = 2;
pub const MESH_MAX_EDGE: f32 = 0.45;
pub const MESH_BRUTE_FORCE_MAX: usize = 600;

// Draw sizes (pixels)
pub const CORE_RADIUS_PX: f32 = 1.4;
pub const GLOW_RADIUS_SCALE: f32 = 4.0;

// Point cloud (GPU variant and its CPU mirror)
pub const CLOUD_POINT_COUNT: usize = 30_000;
pub const CLOUD_CANVAS_POINT_COUNT: usize = 6_000;
pub const CLOUD_CAMERA_Z: f32 = 15.0;
pub const CLOUD_FOV_Y_DEG: f32 = 75.0;
pub const CLOUD_MOUSE_SPAN: f32 = 20.0;
pub const CLOUD_INFLUENCE_RADIUS: f32 = 8.0;
pub const CLOUD_INFLUENCE_LIFT: f32 = 2.0;
pub const CLOUD_WAVE_FREQ: f32 = 0.15;
pub const CLOUD_WAVE_AMPLITUDE: f32 = 0.4;
pub const CLOUD_POINT_SCALE_PX: f32 = 15.0;

// Page
pub const MAX_FEATURED_CARDS: usize = 6;
pub const SECTION_REVEAL_FRACTION: f64 = 0.6;
