// Shared tuning constants for the parallax controller and its hosts.

// Angles
pub const HALF_TURN_DEG: f32 = 180.0; // yaw readings live in (-180, 180]
pub const FULL_TURN_DEG: f32 = 360.0;

// Default edge constraints (screen-space X of the layer anchors)
pub const DEFAULT_MIN_X: f32 = -1.0;
pub const DEFAULT_MAX_X: f32 = 1.0;

// Motion
pub const DEFAULT_SMOOTHING_FACTOR: f32 = 0.1; // fraction of the remaining gap closed per tick
pub const DEFAULT_SPEED_MULTIPLIER: f32 = 1.0;
pub const SPEED_MULTIPLIER_UI_MIN: f32 = 0.1; // slider bounds exposed to authoring tools
pub const SPEED_MULTIPLIER_UI_MAX: f32 = 5.0;
pub const DEFAULT_WRAP_AROUND: bool = true;

// Depth factor used for every layer while test mode is on
pub const TEST_MODE_DEPTH_FACTOR: f32 = 1.0;

// Status text shown by hosts with a text display
pub const STATUS_PARALLAX_ON: &str = "Parallax On";
pub const STATUS_PARALLAX_OFF: &str = "Parallax Off";
