// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const HOVER_TICK_INCREMENT: f32 = 0.1;
pub const SPINNER_TICK_INCREMENT: f32 = 0.016;
/// Longest frame gap fed to the effects, so a stalled window does not
/// teleport the particles when it wakes up.
pub const MAX_FRAME_MS: u64 = 100;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.03;
pub const SPRING_DAMPING: f32 = 0.80;
pub const SPRING_THRESHOLD: f32 = 0.001;

// Scroll progress bar
pub const PROGRESS_STIFFNESS: f32 = 0.12;
pub const PROGRESS_DAMPING: f32 = 0.70;
pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;

// Splash screen
pub const SPLASH_DURATION_MS: u64 = 1000;
pub const SPLASH_SPINNER_SIZE: f32 = 28.0;

// Header
pub const HEADER_SCROLL_THRESHOLD: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 64.0;

// UI Dimensions
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 820.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
pub const HERO_HEIGHT: f32 = 560.0;
pub const INPUT_BORDER_RADIUS: f32 = 10.0;
pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const PROJECT_CARD_WIDTH: f32 = 340.0;
pub const PROJECT_CARD_HEIGHT: f32 = 300.0;

// Toasts
pub const TOAST_DURATION_MS: u64 = 4000;
