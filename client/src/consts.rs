//! Shared timing and geometry constants for the site.

// ── Navigation ──────────────────────────────────────────────────

/// Scroll distance past which the nav bar switches to its frosted background.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// Look-ahead added to the scroll position when picking the active section.
pub const SECTION_SPY_OFFSET_PX: f64 = 120.0;

// ── Hero ────────────────────────────────────────────────────────

/// Fraction of the scroll distance the hero background layer travels.
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Viewports narrower than this skip the parallax effect.
pub const PARALLAX_MIN_WIDTH_PX: f64 = 768.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Intersection ratio at which a marked element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Class names that opt an element into reveal-on-scroll.
pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right";

/// Class added once an element has been revealed.
pub const REVEAL_VISIBLE_CLASS: &str = "visible";

// ── Loading gate ────────────────────────────────────────────────

/// Delay before the splash starts fading out.
pub const LOADING_FADE_DELAY_MS: u32 = 1600;

/// Delay before the splash is removed from the tree.
pub const LOADING_UNMOUNT_DELAY_MS: u32 = 2100;

/// Splash lifetime when the user prefers reduced motion.
pub const LOADING_REDUCED_MOTION_MS: u32 = 300;

// ── Contact ─────────────────────────────────────────────────────

/// Latency of the simulated contact submission.
pub const CONTACT_SIMULATED_LATENCY_MS: u32 = 1200;

/// Endpoint used when the `contact-endpoint` feature is enabled.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

// ── Media queries ───────────────────────────────────────────────

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const PREFERS_REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
