// Site-wide constants. Everything fixed but user-visible lives here.

pub const CONTACT_EMAIL: &str = "hello@aurumstudio.dev";
pub const CONTACT_PHONE: &str = "+358401234567";

/// Scroll distance in px after which the hero is considered fully collapsed.
pub const SCROLL_THRESHOLD_PX: f64 = 200.0;

/// Artificial delay before the mailto handoff, so the "sending" state is visible.
pub const SUBMIT_DELAY_MS: u32 = 400;

/// Hero phrase rotation: how long a phrase stays fully visible, and how long
/// the cross-fade takes. Together they make up one 4s cycle.
pub const PHRASE_HOLD_MS: u32 = 3_400;
pub const PHRASE_FADE_MS: u32 = 600;
