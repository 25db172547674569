// Frontend wiring constants: element hooks and draw styling.

pub const CANVAS_ID: &str = "particle-canvas";
pub const CONTAINER_ID: &str = "container";
pub const TITLE_SELECTOR: &str = ".project-title";
pub const TITLE_TEXT_ATTR: &str = "data-text";
pub const TRANSITION_CLASS: &str = "slide-out";

// Delay between the click explosion and the page transition (ms)
pub const TRANSITION_DELAY_MS: i32 = 300;

pub const PARTICLE_FILL: &str = "rgba(255, 255, 255, 0.8)";
pub const GLYPH_FILL: &str = "white";
pub const GLYPH_FONT_FAMILY: &str = "Verdana";
