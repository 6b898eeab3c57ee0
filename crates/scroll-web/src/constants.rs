// DOM contract and listener names for the web front-end.
// Kept free of `web_sys` so host-side tests can include this file directly.

// Anchors: exactly one viewport and one content element, any number of layers
pub const SCROLL_VIEWPORT_SELECTOR: &str = "[data-scroll]";
pub const SCROLL_CONTENT_SELECTOR: &str = "[data-scroll-content]";
pub const PARALLAX_SELECTOR: &str = ".parallax";

// Optional per-page ease override, read from the viewport element
pub const SCROLL_EASE_ATTR: &str = "data-scroll-ease";

// Window events
pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";
pub const LOAD_EVENT: &str = "load";

// Inline styles
pub const TRANSFORM_PROPERTY: &str = "transform";
pub const BACKGROUND_Y_PROPERTY: &str = "background-position-y";
pub const HEIGHT_PROPERTY: &str = "height";

// Pins the viewport so the content can be moved by transform alone
pub const VIEWPORT_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("height", "100%"),
    ("width", "100%"),
    ("overflow", "hidden"),
];
