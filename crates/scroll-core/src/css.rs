// Inline style values written by the web front-end.

#[inline]
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Body height that gives the native scrollbar the content's full range.
pub fn body_height(content_height: f64) -> String {
    px(content_height.max(0.0))
}
