//! Display surface capabilities
//!
//! Routes never touch the DOM directly. They render into a [`DisplaySurface`],
//! and anything they keep hold of after rendering (the animation demo's
//! paragraph) is a [`StyleTarget`] handle returned by the surface.

use crate::Result;

/// The region of the page a route renders into.
pub trait DisplaySurface {
    /// Replace everything in the surface with `markup`.
    fn set_content(&mut self, markup: &str) -> Result<()>;

    /// Remove all children.
    fn clear(&mut self) -> Result<()> {
        self.set_content("")
    }

    /// Append a new `tag` element holding `text` and return a handle to it.
    fn append_element(&mut self, tag: &str, text: &str) -> Result<Box<dyn StyleTarget>>;
}

/// An element whose inline style can be changed after rendering.
pub trait StyleTarget {
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Format a CSS pixel length.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(10.0), "10px");
        assert_eq!(px(105.5), "105.5px");
    }
}
