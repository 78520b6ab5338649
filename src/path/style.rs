/// How the path builder draws its lines.
///
/// Changes apply to lines drawn afterwards; lines already on the renderer keep
/// the style they were drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStyle {
    /// Colour of the segments between consecutive points.
    pub path_color: String,
    /// Colour of the first-point cross and of the closing segment.
    pub virtual_color: String,
    /// Z-order passed to the renderer for every path line.
    pub z_order: i32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            path_color: "Chartreuse".to_owned(),
            virtual_color: "Red".to_owned(),
            z_order: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = PathStyle::default();
        assert_eq!(style.path_color, "Chartreuse");
        assert_eq!(style.virtual_color, "Red");
        assert_eq!(style.z_order, 1000);
    }
}
