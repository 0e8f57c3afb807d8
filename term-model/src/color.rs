//! Terminal color representation.

/// A cell foreground/background color as reported by the terminal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    /// Default foreground/background (not set explicitly).
    Default,
    /// Named ANSI color (0-15).
    Named(u8),
    /// 256-color palette index.
    Indexed(u8),
    /// True color RGB.
    Rgb(u8, u8, u8),
}

impl Default for CellColor {
    fn default() -> Self {
        CellColor::Default
    }
}

impl CellColor {
    /// Convert to RGBA bytes, resolving `Default` against the supplied
    /// default foreground/background.
    pub fn resolve(&self, default: [u8; 4]) -> [u8; 4] {
        match self {
            CellColor::Default => default,
            CellColor::Named(n) | CellColor::Indexed(n) => ansi_to_rgba(*n),
            CellColor::Rgb(r, g, b) => [*r, *g, *b, 255],
        }
    }
}

/// Convert an ANSI color index (0-255) to RGBA bytes.
fn ansi_to_rgba(index: u8) -> [u8; 4] {
    let (r, g, b) = match index {
        0 => (0, 0, 0),
        1 => (205, 49, 49),
        2 => (13, 188, 121),
        3 => (229, 229, 16),
        4 => (36, 114, 200),
        5 => (188, 63, 188),
        6 => (17, 168, 205),
        7 => (229, 229, 229),
        8 => (102, 102, 102),
        9 => (241, 76, 76),
        10 => (35, 209, 139),
        11 => (245, 245, 67),
        12 => (59, 142, 234),
        13 => (214, 112, 214),
        14 => (41, 184, 219),
        15 => (255, 255, 255),
        16..=231 => {
            let n = index - 16;
            let r = (n / 36) % 6;
            let g = (n / 6) % 6;
            let b = n % 6;
            let to_val = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (to_val(r), to_val(g), to_val(b))
        }
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            (gray, gray, gray)
        }
    };
    [r, g, b, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resolves_to_supplied_default() {
        let c = CellColor::Default;
        assert_eq!(c.resolve([1, 2, 3, 4]), [1, 2, 3, 4]);
    }

    #[test]
    fn rgb_passes_through() {
        let c = CellColor::Rgb(10, 20, 30);
        assert_eq!(c.resolve([0, 0, 0, 0]), [10, 20, 30, 255]);
    }

    #[test]
    fn named_black_and_white() {
        assert_eq!(CellColor::Named(0).resolve([9, 9, 9, 9]), [0, 0, 0, 255]);
        assert_eq!(CellColor::Named(15).resolve([9, 9, 9, 9]), [255, 255, 255, 255]);
    }
}
