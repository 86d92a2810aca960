use std::fmt;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Edge-based rectangle, `right`/`bottom` exclusive like a Win32 `RECT`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    pub fn same_size(&self, other: &Rect) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({}x{})",
            self.left,
            self.top,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_offset() {
        let rect = Rect::new(100, 50, 900, 650);
        assert_eq!(rect.width(), 800);
        assert_eq!(rect.height(), 600);

        let moved = rect.offset(-20, 40);
        assert_eq!(moved, Rect::new(80, 90, 880, 690));
        assert!(moved.same_size(&rect));
        assert!(!moved.same_size(&Rect::new(0, 0, 800, 599)));
    }

    #[test]
    fn display_shows_origin_and_size() {
        let rect = Rect::new(-1920, 0, 0, 1080);
        assert_eq!(rect.to_string(), "-1920, 0 (1920x1080)");
    }
}
