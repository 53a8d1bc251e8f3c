/// Axis-aligned rectangle in screen dots.
///
/// `x`/`y` is the top-left corner; `right()` and `bottom()` are exclusive,
/// so a rect at x=0 with width 8 covers dots 0..8.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn centerx(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn centery(&self) -> i32 {
        self.y + self.height / 2
    }

    pub fn midtop(&self) -> (i32, i32) {
        (self.centerx(), self.y)
    }

    pub fn midbottom(&self) -> (i32, i32) {
        (self.centerx(), self.bottom())
    }

    pub fn center(&self) -> (i32, i32) {
        (self.centerx(), self.centery())
    }

    pub fn set_midtop(&mut self, (cx, top): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = top;
    }

    pub fn set_midbottom(&mut self, (cx, bottom): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = bottom - self.height;
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }

    /// True when the two rects share at least one dot. Touching edges and
    /// empty rects never collide.
    pub fn collides_with(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}
