/// Position within a fixed list of images. Navigation wraps around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Start at `index`, or at the first image when it is out of range.
    pub fn at(len: usize, index: usize) -> Self {
        let mut gallery = Self::new(len);
        gallery.jump(index);
        gallery
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Arrows and thumbnails are only useful with more than one image.
    pub fn navigable(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
        }
        self.index
    }

    /// Thumbnail click. Out-of-range indices are ignored.
    pub fn jump(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }

    pub fn next_index(&self) -> usize {
        let mut g = *self;
        g.next()
    }

    pub fn previous_index(&self) -> usize {
        let mut g = *self;
        g.previous()
    }

    /// "2 / 3" style badge.
    pub fn badge(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{} / {}", self.index + 1, self.len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_wraps_to_last() {
        let mut g = Gallery::new(3);
        assert_eq!(g.previous(), 2);
    }

    #[test]
    fn next_wraps_to_first() {
        let mut g = Gallery::at(3, 2);
        assert_eq!(g.next(), 0);
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut g = Gallery::new(4);
        for _ in 0..4 {
            g.next();
        }
        assert_eq!(g.index(), 0);
        for _ in 0..4 {
            g.previous();
        }
        assert_eq!(g.index(), 0);
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut g = Gallery::new(3);
        assert_eq!(g.jump(1), 1);
        assert_eq!(g.jump(7), 1);
        assert_eq!(Gallery::at(3, 9).index(), 0);
    }

    #[test]
    fn empty_gallery_stays_put() {
        let mut g = Gallery::new(0);
        assert_eq!(g.next(), 0);
        assert_eq!(g.previous(), 0);
        assert_eq!(g.badge(), "");
        assert!(!g.navigable());
    }

    #[test]
    fn peeking_does_not_move() {
        let g = Gallery::at(3, 1);
        assert_eq!((g.previous_index(), g.next_index()), (0, 2));
        assert_eq!(g.index(), 1);
        assert_eq!(g.badge(), "2 / 3");
    }
}
