//! Texture tiling along a ribbon.

/// A stretch of ribbon that stays inside one texture tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvPiece {
    /// Distance from the start of the run.
    pub start: f32,
    pub end: f32,
    /// Horizontal texture fraction at `start` and `end`.
    pub u0: f32,
    pub u1: f32,
}

impl UvPiece {
    /// Texture fraction at run distance `s`.
    pub fn u_at(&self, s: f32) -> f32 {
        let span = self.end - self.start;
        if span <= f32::EPSILON {
            return self.u0;
        }
        self.u0 + (self.u1 - self.u0) * ((s - self.start) / span)
    }
}

/// Carries the fractional texture position from one run to the next so
/// consecutive segments and joins continue the same tile.
#[derive(Debug, Clone)]
pub struct UvCursor {
    frac: f32,
    tile: f32,
    max_stretch: f32,
}

impl UvCursor {
    /// `tile` is the world length of one texture repeat.
    pub fn new(tile: f32, max_stretch: f32) -> Self {
        Self {
            frac: 0.0,
            tile: tile.abs().max(f32::EPSILON),
            max_stretch: max_stretch.max(0.0),
        }
    }

    pub fn frac(&self) -> f32 {
        self.frac
    }

    pub fn set_tile(&mut self, tile: f32) {
        self.tile = tile.abs().max(f32::EPSILON);
    }

    /// Splits a run of `length` at tile boundaries.
    ///
    /// When the run would end less than `max_stretch` past a boundary, the
    /// last full tile is stretched over the remainder instead.
    pub fn advance(&mut self, length: f32) -> Vec<UvPiece> {
        let mut pieces = Vec::new();
        if !(length > 0.0) {
            return pieces;
        }
        let tolerance = self.tile * 1e-5;
        let mut pos = 0.0;
        loop {
            let room = (1.0 - self.frac) * self.tile;
            let remaining = length - pos;
            if remaining <= room + tolerance {
                let u1 = (self.frac + remaining / self.tile).min(1.0);
                pieces.push(UvPiece {
                    start: pos,
                    end: length,
                    u0: self.frac,
                    u1,
                });
                self.frac = if u1 >= 1.0 - 1e-5 { 0.0 } else { u1 };
                return pieces;
            }
            if remaining - room <= self.max_stretch {
                pieces.push(UvPiece {
                    start: pos,
                    end: length,
                    u0: self.frac,
                    u1: 1.0,
                });
                self.frac = 0.0;
                return pieces;
            }
            pieces.push(UvPiece {
                start: pos,
                end: pos + room,
                u0: self.frac,
                u1: 1.0,
            });
            pos += room;
            self.frac = 0.0;
        }
    }

    /// One piece covering the whole run and the whole texture.
    pub fn whole(&mut self, length: f32) -> Vec<UvPiece> {
        self.frac = 0.0;
        if !(length > 0.0) {
            return Vec::new();
        }
        vec![UvPiece {
            start: 0.0,
            end: length,
            u0: 0.0,
            u1: 1.0,
        }]
    }
}
