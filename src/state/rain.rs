#[cfg(test)]
#[path = "rain_test.rs"]
mod rain_test;

/// Chance per frame that a drop past the bottom edge restarts at the top.
const RESET_CHANCE: f64 = 0.025;

#[derive(Clone, Debug, PartialEq)]
pub struct RainConfig {
    pub font_size: f64,
    pub characters: &'static str,
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// One falling drop per column, positions in rows.
#[derive(Clone, Debug, PartialEq)]
pub struct RainField {
    config: RainConfig,
    height: f64,
    drops: Vec<f64>,
}

impl RainField {
    pub fn new(config: RainConfig, width: f64, height: f64) -> Self {
        let mut field = Self {
            config,
            height: 0.0,
            drops: Vec::new(),
        };
        field.resize(width, height);
        field
    }

    /// Keeps existing drops, adds or drops columns to fit `width`.
    pub fn resize(&mut self, width: f64, height: f64) {
        let columns = if self.config.font_size > 0.0 {
            (width.max(0.0) / self.config.font_size).floor() as usize
        } else {
            0
        };
        self.drops.resize(columns, 1.0);
        self.height = height.max(0.0);
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    pub fn drops(&self) -> &[f64] {
        &self.drops
    }

    /// Advances every drop one frame and returns the glyphs to draw.
    /// `random` yields values in `[0, 1)`.
    pub fn step(&mut self, mut random: impl FnMut() -> f64) -> Vec<Glyph> {
        let charset: Vec<char> = self.config.characters.chars().collect();
        let size = self.config.font_size;
        let mut glyphs = Vec::with_capacity(self.drops.len());

        for (column, drop) in self.drops.iter_mut().enumerate() {
            if !charset.is_empty() {
                let pick = ((random() * charset.len() as f64) as usize).min(charset.len() - 1);
                glyphs.push(Glyph {
                    ch: charset[pick],
                    x: column as f64 * size,
                    y: *drop * size,
                });
            }

            if *drop * size > self.height && random() > 1.0 - RESET_CHANCE {
                *drop = 0.0;
            }
            *drop += self.config.speed;
        }
        glyphs
    }
}
