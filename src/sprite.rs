use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

const ASSET_DIR: &str = "assets";
pub const ALIEN_ASSET: &str = "alien.txt";

/// A monochrome bitmap, one `bool` per screen dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    width: i32,
    height: i32,
    pixels: Vec<Vec<bool>>,
}

impl Sprite {
    /// Parse the text bitmap format: one row per line, `#` for a set dot and
    /// `.` for a clear one. Blank lines are skipped.
    pub fn parse(source: &str) -> io::Result<Self> {
        let mut pixels: Vec<Vec<bool>> = Vec::new();
        for (lineno, line) in source.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                match ch {
                    '#' => row.push(true),
                    '.' => row.push(false),
                    other => {
                        return Err(invalid(format!(
                            "unexpected character {:?} on line {}",
                            other,
                            lineno + 1
                        )))
                    }
                }
            }
            if let Some(first) = pixels.first() {
                if first.len() != row.len() {
                    return Err(invalid(format!(
                        "line {} is {} dots wide, expected {}",
                        lineno + 1,
                        row.len(),
                        first.len()
                    )));
                }
            }
            pixels.push(row);
        }
        if pixels.is_empty() {
            return Err(invalid("sprite has no rows".to_string()));
        }
        Ok(Self::from_rows(pixels))
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot read {}: {}", path.display(), e))
        })?;
        let sprite = Self::parse(&source).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })?;
        info!(
            "Loaded sprite {} ({}x{} dots)",
            path.display(),
            sprite.width,
            sprite.height
        );
        Ok(sprite)
    }

    /// Locate an asset: the working directory first, then next to the
    /// executable. Falls back to the working-directory path so the load
    /// error names a sensible location.
    pub fn asset_path(name: &str) -> PathBuf {
        let local = PathBuf::from(ASSET_DIR).join(name);
        if local.exists() {
            return local;
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let beside = dir.join(ASSET_DIR).join(name);
                if beside.exists() {
                    return beside;
                }
            }
        }
        local
    }

    /// The built-in player ship.
    pub fn ship() -> Self {
        const SHIP: [&str; 6] = [
            "....#....",
            "...###...",
            "...###...",
            ".#######.",
            "#########",
            "##.###.##",
        ];
        Self::from_rows(
            SHIP.iter()
                .map(|row| row.chars().map(|c| c == '#').collect())
                .collect(),
        )
    }

    fn from_rows(pixels: Vec<Vec<bool>>) -> Self {
        let height = pixels.len() as i32;
        let width = pixels.first().map_or(0, |r| r.len()) as i32;
        Self { width, height, pixels }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Offsets of every set dot, relative to the sprite's top-left corner.
    pub fn dots(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.pixels.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, set)| **set)
                .map(move |(x, _)| (x as i32, y as i32))
        })
    }
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}
