/// Grid positions for a fresh fleet.
///
/// Leaves roughly five alien-widths of margin on each side, five
/// alien-heights at the top, and the ship's height at the bottom. Screens too
/// small for a single row or column give an empty fleet.
pub fn layout(
    screen_width: i32,
    screen_height: i32,
    ship_height: i32,
    (alien_width, alien_height): (i32, i32),
) -> Vec<(i32, i32)> {
    if alien_width <= 0 || alien_height <= 0 {
        return Vec::new();
    }
    let columns = columns(screen_width, alien_width);
    let rows = rows(screen_height, ship_height, alien_height);

    let mut positions = Vec::with_capacity((columns * rows).max(0) as usize);
    for row in 0..rows {
        for col in 0..columns {
            positions.push((
                alien_width + 2 * alien_width * col,
                alien_height + 2 * alien_height * row,
            ));
        }
    }
    positions
}

/// floor((screen_width - 10w) / 2w), never negative.
pub fn columns(screen_width: i32, alien_width: i32) -> i32 {
    if alien_width <= 0 {
        return 0;
    }
    let available = screen_width - 10 * alien_width;
    available.div_euclid(2 * alien_width).max(0)
}

/// floor((screen_height - 10h - ship_height) / 2h), never negative.
pub fn rows(screen_height: i32, ship_height: i32, alien_height: i32) -> i32 {
    if alien_height <= 0 {
        return 0;
    }
    let available = screen_height - 10 * alien_height - ship_height;
    available.div_euclid(2 * alien_height).max(0)
}
