use alien_invasion::game::fleet::{columns, layout, rows};

#[test]
fn column_count_follows_margin_formula() {
    // floor((1200 - 200) / 40)
    assert_eq!(columns(1200, 20), 25);
    assert_eq!(columns(400, 8), 20);
}

#[test]
fn row_count_leaves_room_for_the_ship() {
    // floor((800 - 200 - 30) / 40)
    assert_eq!(rows(800, 30, 20), 14);
    assert_eq!(rows(200, 6, 6), 11);
}

#[test]
fn too_small_screens_give_no_aliens() {
    assert_eq!(columns(60, 8), 0);
    assert_eq!(rows(40, 6, 6), 0);
    assert!(layout(60, 40, 6, (8, 6)).is_empty());
    assert!(layout(400, 200, 6, (0, 6)).is_empty());
}

#[test]
fn layout_is_row_major_on_a_two_size_grid() {
    // 3 columns x 2 rows of 8x6 aliens.
    let positions = layout(128, 90, 6, (8, 6));
    assert_eq!(
        positions,
        vec![
            (8, 6),
            (24, 6),
            (40, 6),
            (8, 18),
            (24, 18),
            (40, 18),
        ]
    );
}
