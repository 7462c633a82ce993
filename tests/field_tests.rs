use tui_blocks::core::{Field, Grid};

/// Build a field from `#`/`.` rows.
fn field(rows: &[&str]) -> Field {
    let mut f = Field::new(rows[0].len(), rows.len());
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                f.set(x as i32, y as i32);
            }
        }
    }
    f
}

fn rows_of(f: &Field) -> Vec<String> {
    f.grid().to_string().lines().map(String::from).collect()
}

#[test]
fn test_single_full_row_burns_to_empty_field() {
    let mut f = Field::default();
    for x in 0..10 {
        f.set(x, 19);
    }

    assert_eq!(f.update_rows(), 1);
    assert_eq!(f.grid().count(), 0);
}

#[test]
fn test_burn_shifts_rows_above_down_by_one() {
    let mut f = field(&["#...", ".#..", "####", "..#.", "...#"]);

    assert_eq!(f.update_rows(), 1);
    assert_eq!(rows_of(&f), vec!["....", "#...", ".#..", "..#.", "...#"]);
}

#[test]
fn test_adjacent_and_separated_full_rows_all_burn() {
    let mut f = field(&["#...", "####", ".#..", "####", "####"]);

    assert_eq!(f.update_rows(), 3);
    assert_eq!(rows_of(&f), vec!["....", "....", "....", "#...", ".#.."]);
}

#[test]
fn test_update_rows_is_idempotent() {
    let mut f = field(&["##..", "####", "#.##", "####"]);

    assert_eq!(f.update_rows(), 2);
    let once = f.clone();
    assert_eq!(f.update_rows(), 0);
    assert_eq!(f, once);
}

#[test]
fn test_no_full_row_leaves_field_untouched() {
    let mut f = field(&["###.", ".###"]);
    let before = f.clone();
    assert_eq!(f.update_rows(), 0);
    assert_eq!(f, before);
}

#[test]
fn test_merge_sets_exactly_the_layout_cells() {
    let mut f = Field::default();
    let layout = Grid::from_rows(&[[false, true, false], [true, true, true]]).unwrap();
    f.merge(&layout, 3, 7);

    assert_eq!(f.grid().count(), 4);
    assert!(f.is_occupied(4, 7));
    assert!(f.is_occupied(3, 8));
    assert!(f.is_occupied(5, 8));
    assert!(!f.is_occupied(3, 7));
}

#[test]
fn test_in_bounds_covers_exactly_the_field() {
    let f = field(&["##", "##"]);
    assert!(f.in_bounds(0, 0));
    assert!(f.in_bounds(1, 1));
    assert!(!f.in_bounds(-1, 0));
    assert!(!f.in_bounds(0, 2));
    assert!(!f.in_bounds(2, 0));
}

#[test]
#[should_panic]
fn test_out_of_bounds_read_panics() {
    let f = field(&["##", "##"]);
    f.is_occupied(-1, 0);
}

#[test]
fn test_box_outside_checks_both_corners() {
    let f = Field::default();
    assert!(!f.box_outside(0, 0, 10, 20));
    assert!(f.box_outside(1, 0, 10, 20));
    assert!(f.box_outside(0, -1, 1, 1));
    assert!(f.box_outside(8, 17, 1, 4));
}

#[test]
fn test_respawn_position_is_centred_on_top_row() {
    let f = Field::default();
    assert_eq!(f.default_respawn_pos(2), (4, 0));
    assert_eq!(f.default_respawn_pos(3), (4, 0));
    assert_eq!(f.default_respawn_pos(4), (3, 0));

    let odd = Field::new(7, 10);
    assert_eq!(odd.default_respawn_pos(2), (2, 0));
}
