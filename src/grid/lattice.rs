use crate::types::Point;

/// Regular lattice stored row by row.
///
/// Rows may differ in length after skew trimming; row and column order are
/// significant for tessellation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Vec<Point>>,
}

impl Grid {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate all lattice points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    pub fn into_points(self) -> Vec<Point> {
        self.rows.into_iter().flatten().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }
}

/// Build a lattice with spacing `dist` over `[0, width) × [0, height)`.
///
/// With a non-zero `skew` (clamped to `width`) every odd row is shifted right
/// by that amount. Shifted points leaving the image are dropped, then each
/// (even, odd) row pair is trimmed to the shorter of the two so adjacent rows
/// stay column-aligned. A zero `dist` is treated as 1.
pub fn produce_grid(width: usize, height: usize, dist: usize, skew: Option<usize>) -> Grid {
    let dist = dist.max(1);
    let mut rows: Vec<Vec<Point>> = (0..height)
        .step_by(dist)
        .map(|y| {
            (0..width)
                .step_by(dist)
                .map(|x| Point::new(x as i32, y as i32))
                .collect()
        })
        .collect();

    let skew = skew.unwrap_or(0).min(width);
    if skew == 0 {
        return Grid { rows };
    }

    for row in rows.iter_mut().skip(1).step_by(2) {
        row.retain_mut(|p| {
            p.x += skew as i32;
            (p.x as usize) < width
        });
    }

    for pair in rows.chunks_mut(2) {
        if let [even, odd] = pair {
            let common = even.len().min(odd.len());
            even.truncate(common);
            odd.truncate(common);
        }
    }

    Grid { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unskewed_grid_has_ceil_dimensions() {
        let grid = produce_grid(23, 17, 5, None);
        assert_eq!(grid.row_count(), 4); // ceil(17 / 5)
        assert!(grid.rows.iter().all(|r| r.len() == 5)); // ceil(23 / 5)
        assert_eq!(grid.rows[3][4], Point::new(20, 15));

        let zero_skew = produce_grid(23, 17, 5, Some(0));
        assert_eq!(zero_skew, grid);
    }

    #[test]
    fn odd_rows_shift_right() {
        let grid = produce_grid(20, 20, 5, Some(3));
        assert_eq!(grid.rows[0][0], Point::new(0, 0));
        assert_eq!(grid.rows[1][0], Point::new(3, 5));
        assert_eq!(grid.rows[3][3], Point::new(18, 15));
        assert!(grid.rows.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn overflow_trims_both_rows_of_a_pair() {
        let grid = produce_grid(20, 20, 5, Some(7));
        // odd rows: 7, 12, 17, 22 -> last dropped; even partner loses its tail too
        assert!(grid.rows.iter().all(|r| r.len() == 3));
        assert_eq!(grid.rows[0].last(), Some(&Point::new(10, 0)));
        assert_eq!(grid.rows[1].last(), Some(&Point::new(17, 5)));
    }

    #[test]
    fn unpaired_last_row_is_untouched() {
        let grid = produce_grid(20, 11, 5, Some(7));
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.rows[0].len(), 3);
        assert_eq!(grid.rows[1].len(), 3);
        assert_eq!(grid.rows[2].len(), 4);
    }

    #[test]
    fn skew_is_clamped_to_width() {
        let grid = produce_grid(10, 10, 5, Some(1000));
        assert!(grid.rows[1].is_empty());
        assert!(grid.rows[0].is_empty());
    }
}
