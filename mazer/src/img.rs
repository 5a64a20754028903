//! PNG rendering of mazes, solution paths, and search coverage.

use std::collections::HashSet;

use image::{Rgba, RgbaImage};

use amaze_core::{Maze, Point};
use amaze_search::Solution;

use crate::overlay::{CellKind, classify};

const CELL_SIZE: u32 = 50;
const CELL_BORDER: u32 = 2;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn fill(kind: CellKind) -> Rgba<u8> {
    match kind {
        CellKind::Wall => Rgba([40, 40, 40, 255]),
        CellKind::Start => Rgba([255, 0, 0, 255]),
        CellKind::Goal => Rgba([0, 171, 28, 255]),
        CellKind::Path => Rgba([220, 235, 113, 255]),
        CellKind::Explored => Rgba([212, 97, 85, 255]),
        CellKind::Open => Rgba([237, 240, 252, 255]),
    }
}

/// Render the maze as an RGBA image, one bordered square per cell.
pub fn render(
    maze: &Maze,
    solution: Option<&Solution>,
    explored: Option<&HashSet<Point>>,
) -> RgbaImage {
    let path: HashSet<Point> = solution
        .map(|s| s.cells.iter().copied().collect())
        .unwrap_or_default();

    let mut img = RgbaImage::from_pixel(
        maze.width() as u32 * CELL_SIZE,
        maze.height() as u32 * CELL_SIZE,
        BACKGROUND,
    );

    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let kind = classify(maze, Point::new(x, y), &path, explored);
            fill_cell(&mut img, x as u32, y as u32, fill(kind));
        }
    }
    img
}

/// Fill one cell square, leaving the border as background.
fn fill_cell(img: &mut RgbaImage, cx: u32, cy: u32, color: Rgba<u8>) {
    let x0 = cx * CELL_SIZE + CELL_BORDER;
    let x1 = (cx + 1) * CELL_SIZE - CELL_BORDER;
    let y0 = cy * CELL_SIZE + CELL_BORDER;
    let y1 = (cy + 1) * CELL_SIZE - CELL_BORDER;
    for py in y0..y1 {
        for px in x0..x1 {
            img.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_dimensions_and_cell_colors() {
        let maze = Maze::parse("AB\n# ").unwrap();
        let img = render(&maze, None, None);
        assert_eq!(img.dimensions(), (2 * CELL_SIZE, 2 * CELL_SIZE));

        let center = CELL_SIZE / 2;
        assert_eq!(*img.get_pixel(center, center), fill(CellKind::Start));
        assert_eq!(
            *img.get_pixel(CELL_SIZE + center, center),
            fill(CellKind::Goal)
        );
        assert_eq!(
            *img.get_pixel(center, CELL_SIZE + center),
            fill(CellKind::Wall)
        );
        // Borders keep the background color.
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
    }
}
