use arrayvec::ArrayVec;

use super::{Cell, Tile, Towards};

/// Number of cells in one row or column of the grid.
pub const LINE_LEN: usize = 4;

/// One row or column of the grid, in extraction order.
pub type Line = [Cell; LINE_LEN];

/// Result of sliding a single line.
///
/// See [`slide_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTransform {
    line: Line,
    merge_sum: u64,
    changed: bool,
    merged: ArrayVec<Tile, { LINE_LEN / 2 }>,
}

impl LineTransform {
    /// Returns the line after sliding and merging.
    #[must_use]
    pub const fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the sum of the values of all tiles created by merges.
    #[must_use]
    pub const fn merge_sum(&self) -> u64 {
        self.merge_sum
    }

    /// Returns whether any cell differs from the input line.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.changed
    }

    /// Returns the tiles created by merges, in scan order.
    #[must_use]
    pub fn merged(&self) -> &[Tile] {
        &self.merged
    }
}

/// Slides and merges one line toward one of its ends.
///
/// 1. Empty cells are removed, keeping the order of the tiles.
/// 2. Starting at the end the tiles move toward, each pair of adjacent equal
///    tiles becomes one tile of double value. A tile produced by a merge is not
///    merged again in the same slide.
/// 3. The remaining tiles are packed against that end and padded with empty cells.
///
/// # Example
///
/// ```
/// use slide2048_engine::{Tile, Towards, slide_line};
///
/// let two = Tile::from_value(2);
/// let four = Tile::from_value(4);
///
/// // No chained merges: [2, 2, 2, 2] becomes [4, 4, _, _], not [8, _, _, _].
/// let result = slide_line([two, two, two, two], Towards::Start);
/// assert_eq!(result.line(), &[four, four, None, None]);
/// assert_eq!(result.merge_sum(), 8);
/// assert!(result.changed());
///
/// // Merging from the right end first: [4, 2, 2, 4] becomes [_, 4, 4, 4].
/// let result = slide_line([four, two, two, four], Towards::End);
/// assert_eq!(result.line(), &[None, four, four, four]);
/// assert_eq!(result.merge_sum(), 4);
/// ```
#[must_use]
pub fn slide_line(line: Line, towards: Towards) -> LineTransform {
    match towards {
        Towards::Start => slide_towards_start(line),
        Towards::End => {
            let mut reversed = line;
            reversed.reverse();
            let mut result = slide_towards_start(reversed);
            result.line.reverse();
            result
        }
    }
}

fn slide_towards_start(line: Line) -> LineTransform {
    let compacted = line.iter().flatten().copied().collect::<ArrayVec<Tile, LINE_LEN>>();

    let mut output = [None; LINE_LEN];
    let mut merged = ArrayVec::new();
    let mut merge_sum = 0;

    // Writing merged tiles straight into `output` compacts and pads in the same pass.
    let mut read = 0;
    for slot in &mut output {
        let Some(&tile) = compacted.get(read) else {
            break;
        };
        if compacted.get(read + 1) == Some(&tile) {
            let doubled = tile.doubled();
            merge_sum += u64::from(doubled.value());
            merged.push(doubled);
            *slot = Some(doubled);
            read += 2;
        } else {
            *slot = Some(tile);
            read += 1;
        }
    }

    LineTransform {
        line: output,
        merge_sum,
        changed: output != line,
        merged,
    }
}
