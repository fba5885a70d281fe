pub use self::{direction::*, grid::*, line::*, tile::*};

pub(crate) mod direction;
pub(crate) mod grid;
pub(crate) mod line;
pub(crate) mod tile;
