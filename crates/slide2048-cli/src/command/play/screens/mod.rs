pub use self::{notice::*, play::*};

mod notice;
mod play;
