//! Text renderings of dates and results.

mod iso;
mod text;
