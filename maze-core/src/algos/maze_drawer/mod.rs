use crate::{algos::GeneratedMaze, types::RenderStyle};

use std::fmt::{Display, Formatter};

use svg::Document;

mod blocks;
mod glyphs;
mod vector;

#[derive(Debug, Clone, Copy, Default)]
pub struct DrawConfig {
    pub show_distances: bool,
    pub show_solution: bool,
}

#[derive(Debug, Clone)]
pub enum Drawing {
    Text(String),
    Svg(Document),
}

impl Display for Drawing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Drawing::Text(text) => write!(f, "{}", text),
            Drawing::Svg(document) => write!(f, "{}", document),
        }
    }
}

pub trait MazeDrawer {
    fn draw(&self, maze: &GeneratedMaze, config: &DrawConfig) -> Drawing;
}

pub struct MazeDrawerFactory;

impl MazeDrawerFactory {
    pub fn create_drawer(style: RenderStyle) -> Box<dyn MazeDrawer> {
        match style {
            RenderStyle::Glyphs => Box::new(glyphs::GlyphMazeDrawer),
            RenderStyle::Blocks => Box::new(blocks::BlockMazeDrawer),
            RenderStyle::Svg => Box::new(vector::SvgMazeDrawer),
        }
    }
}
