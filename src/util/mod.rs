pub mod parse;
pub mod youtube;
