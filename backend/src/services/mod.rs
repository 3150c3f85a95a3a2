pub mod assets;
pub mod generate;
