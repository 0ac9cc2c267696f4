pub mod assets;
pub mod favorites;
