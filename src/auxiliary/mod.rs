pub mod patterns;
pub mod randomizer;
pub mod window;
