pub mod file_render;
