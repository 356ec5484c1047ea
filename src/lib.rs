pub mod canvas;
pub mod color;
pub mod encode;
pub mod opts;
pub mod raster;
pub mod scene;
