pub mod gate;
pub mod model;
pub mod parser;
pub mod presets;
pub mod render;
pub mod transducer;
