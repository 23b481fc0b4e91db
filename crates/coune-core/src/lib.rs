pub mod clock;
pub mod constants;
pub mod controller;
pub mod cursor;
pub mod field;
pub mod host;
pub mod renderer;
pub mod rolling;
pub mod scroll;
pub mod timeline;
pub mod transition;

pub use clock::*;
pub use controller::*;
pub use cursor::*;
pub use field::*;
pub use host::*;
pub use renderer::*;
pub use scroll::ScrollState;
pub use timeline::*;
pub use transition::*;
