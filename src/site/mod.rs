pub mod activation;
pub mod app;
pub mod host;

pub use activation::activate;
pub use app::App;
pub use host::{Analytics, IconReplacer, PageHost};
