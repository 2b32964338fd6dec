mod config;
mod exports;
mod flags;
mod fonts;
mod info;

pub use config::cmd_config;
pub use exports::cmd_exports;
pub use flags::cmd_flags;
pub use fonts::cmd_fonts;
pub use info::cmd_info;
