pub mod file;
pub mod logging;
pub mod naming;

pub use file::{remove_file_if_exists, rename_to_lowercase, write_if_missing};
pub use logging::init_logging;
pub use naming::{
    declaration_file_name, has_extension_in, is_control_word, is_lowercase, metrics_file_name,
    split_font_name,
};
