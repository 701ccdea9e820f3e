pub mod header;
pub mod history;
pub mod input;
pub mod keybindings;
pub mod output;
pub mod prompt;
pub mod settings;
pub mod status;
pub mod util;
