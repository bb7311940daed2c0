pub mod auth;
pub mod code_editor;
pub mod navbar;
pub mod page;
pub mod theme_toggle;

pub use code_editor::CodeEditor;
pub use navbar::Navbar;
pub use page::Page;
pub use theme_toggle::ThemeToggle;
