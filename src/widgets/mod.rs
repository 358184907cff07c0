//! Built-in widget kinds: TextBox, ProgressBar, Graph, Systray, ImageBox.

pub mod graph;
pub mod imagebox;
pub mod progressbar;
pub mod systray;
pub mod textbox;

pub use graph::Graph;
pub use imagebox::ImageBox;
pub use progressbar::ProgressBar;
pub use systray::Systray;
pub use textbox::TextBox;
