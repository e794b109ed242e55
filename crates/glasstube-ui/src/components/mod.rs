//! UI components for the Glasstube player shell.

pub mod button;
pub mod control_bar;
pub mod input_bar;
pub mod loader;
pub mod video_player;

pub use button::{GlassButton, GlassButtonVariant};
pub use control_bar::ControlBar;
pub use input_bar::InputBar;
pub use loader::Loader;
pub use video_player::VideoPlayer;
