mod menu;
mod results;
mod scripts;
mod session;
mod state;

pub use menu::MenuView;
pub use results::ResultsPanel;
pub use session::SessionView;
pub use state::ViewError;
