pub mod terminal;

pub use terminal::{TerminalAlertPresenter, TerminalNavigator};
