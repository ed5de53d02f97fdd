/// Terminal front end
///
/// Reads menu choices and prompt answers, hands requests to the desk, prints the outcome.

pub mod menu;
pub mod prompt;

pub use menu::Menu;
pub use prompt::Prompter;
