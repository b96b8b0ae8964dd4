mod display;
mod repl;
mod script;

pub use display::{DisplayError, TerminalDisplay};
pub use repl::run_interactive_terminal;
pub use script::{MoveScript, ParseError, ScriptMove};
