// Adapters layer: concrete implementations of the output ports.

pub mod console;

pub use console::StdoutConsole;
