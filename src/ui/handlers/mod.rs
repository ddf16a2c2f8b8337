//! Handler modules for keyboard input and per-screen state.

mod game_handler;
mod input_handler;
mod products_handler;
mod todo_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
pub use products_handler::ProductsHandler;
pub use todo_handler::TodoHandler;
