mod input;
mod load_dotenv;

pub use input::open_input;
pub use load_dotenv::load_dotenv;
