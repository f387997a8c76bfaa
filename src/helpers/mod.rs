mod load_dotenv;
mod read_payload;

pub use load_dotenv::load_dotenv;
pub use read_payload::read_payload;
