mod check_version;
mod decode;
mod defaults;
mod kinds;
mod schema;

pub use check_version::check_version;
pub use decode::decode;
pub use defaults::defaults;
pub use kinds::kinds;
pub use schema::schema;
