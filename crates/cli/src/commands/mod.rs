pub mod find;

pub use find::FindArgs;
