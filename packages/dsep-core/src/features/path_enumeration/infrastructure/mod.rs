pub mod enumerator;

pub use enumerator::enumerate_paths;
