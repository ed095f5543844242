pub mod seaorm;

pub use seaorm::{SeaOrmAuthorStore, SeaOrmBookStore};
