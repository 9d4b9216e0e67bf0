pub mod combined;
pub mod entry;
pub mod export;
pub mod history;
