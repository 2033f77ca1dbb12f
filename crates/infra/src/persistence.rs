// crates/infra/src/persistence.rs
mod file_reader;
mod file_writer;
mod record_file;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use record_file::RecordFile;
