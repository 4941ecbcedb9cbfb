/// File system adapters
mod file_reader;
mod file_writer;

pub use file_reader::FileSystemReader;
pub use file_writer::DirectoryWriter;
