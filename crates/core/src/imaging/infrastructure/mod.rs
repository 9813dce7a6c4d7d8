pub mod conversion;
pub mod image_file_reader;
pub mod image_file_writer;
