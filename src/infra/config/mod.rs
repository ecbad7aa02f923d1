pub mod catalog_file;
