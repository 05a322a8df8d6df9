pub mod timestamp_ext;
