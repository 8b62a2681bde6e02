pub mod value_ext;
