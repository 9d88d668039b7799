pub mod rotation_error;
