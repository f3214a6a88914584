pub mod header;
pub mod tab_bar;
pub mod qr_reader;
pub mod qr_generator;
