pub mod header_ops;
