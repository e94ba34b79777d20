pub mod movegen;
