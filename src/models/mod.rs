//! Classification models

pub mod svm;
