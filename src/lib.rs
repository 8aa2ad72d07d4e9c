pub mod feldspar_model;

mod new;

pub use crate::new::create_new_project;
