pub mod decision_tree;
pub mod naive_bayes;
pub mod random_forest;
pub mod utils;

pub mod classifier_trait;
pub mod factory;

pub use classifier_trait::{ClassifierModel, HAM, SPAM};
pub use factory::build_model;
