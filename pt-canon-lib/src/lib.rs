pub mod types;
pub mod dictionary;
pub mod rules;
pub mod plural;
pub mod gender;
pub mod degree;
pub mod verb;
pub mod derivation;
pub mod pipeline;
pub mod sentence;
pub mod output;

pub use degree::neutralize_degree;
pub use derivation::strip_derivation;
pub use dictionary::{Dictionary, LoadError};
pub use gender::masculinize;
pub use pipeline::{canonicalize, reduce};
pub use plural::singularize;
pub use sentence::canonicalize_text;
pub use types::{Outcome, Reduction, Stage, Step, TextReduction, WordReduction};
pub use verb::to_infinitive;
