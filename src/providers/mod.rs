pub mod intelligence;

pub use intelligence::IntelligenceProvider;
