pub mod framing;
pub mod matrix;
pub mod params;

pub use framing::MetricFraming;
pub use matrix::ConfusionMatrix;
pub use params::BusinessParameters;
