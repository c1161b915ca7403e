pub mod correction;

pub use correction::{CorrectionRequest, CorrectionResponse};
