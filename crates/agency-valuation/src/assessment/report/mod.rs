mod assembler;
pub mod views;

pub use assembler::ResultsAssembler;
pub use views::{FinancialImpact, ResultsRecord, ServiceRiskView};
