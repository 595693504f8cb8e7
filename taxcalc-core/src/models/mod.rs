mod tax_assessment;
mod tax_band;

pub use tax_assessment::TaxAssessment;
pub use tax_band::TaxBand;
