/// AMFI scheme code, e.g. "119551"
pub type SchemeCode = String;

/// Scheme name as published by AMFI
pub type SchemeName = String;
