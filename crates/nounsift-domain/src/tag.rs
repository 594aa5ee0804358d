//! Part-of-speech tags inspected by the extraction rules
//!
//! Tags are compared by exact string equality. Nothing here interprets the
//! tagset beyond these literals.

/// General noun
pub const NOUN: &str = "NN";

/// Number
pub const NUMBER: &str = "SN";

/// Adjective stem
pub const ADJECTIVE: &str = "VA";

/// Adnominal ending
pub const ADNOMINAL_ENDING: &str = "ETM";

/// Adjective stem fused with an adnominal ending
pub const ADJECTIVE_ADNOMINAL: &str = "VA+ETM";

/// Feature value meaning "not set" (for the compound flag: not a compound)
pub const UNSET_FEATURE: &str = "*";

/// Zero-based feature position holding the compound flag
pub const COMPOUND_FEATURE_INDEX: usize = 4;
