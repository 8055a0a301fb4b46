use serde::Serialize;

/// Landis & Koch (1977) strength-of-agreement bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementClass {
    Poor,
    Slight,
    Fair,
    Moderate,
    Substantial,
    Perfect,
    Undefined,
}

impl AgreementClass {
    pub fn from_kappa(kappa: f64) -> Self {
        if kappa.is_nan() {
            AgreementClass::Undefined
        } else if kappa < 0.0 {
            AgreementClass::Poor
        } else if kappa <= 0.20 {
            AgreementClass::Slight
        } else if kappa <= 0.40 {
            AgreementClass::Fair
        } else if kappa <= 0.60 {
            AgreementClass::Moderate
        } else if kappa <= 0.80 {
            AgreementClass::Substantial
        } else {
            AgreementClass::Perfect
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgreementClass::Poor => "Poor agreement",
            AgreementClass::Slight => "Slight agreement",
            AgreementClass::Fair => "Fair agreement",
            AgreementClass::Moderate => "Moderate agreement",
            AgreementClass::Substantial => "Substantial agreement",
            AgreementClass::Perfect => "Perfect agreement",
            AgreementClass::Undefined => "undefined",
        }
    }
}

impl std::fmt::Display for AgreementClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the test of H0: agreement is accidental (kappa = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Reject,
    Accept,
    Undefined,
}

impl Decision {
    pub fn from_p_value(p: f64, alpha: f64) -> Self {
        if p.is_nan() {
            Decision::Undefined
        } else if p < alpha {
            Decision::Reject
        } else {
            Decision::Accept
        }
    }

    pub fn statement(self) -> &'static str {
        match self {
            Decision::Reject => "Reject null hypothesis: observed agreement is not accidental",
            Decision::Accept => "Accept null hypothesis: observed agreement is accidental",
            Decision::Undefined => "Test undefined",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Decision::Reject => "reject",
            Decision::Accept => "accept",
            Decision::Undefined => "N/A",
        }
    }
}
