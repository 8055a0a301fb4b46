use crate::model::agreement::{AgreementClass, Decision};
use crate::pipeline::stage2_categories::Stage2Output;
use crate::pipeline::stage3_overall::Stage3Output;

#[derive(Debug, Clone)]
pub struct Classification {
    pub class: AgreementClass,
    pub decision: Decision,
    pub category_decisions: Vec<Decision>,
}

pub fn run_stage4(
    categories: &Stage2Output,
    overall: &Stage3Output,
    alpha: f64,
) -> Classification {
    let category_decisions = categories
        .pkj
        .iter()
        .zip(&categories.valid)
        .map(|(&p, &valid)| {
            if valid {
                Decision::from_p_value(p, alpha)
            } else {
                Decision::Undefined
            }
        })
        .collect();

    Classification {
        class: AgreementClass::from_kappa(overall.kappa),
        decision: Decision::from_p_value(overall.p, alpha),
        category_decisions,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_classify.rs"]
mod tests;
