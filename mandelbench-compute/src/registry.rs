use crate::{BatchedEvaluator, BoundaryConvention, Evaluator, ScalarEvaluator};

/// Registry entry describing one evaluation strategy.
pub struct EvaluatorInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub create: fn() -> Box<dyn Evaluator>,
}

pub static EVALUATORS: &[EvaluatorInfo] = &[
    EvaluatorInfo {
        id: "scalar",
        display_name: "Scalar (per-cell loop)",
        create: || Box::new(ScalarEvaluator::new()),
    },
    EvaluatorInfo {
        id: "batched",
        display_name: "Batched (masked array rounds)",
        create: || Box::new(BatchedEvaluator::new()),
    },
    EvaluatorInfo {
        id: "batched-aligned",
        display_name: "Batched (masked array rounds, aligned counts)",
        create: || {
            Box::new(BatchedEvaluator::with_convention(
                BoundaryConvention::FirstEscaped,
            ))
        },
    },
];

pub fn get_evaluator_info(id: &str) -> Option<&'static EvaluatorInfo> {
    EVALUATORS.iter().find(|info| info.id == id)
}

/// Create an evaluator by ID.
pub fn create_evaluator(id: &str) -> Option<Box<dyn Evaluator>> {
    get_evaluator_info(id).map(|info| (info.create)())
}
