// Analysis API: JD-driven ATS scoring (single and bulk) and fixed-vocabulary
// skill extraction. All matching goes through ats-core — no tokenization or
// counting happens in the handlers.

pub mod handlers;
