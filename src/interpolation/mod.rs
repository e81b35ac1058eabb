pub mod algorithms;
pub mod config;
pub mod errors;
pub mod preprocess;
pub mod report;
pub mod traits;
pub mod terms;

pub mod newton_forward;
pub mod newton_backward;
pub mod central;

pub use algorithms::Method;
pub use config::InterpolationCfg;
pub use errors::InterpolationError;
pub use report::{InterpolationResult, InterpolationStep};
pub use traits::Formula;

use log::info;

use crate::interpolation::preprocess::{validate_with, Prepared};


/// Validates the configured points and refuses unequal spacing.
fn prepare(cfg: &InterpolationCfg) -> Result<Prepared, InterpolationError> {
    let prepared = validate_with(cfg.points(), cfg.spacing())?;
    prepared.require_equal_spacing(cfg.spacing())?;
    Ok(prepared)
}

/// Evaluates `method` at the configured query point.
///
/// # Behavior
/// - Validates and sorts the points, then checks equal spacing.
/// - Runs the formula; missing higher-order entries truncate the series.
///
/// # Errors
/// - Any [`InterpolationError`] raised by validation, including
///   [`InterpolationError::UnequalSpacing`]. No formula runs on such data.
pub fn interpolate(cfg: InterpolationCfg, method: Method) -> Result<InterpolationResult, InterpolationError> {
    let prepared = prepare(&cfg)?;
    let result = method
        .formula()
        .evaluate_with(&prepared.points, cfg.x_query(), cfg.precision());
    info!(
        "{method}: f({}) ~ {} using {} terms",
        cfg.x_query(), result.value, result.terms_used
    );
    Ok(result)
}

/// Validates once and evaluates each of `methods`, results in request order.
///
/// Each evaluation is independent of the others.
pub fn interpolate_many(
    cfg: InterpolationCfg,
    methods: &[Method],
) -> Result<Vec<InterpolationResult>, InterpolationError> {
    let prepared = prepare(&cfg)?;
    let results = methods
        .iter()
        .map(|m| {
            let r = m.formula().evaluate_with(&prepared.points, cfg.x_query(), cfg.precision());
            info!("{m}: f({}) ~ {} using {} terms", cfg.x_query(), r.value, r.terms_used);
            r
        })
        .collect();
    Ok(results)
}
