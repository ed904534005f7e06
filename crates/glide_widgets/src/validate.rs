//! Description checks shared by the node builders

use glide_animation::{DescriptionError, Result};
use glide_core::{BoxConstraints, BoxDecoration, EdgeInsets};
use tracing::debug;

fn reject<T>(err: DescriptionError) -> Result<T> {
    debug!(error = %err, "description rejected");
    Err(err)
}

pub(crate) fn required<T>(value: Option<T>, node: &'static str, property: &'static str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => reject(DescriptionError::MissingTarget { node, property }),
    }
}

/// `value` must lie in `[min, max]`; NaN never does
pub(crate) fn in_range(
    value: f32,
    node: &'static str,
    property: &'static str,
    min: f32,
    max: f32,
) -> Result<f32> {
    if value >= min && value <= max {
        Ok(value)
    } else {
        reject(DescriptionError::OutOfRange {
            node,
            property,
            value,
            min,
            max,
        })
    }
}

pub(crate) fn non_negative_insets(
    insets: Option<EdgeInsets>,
    node: &'static str,
    property: &'static str,
) -> Result<Option<EdgeInsets>> {
    match insets {
        Some(insets) if !insets.is_non_negative() => {
            reject(DescriptionError::Negative { node, property })
        }
        other => Ok(other),
    }
}

pub(crate) fn valid_decoration(
    decoration: Option<BoxDecoration>,
    node: &'static str,
    property: &'static str,
) -> Result<Option<BoxDecoration>> {
    match decoration {
        Some(decoration) if !decoration.is_valid() => {
            reject(DescriptionError::InvalidDecoration { node, property })
        }
        other => Ok(other),
    }
}

pub(crate) fn normalized(constraints: BoxConstraints, node: &'static str) -> Result<BoxConstraints> {
    if constraints.is_normalized() {
        Ok(constraints)
    } else {
        reject(DescriptionError::InvalidConstraints { node })
    }
}

/// At most two of three mutually constraining values may be set
pub(crate) fn at_most_two(
    values: [Option<f32>; 3],
    node: &'static str,
    properties: &'static str,
) -> Result<()> {
    if values.iter().all(Option::is_some) {
        reject(DescriptionError::Conflicting { node, properties })
    } else {
        Ok(())
    }
}

pub(crate) fn exclusive<A, B>(
    a: &Option<A>,
    b: &Option<B>,
    node: &'static str,
    properties: &'static str,
) -> Result<()> {
    if a.is_some() && b.is_some() {
        reject(DescriptionError::Conflicting { node, properties })
    } else {
        Ok(())
    }
}
