use super::types::TreeParams;

/// Largest number of fields a leaf may carry (the binary codec stores the
/// field count in one byte).
pub const MAX_LEAF_FIELDS: usize = u8::MAX as usize;

/// Error enumeration for parameter validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    /// The leaf encoding must declare at least one field.
    #[error("leaf encoding declares no fields")]
    EmptyEncoding,
    /// The leaf encoding declares more fields than the codec can frame.
    #[error("leaf encoding declares {got} fields (max {max})")]
    EncodingTooWide { max: usize, got: usize },
    /// A tree needs room for at least one leaf.
    #[error("max_leaves must be non-zero")]
    MaxLeavesZero,
}

/// Validates all parameter invariants.
pub fn validate(params: &TreeParams) -> Result<(), ParamsError> {
    let width = params.leaf_encoding.len();
    if width == 0 {
        return Err(ParamsError::EmptyEncoding);
    }
    if width > MAX_LEAF_FIELDS {
        return Err(ParamsError::EncodingTooWide {
            max: MAX_LEAF_FIELDS,
            got: width,
        });
    }
    if params.max_leaves == 0 {
        return Err(ParamsError::MaxLeavesZero);
    }
    Ok(())
}
