//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod split;

pub(crate) use check::CheckArgs;
pub(crate) use split::SplitArgs;
