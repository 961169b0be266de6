//! Statement input port trait.

use crate::domain::error::ReconError;
use crate::domain::statement::ReconStatement;

/// Port supplying one parsed reconciliation statement.
pub trait StatementPort {
    fn load(&self) -> Result<ReconStatement, ReconError>;
}
