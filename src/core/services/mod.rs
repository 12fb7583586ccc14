pub mod bill_service;
pub mod budget_service;
pub mod summary_service;
pub mod transaction_service;

pub use bill_service::BillService;
pub use budget_service::BudgetService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

use crate::errors::ValidationError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
