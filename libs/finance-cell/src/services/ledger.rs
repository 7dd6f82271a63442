use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::{TenantContext, Transaction, TransactionStatus, TransactionType};
use shared_storage::{AppState, Repository};

use crate::error::FinanceError;
use crate::models::{CreateTransactionRequest, FinanceSummary};

pub struct LedgerService {
    transactions: Arc<dyn Repository<Transaction>>,
}

impl LedgerService {
    pub fn new(state: &AppState) -> Self {
        Self {
            transactions: state.store.transactions.clone(),
        }
    }

    pub async fn list(&self, ctx: &TenantContext) -> Result<Vec<Transaction>, FinanceError> {
        let mut transactions = self.transactions.list(ctx).await?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Manual ledger entry. Appointment completion writes its own INCOME
    /// records directly and never passes through here.
    pub async fn record(
        &self,
        ctx: &TenantContext,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, FinanceError> {
        debug!("Recording manual {:?} entry", request.transaction_type);
        if !request.amount.is_finite() || request.amount <= 0.0 {
            return Err(FinanceError::ValidationError(
                "Amount must be positive".to_string(),
            ));
        }
        if request.description.trim().is_empty() || request.category.trim().is_empty() {
            return Err(FinanceError::ValidationError(
                "Description and category are required".to_string(),
            ));
        }

        let company_id = request
            .company_id
            .or(ctx.company_id)
            .ok_or_else(|| FinanceError::ValidationError("companyId is required".to_string()))?;

        let transaction = Transaction {
            id: Uuid::new_v4(),
            company_id,
            date: request.date.unwrap_or_else(Utc::now),
            amount: request.amount,
            transaction_type: request.transaction_type,
            description: request.description,
            status: request.status.unwrap_or(TransactionStatus::Pending),
            category: request.category,
            payment_method: request.payment_method,
            provider_id: request.provider_id,
            reference_id: None,
        };
        Ok(self.transactions.create(ctx, transaction).await?)
    }

    /// Income and expense totals over every entry, settled or not.
    pub async fn summary(&self, ctx: &TenantContext) -> Result<FinanceSummary, FinanceError> {
        let transactions = self.transactions.list(ctx).await?;

        let mut income = 0.0;
        let mut expense = 0.0;
        for transaction in &transactions {
            match transaction.transaction_type {
                TransactionType::Income => income += transaction.amount,
                TransactionType::Expense => expense += transaction.amount,
            }
        }

        Ok(FinanceSummary {
            income,
            expense,
            net: income - expense,
        })
    }
}
