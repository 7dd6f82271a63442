use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use shared_models::{
    Appointment, PaymentMethod, Service, TenantContext, Transaction, TransactionStatus,
    TransactionType,
};
use shared_storage::{AppState, Repository};

use crate::error::AppointmentError;

/// Records the income side of a completed booking. The transaction is
/// written before the appointment flips to COMPLETED, so a storage
/// failure here leaves the booking untouched.
pub struct PaymentService {
    transactions: Arc<dyn Repository<Transaction>>,
}

impl PaymentService {
    pub fn new(state: &AppState) -> Self {
        Self {
            transactions: state.store.transactions.clone(),
        }
    }

    pub async fn capture_service_payment(
        &self,
        ctx: &TenantContext,
        appointment: &Appointment,
        service: &Service,
        payment_method: PaymentMethod,
    ) -> Result<Transaction, AppointmentError> {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            company_id: appointment.company_id,
            date: Utc::now(),
            amount: service.price,
            transaction_type: TransactionType::Income,
            description: format!("Serviço: {}", service.name),
            status: TransactionStatus::Paid,
            category: "Serviço".to_string(),
            payment_method: Some(payment_method),
            provider_id: None,
            reference_id: Some(appointment.id),
        };

        let stored = self.transactions.create(ctx, transaction).await?;
        info!(
            "Captured R$ {:.2} for appointment {} as transaction {}",
            stored.amount, appointment.id, stored.id
        );
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared_models::AppointmentStatus;
    use shared_utils::fixtures::{admin_context, hm, service_fixture, test_state};

    #[tokio::test]
    async fn capture_writes_a_paid_income_row_referencing_the_booking() {
        let state = test_state();
        let company_id = Uuid::new_v4();
        let ctx = admin_context(company_id);
        let service = service_fixture(company_id, 60, 120.0);

        let appointment = Appointment {
            id: Uuid::new_v4(),
            company_id,
            client_id: Uuid::new_v4(),
            professional_id: Uuid::new_v4(),
            service_id: service.id,
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            start_time: hm(10, 0),
            end_time: hm(11, 0),
            status: AppointmentStatus::EnRoute,
            notes: None,
            custom_field_values: None,
        };

        let payments = PaymentService::new(&state);
        let transaction = payments
            .capture_service_payment(&ctx, &appointment, &service, PaymentMethod::Pix)
            .await
            .unwrap();

        assert_eq!(transaction.amount, 120.0);
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.status, TransactionStatus::Paid);
        assert_eq!(transaction.category, "Serviço");
        assert_eq!(transaction.description, "Serviço: Corte de Cabelo");
        assert_eq!(transaction.payment_method, Some(PaymentMethod::Pix));
        assert_eq!(transaction.reference_id, Some(appointment.id));

        let stored = state.store.transactions.list(&ctx).await.unwrap();
        assert_eq!(stored.len(), 1);
    }
}
