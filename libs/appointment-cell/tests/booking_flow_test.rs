use std::sync::Arc;

use assert_matches::assert_matches;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use appointment_cell::error::AppointmentError;
use appointment_cell::models::{
    AppointmentSearchQuery, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use appointment_cell::services::BookingService;
use notification_cell::{MessageGateway, NotificationService};
use shared_models::{
    AppointmentStatus, AvailabilityException, DeliveryStatus, NotificationSettings,
    PaymentMethod, TenantContext, TimeInterval, TransactionType,
};
use shared_storage::{AppState, Repository};
use shared_utils::fixtures::{
    admin_context, client_fixture, company_fixture, hm, professional_fixture, service_fixture,
    test_state,
};

struct TestSetup {
    state: Arc<AppState>,
    ctx: TenantContext,
    client_id: Uuid,
    service_id: Uuid,
    professional_id: Uuid,
}

async fn setup() -> TestSetup {
    let state = test_state();
    let company = company_fixture();
    let ctx = admin_context(company.id);

    let client = client_fixture(company.id);
    let service = service_fixture(company.id, 60, 80.0);
    let professional = professional_fixture(company.id);

    let setup = TestSetup {
        ctx,
        client_id: client.id,
        service_id: service.id,
        professional_id: professional.id,
        state: state.clone(),
    };

    state.store.companies.insert_unchecked(company).await;
    state.store.clients.insert_unchecked(client).await;
    state.store.services.insert_unchecked(service).await;
    state.store.professionals.insert_unchecked(professional).await;

    setup
}

fn booking_request(setup: &TestSetup, date: NaiveDate, start: NaiveTime) -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        client_id: setup.client_id,
        professional_id: setup.professional_id,
        service_id: setup.service_id,
        date,
        start_time: start,
        notes: None,
        custom_field_values: None,
    }
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

#[tokio::test]
async fn booking_creates_pending_appointment_and_confirmation_log() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.end_time, hm(11, 0));
    assert_eq!(appointment.date, monday());

    let stored = setup.state.store.appointments.list(&setup.ctx).await.unwrap();
    assert_eq!(stored.len(), 1);

    let logs = setup.state.store.notifications.list(&setup.ctx).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, DeliveryStatus::Sent);
    assert!(logs[0].message.contains("Maria Silva"));
}

#[tokio::test]
async fn taken_slot_is_refused_on_rebooking() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    let err = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap_err();

    assert_matches!(err, AppointmentError::SlotNotAvailable);
}

#[tokio::test]
async fn missing_references_persist_nothing() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let mut request = booking_request(&setup, monday(), hm(10, 0));
    request.client_id = Uuid::new_v4();

    let err = service.book(&setup.ctx, request).await.unwrap_err();
    assert_matches!(err, AppointmentError::ClientNotFound);

    assert!(setup.state.store.appointments.list(&setup.ctx).await.unwrap().is_empty());
    assert!(setup.state.store.notifications.list(&setup.ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn service_longer_than_the_slot_grid_still_conflicts() {
    let setup = setup().await;

    // 30-minute grid, hour-long service: the 09:30 slot is free but the
    // booking would run into the 10:00 appointment.
    let mut professional = setup
        .state
        .store
        .professionals
        .get(&setup.ctx, setup.professional_id)
        .await
        .unwrap();
    professional.slot_interval = Some(30);
    setup
        .state
        .store
        .professionals
        .update(&setup.ctx, professional)
        .await
        .unwrap();

    let service = BookingService::new(&setup.state);
    service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    let err = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(9, 30)))
        .await
        .unwrap_err();

    assert_matches!(err, AppointmentError::ConflictDetected);
    assert_eq!(
        setup.state.store.appointments.list(&setup.ctx).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn service_running_past_midnight_is_refused() {
    let setup = setup().await;

    let mut late_service = service_fixture(setup.ctx.company_id.unwrap(), 120, 200.0);
    late_service.name = "Pacote Noturno".to_string();
    let late_service_id = late_service.id;
    setup.state.store.services.insert_unchecked(late_service).await;

    let mut professional = setup
        .state
        .store
        .professionals
        .get(&setup.ctx, setup.professional_id)
        .await
        .unwrap();
    professional.slot_interval = Some(30);
    professional.exceptions.push(AvailabilityException {
        date: monday(),
        active: true,
        intervals: Some(vec![TimeInterval::new(hm(22, 0), hm(23, 45))]),
        reason: None,
    });
    setup
        .state
        .store
        .professionals
        .update(&setup.ctx, professional)
        .await
        .unwrap();

    let service = BookingService::new(&setup.state);
    let mut request = booking_request(&setup, monday(), hm(23, 0));
    request.service_id = late_service_id;

    let err = service.book(&setup.ctx, request).await.unwrap_err();
    assert_matches!(err, AppointmentError::ValidationError(msg) if msg.contains("midnight"));
    assert!(setup.state.store.appointments.list(&setup.ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn master_cannot_mix_companies_in_one_booking() {
    let setup = setup().await;

    let other_company = company_fixture();
    let foreign_client = client_fixture(other_company.id);
    let foreign_client_id = foreign_client.id;
    setup.state.store.companies.insert_unchecked(other_company).await;
    setup.state.store.clients.insert_unchecked(foreign_client).await;

    let master = shared_utils::fixtures::master_context();
    let service = BookingService::new(&setup.state);
    let mut request = booking_request(&setup, monday(), hm(10, 0));
    request.client_id = foreign_client_id;

    let err = service.book(&master, request).await.unwrap_err();
    assert_matches!(err, AppointmentError::ValidationError(msg) if msg.contains("companies"));
}

#[tokio::test]
async fn cancelling_releases_the_slot_and_notifies() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    let cancelled = service.cancel(&setup.ctx, appointment.id).await.unwrap();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

    let logs = setup.state.store.notifications.list(&setup.ctx).await.unwrap();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().any(|log| log.message.contains("cancelado")));

    // The 10:00 slot is bookable again.
    let rebooked = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();
    assert_eq!(rebooked.start_time, hm(10, 0));
}

#[tokio::test]
async fn terminal_bookings_reject_further_transitions() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();
    service.cancel(&setup.ctx, appointment.id).await.unwrap();

    let err = service.cancel(&setup.ctx, appointment.id).await.unwrap_err();
    assert_matches!(
        err,
        AppointmentError::InvalidStatusTransition(AppointmentStatus::Cancelled, _)
    );

    let err = service
        .complete(&setup.ctx, appointment.id, PaymentMethod::Pix)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppointmentError::InvalidStatusTransition(AppointmentStatus::Cancelled, _)
    );

    // Stored data unchanged by the rejected attempts.
    let stored = setup
        .state
        .store
        .appointments
        .get(&setup.ctx, appointment.id)
        .await
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Cancelled);
    assert!(setup.state.store.transactions.list(&setup.ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn completion_captures_payment_before_status_flip() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    let completed = service
        .complete(&setup.ctx, appointment.id, PaymentMethod::CreditCard)
        .await
        .unwrap();
    assert_eq!(completed.status, AppointmentStatus::Completed);

    let transactions = setup.state.store.transactions.list(&setup.ctx).await.unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, 80.0);
    assert_eq!(transactions[0].transaction_type, TransactionType::Income);
    assert_eq!(transactions[0].reference_id, Some(appointment.id));
    assert_eq!(transactions[0].payment_method, Some(PaymentMethod::CreditCard));
}

#[tokio::test]
async fn completion_without_the_service_record_flips_nothing() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    setup
        .state
        .store
        .services
        .delete(&setup.ctx, setup.service_id)
        .await
        .unwrap();

    let err = service
        .complete(&setup.ctx, appointment.id, PaymentMethod::Pix)
        .await
        .unwrap_err();
    assert_matches!(err, AppointmentError::ServiceNotFound);

    let stored = setup
        .state
        .store
        .appointments
        .get(&setup.ctx, appointment.id)
        .await
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Pending);
    assert!(setup.state.store.transactions.list(&setup.ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn generic_update_refuses_terminal_targets() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    let err = service
        .update(
            &setup.ctx,
            appointment.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Cancelled),
                notes: None,
                custom_field_values: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(err, AppointmentError::ValidationError(msg) if msg.contains("dedicated"));

    let stored = setup
        .state
        .store
        .appointments
        .get(&setup.ctx, appointment.id)
        .await
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Pending);
}

#[tokio::test]
async fn update_walks_the_forward_path_and_edits_notes() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    let confirmed = service
        .update(
            &setup.ctx,
            appointment.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::Confirmed),
                notes: Some("Cliente pediu pontualidade".to_string()),
                custom_field_values: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(confirmed.status, AppointmentStatus::Confirmed);
    assert_eq!(confirmed.notes.as_deref(), Some("Cliente pediu pontualidade"));

    let en_route = service
        .update(
            &setup.ctx,
            appointment.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::EnRoute),
                notes: None,
                custom_field_values: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(en_route.status, AppointmentStatus::EnRoute);
}

#[tokio::test]
async fn update_rejects_skipped_states() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();

    let err = service
        .update(
            &setup.ctx,
            appointment.id,
            UpdateAppointmentRequest {
                status: Some(AppointmentStatus::EnRoute),
                notes: None,
                custom_field_values: None,
            },
        )
        .await
        .unwrap_err();
    assert_matches!(
        err,
        AppointmentError::InvalidStatusTransition(
            AppointmentStatus::Pending,
            AppointmentStatus::EnRoute
        )
    );

    let stored = setup
        .state
        .store
        .appointments
        .get(&setup.ctx, appointment.id)
        .await
        .unwrap();
    assert_eq!(stored.status, AppointmentStatus::Pending);
}

struct FailingGateway;

#[async_trait]
impl MessageGateway for FailingGateway {
    async fn deliver(
        &self,
        _settings: &NotificationSettings,
        _to: &str,
        _message: &str,
    ) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("provider unreachable"))
    }
}

#[tokio::test]
async fn booking_survives_a_dead_message_provider() {
    let setup = setup().await;
    let notifier = NotificationService::with_gateway(&setup.state, Arc::new(FailingGateway));
    let service = BookingService::with_notifier(&setup.state, notifier);

    let appointment = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();
    assert_eq!(appointment.status, AppointmentStatus::Pending);

    let logs = setup.state.store.notifications.list(&setup.ctx).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, DeliveryStatus::Failed);
}

#[tokio::test]
async fn search_filters_compose() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let first = service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
    service
        .book(&setup.ctx, booking_request(&setup, tuesday, hm(9, 0)))
        .await
        .unwrap();
    service.cancel(&setup.ctx, first.id).await.unwrap();

    let on_monday = service
        .search(
            &setup.ctx,
            AppointmentSearchQuery {
                date: Some(monday()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(on_monday.len(), 1);
    assert_eq!(on_monday[0].id, first.id);

    let pending_in_range = service
        .search(
            &setup.ctx,
            AppointmentSearchQuery {
                from: Some(monday()),
                to: Some(tuesday),
                status: Some(AppointmentStatus::Pending),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(pending_in_range.len(), 1);
    assert_eq!(pending_in_range[0].date, tuesday);
}

#[tokio::test]
async fn stats_count_the_dashboard_figures() {
    let setup = setup().await;
    let service = BookingService::new(&setup.state);

    let today = Utc::now().date_naive();
    let today_booking = service
        .book(&setup.ctx, booking_request(&setup, today, hm(10, 0)))
        .await
        .unwrap();
    service
        .book(&setup.ctx, booking_request(&setup, monday(), hm(10, 0)))
        .await
        .unwrap();
    service
        .complete(&setup.ctx, today_booking.id, PaymentMethod::Cash)
        .await
        .unwrap();

    let stats = service.stats(&setup.ctx).await.unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.today, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.completed, 1);
}
