use parkway_application::use_cases::{QuoteFeeUseCase, RegisterPaymentUseCase};
use parkway_domain::{
    BillingPolicy, DomainError, Money, PaymentRequest, PaymentStatus, ZeroDurationPolicy,
};
use std::sync::Arc;

mod helpers;
use helpers::{make_vehicle, MockVehicleRepository};

fn request(plate: &str, status: &str, entry: &str, exit: &str) -> PaymentRequest {
    PaymentRequest {
        plate: plate.to_string(),
        status: status.to_string(),
        entry_time: entry.to_string(),
        exit_time: exit.to_string(),
        cell: None,
    }
}

async fn setup() -> (Arc<MockVehicleRepository>, RegisterPaymentUseCase) {
    let repo = Arc::new(MockVehicleRepository::with_vehicles(vec![make_vehicle("ABC123")]).await);
    let use_case = RegisterPaymentUseCase::new(repo.clone(), BillingPolicy::default());
    (repo, use_case)
}

#[tokio::test]
async fn test_register_payment_end_to_end() {
    // Arrange
    let (repo, use_case) = setup().await;

    // Act
    let receipt = use_case
        .execute(request("ABC123", "Pagado", "08:00", "10:15"))
        .await
        .unwrap();

    // Assert
    assert_eq!(receipt.billable_hours, 3);
    assert_eq!(receipt.total_fee, Money::new(12000));

    let vehicle = &repo.snapshot().await[0];
    assert_eq!(vehicle.payment, Some(PaymentStatus::Pagado));
    assert_eq!(vehicle.entry_time.unwrap().to_string(), "08:00");
    assert_eq!(vehicle.exit_time.unwrap().to_string(), "10:15");
    assert_eq!(vehicle.total_payment, Some(Money::new(12000)));
}

#[tokio::test]
async fn test_register_payment_normalizes_plate() {
    let (repo, use_case) = setup().await;

    use_case
        .execute(request(" abc123 ", "Pendiente", "08:00", "09:00"))
        .await
        .unwrap();
    use_case
        .execute(request("ABC123", "Pagado", "23:30", "00:30"))
        .await
        .unwrap();

    let vehicles = repo.snapshot().await;
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].payment, Some(PaymentStatus::Pagado));
    assert_eq!(vehicles[0].total_payment, Some(Money::new(4000)));
}

#[tokio::test]
async fn test_register_payment_unknown_plate_is_not_found() {
    let (repo, use_case) = setup().await;
    let before = repo.snapshot().await;

    let result = use_case
        .execute(request("ZZZ999", "Pagado", "08:00", "09:00"))
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert_eq!(repo.snapshot().await, before);
}

#[tokio::test]
async fn test_register_payment_long_unknown_plate_is_not_found() {
    let (repo, use_case) = setup().await;
    let before = repo.snapshot().await;

    let result = use_case
        .execute(request("temporary-plate-0042-xyz", "Pagado", "08:00", "09:00"))
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert_eq!(repo.snapshot().await, before);
}

#[tokio::test]
async fn test_register_payment_missing_fields_changes_nothing() {
    let (repo, use_case) = setup().await;
    let before = repo.snapshot().await;

    let result = use_case
        .execute(request("ABC123", "", "08:00", "09:00"))
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(repo.snapshot().await, before);
}

#[tokio::test]
async fn test_register_payment_malformed_time_changes_nothing() {
    let (repo, use_case) = setup().await;
    let before = repo.snapshot().await;

    let result = use_case
        .execute(request("ABC123", "Pagado", "08:00", "25:00"))
        .await;

    assert!(matches!(result, Err(DomainError::MalformedTime(_))));
    assert_eq!(repo.snapshot().await, before);
}

#[tokio::test]
async fn test_register_payment_moves_vehicle_to_given_cell() {
    let (repo, use_case) = setup().await;
    let mut req = request("ABC123", "Pagado", "08:00", "09:00");
    req.cell = Some("C7".to_string());

    use_case.execute(req).await.unwrap();

    assert_eq!(repo.snapshot().await[0].parking_spot.as_ref(), "C7");
}

#[tokio::test]
async fn test_register_payment_honours_zero_duration_policy() {
    let repo = Arc::new(MockVehicleRepository::with_vehicles(vec![make_vehicle("ABC123")]).await);
    let free = RegisterPaymentUseCase::new(
        repo.clone(),
        BillingPolicy::new(Money::new(4000), ZeroDurationPolicy::BillNothing),
    );
    let minimum = RegisterPaymentUseCase::new(repo.clone(), BillingPolicy::default());

    let receipt = free
        .execute(request("ABC123", "Pagado", "12:00", "12:00"))
        .await
        .unwrap();
    assert_eq!(receipt.total_fee, Money::ZERO);

    let receipt = minimum
        .execute(request("ABC123", "Pagado", "12:00", "12:00"))
        .await
        .unwrap();
    assert_eq!(receipt.billable_hours, 1);
    assert_eq!(receipt.total_fee, Money::new(4000));
}

#[test]
fn test_quote_fee_does_not_need_a_vehicle() {
    let use_case = QuoteFeeUseCase::new(BillingPolicy::default());

    let quote = use_case.execute("08:00", "08:01").unwrap();
    assert_eq!(quote.billable_hours, 1);
    assert_eq!(quote.total, Money::new(4000));

    assert!(matches!(
        use_case.execute("", "08:01"),
        Err(DomainError::Validation(_))
    ));
    assert!(matches!(
        use_case.execute("8h", "08:01"),
        Err(DomainError::MalformedTime(_))
    ));
}
