use parkway_application::ports::{CellRepository, UserRepository, VehicleRepository};
use parkway_domain::{
    Cell, CellType, DomainError, Money, NewVehicle, PaymentStatus, PaymentUpdate, Plate,
    TimeOfDay, User, Vehicle,
};
use parkway_infrastructure::repositories::{
    InMemoryCellRepository, InMemoryUserRepository, InMemoryVehicleRepository,
};
use std::sync::Arc;

fn vehicle(plate: &str) -> Vehicle {
    Vehicle::register(NewVehicle {
        plate: plate.to_string(),
        parking_spot: "A1".to_string(),
        ..Default::default()
    })
    .unwrap()
}

fn update(status: PaymentStatus, exit: (u8, u8), total: u64) -> PaymentUpdate {
    PaymentUpdate {
        status,
        entry_time: TimeOfDay::new(8, 0).unwrap(),
        exit_time: TimeOfDay::new(exit.0, exit.1).unwrap(),
        total: Money::new(total),
        cell: None,
    }
}

#[tokio::test]
async fn test_create_sets_timestamps_and_keeps_order() {
    let repo = InMemoryVehicleRepository::new();

    repo.create(vehicle("ZZZ111")).await.unwrap();
    let created = repo.create(vehicle("AAA222")).await.unwrap();

    assert!(created.created_at.is_some());
    let plates: Vec<String> = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|v| v.plate.to_string())
        .collect();
    assert_eq!(plates, vec!["ZZZ111", "AAA222"]);
}

#[tokio::test]
async fn test_create_duplicate_plate_conflicts() {
    let repo = InMemoryVehicleRepository::new();

    repo.create(vehicle("ABC123")).await.unwrap();
    let result = repo.create(vehicle("abc123")).await;

    assert!(matches!(result, Err(DomainError::Conflict(_))));
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_lookup_is_case_and_whitespace_insensitive() {
    let repo = InMemoryVehicleRepository::new();
    repo.create(vehicle("ABC123")).await.unwrap();

    let plate = Plate::parse(" abc123 ").unwrap();
    assert!(repo.exists(&plate).await.unwrap());
    assert!(repo.get_by_plate(&plate).await.unwrap().is_some());
}

#[tokio::test]
async fn test_apply_payment_replaces_all_billing_fields() {
    let repo = InMemoryVehicleRepository::new();
    repo.create(vehicle("ABC123")).await.unwrap();
    let plate = Plate::parse("ABC123").unwrap();

    repo.apply_payment(&plate, update(PaymentStatus::Pendiente, (9, 0), 4000))
        .await
        .unwrap();
    let updated = repo
        .apply_payment(&plate, update(PaymentStatus::Pagado, (10, 15), 12000))
        .await
        .unwrap();

    assert_eq!(updated.payment, Some(PaymentStatus::Pagado));
    assert_eq!(updated.exit_time, Some(TimeOfDay::new(10, 15).unwrap()));
    assert_eq!(updated.total_payment, Some(Money::new(12000)));

    let stored = repo.get_by_plate(&plate).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_apply_payment_unknown_plate_leaves_store_untouched() {
    let repo = InMemoryVehicleRepository::new();
    repo.create(vehicle("ABC123")).await.unwrap();
    let before = repo.get_all().await.unwrap();

    let result = repo
        .apply_payment(
            &Plate::parse("NOPE00").unwrap(),
            update(PaymentStatus::Pagado, (9, 0), 4000),
        )
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert_eq!(repo.get_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_concurrent_payments_never_mix_fields() {
    let repo = Arc::new(InMemoryVehicleRepository::new());
    repo.create(vehicle("ABC123")).await.unwrap();
    let plate = Plate::parse("ABC123").unwrap();

    let mut handles = Vec::new();
    for hour in 9..17u8 {
        let repo = repo.clone();
        let plate = plate.clone();
        handles.push(tokio::spawn(async move {
            let total = u64::from(hour - 8) * 4000;
            repo.apply_payment(&plate, update(PaymentStatus::Pagado, (hour, 0), total))
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stored = repo.get_by_plate(&plate).await.unwrap().unwrap();
    let exit_hour = u64::from(stored.exit_time.unwrap().hour());
    assert_eq!(stored.total_payment, Some(Money::new((exit_hour - 8) * 4000)));
}

#[tokio::test]
async fn test_user_ids_increase() {
    let repo = InMemoryUserRepository::new();

    let first = repo.create(User::new("Ana".into(), None, None)).await.unwrap();
    let second = repo.create(User::new("Luis".into(), None, None)).await.unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(repo.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_cell_numbers_are_unique() {
    let repo = InMemoryCellRepository::new();

    repo.create(Cell::new("B2".into(), CellType::Motorcycle))
        .await
        .unwrap();
    let result = repo.create(Cell::new(" b2".into(), CellType::Car)).await;

    assert!(matches!(result, Err(DomainError::Conflict(_))));

    let found = repo.get_by_number("b2").await.unwrap().unwrap();
    assert_eq!(found.cell_type, CellType::Motorcycle);
}
