use parkway_domain::{DomainError, PaymentRequest, PaymentStatus, Plate};

fn request(plate: &str, status: &str, entry: &str, exit: &str) -> PaymentRequest {
    PaymentRequest {
        plate: plate.to_string(),
        status: status.to_string(),
        entry_time: entry.to_string(),
        exit_time: exit.to_string(),
        cell: None,
    }
}

#[test]
fn test_validate_normalizes_plate() {
    let payment = request(" abc123 ", "Pagado", "08:00", "10:15")
        .validate()
        .unwrap();

    assert_eq!(payment.plate.as_str(), "ABC123");
    assert_eq!(payment.plate, Plate::parse("ABC123").unwrap());
    assert_eq!(payment.status, PaymentStatus::Pagado);
    assert_eq!(payment.entry_time.to_string(), "08:00");
    assert_eq!(payment.exit_time.to_string(), "10:15");
}

#[test]
fn test_validate_reports_every_missing_field() {
    let err = request("", "", "08:00", " ").validate().unwrap_err();

    match err {
        DomainError::Validation(msg) => {
            assert!(msg.contains("plate"));
            assert!(msg.contains("exit_time"));
            assert!(msg.contains("status"));
            assert!(!msg.contains("entry_time"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_unknown_status() {
    let err = request("ABC123", "Paid", "08:00", "09:00")
        .validate()
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[test]
fn test_validate_rejects_malformed_time() {
    let err = request("ABC123", "Pendiente", "8 am", "09:00")
        .validate()
        .unwrap_err();
    assert!(matches!(err, DomainError::MalformedTime(_)));
}

#[test]
fn test_validate_drops_blank_cell() {
    let mut req = request("ABC123", "Vencido", "08:00", "09:00");
    req.cell = Some("   ".to_string());
    assert!(req.validate().unwrap().cell.is_none());

    req.cell = Some(" B2 ".to_string());
    assert_eq!(req.validate().unwrap().cell.as_deref(), Some("B2"));
}

#[test]
fn test_status_round_trips_through_literals() {
    for status in PaymentStatus::ALL {
        assert_eq!(status.as_str().parse::<PaymentStatus>().unwrap(), status);
    }
    assert!("pagado".parse::<PaymentStatus>().is_err());
}
