use super::*;
use serde_json::json;

// =============================================================
// ServiceStatus
// =============================================================

#[test]
fn status_200_is_enabled() {
    let svc: Service = serde_json::from_value(json!({ "_id": "s1", "name": "Wash", "status": 200 })).unwrap();
    assert_eq!(svc.status, ServiceStatus::Enabled);
}

#[test]
fn status_zero_and_other_codes_are_disabled() {
    for raw in [json!(0), json!(1), json!(201), json!(null)] {
        let svc: Service = serde_json::from_value(json!({ "_id": "s1", "status": raw })).unwrap();
        assert_eq!(svc.status, ServiceStatus::Disabled, "status {raw}");
    }
}

#[test]
fn status_accepts_numeric_string() {
    let svc: Service = serde_json::from_value(json!({ "_id": "s1", "status": "200" })).unwrap();
    assert!(svc.status.is_enabled());
}

#[test]
fn status_missing_defaults_to_disabled() {
    let svc: Service = serde_json::from_value(json!({ "_id": "s1" })).unwrap();
    assert_eq!(svc.status, ServiceStatus::Disabled);
}

#[test]
fn status_codes_match_wire_values() {
    assert_eq!(ServiceStatus::Enabled.code(), 200);
    assert_eq!(ServiceStatus::Disabled.code(), 0);
    assert_eq!(ServiceStatus::from_code(200), ServiceStatus::Enabled);
    assert_eq!(ServiceStatus::from_code(0), ServiceStatus::Disabled);
}

#[test]
fn status_change_serializes_underscore_id_and_code() {
    let body = StatusChange { id: "s1".to_owned(), status: ServiceStatus::Enabled };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "_id": "s1", "status": 200 }));
}

// =============================================================
// Service
// =============================================================

#[test]
fn service_reads_backend_field_names() {
    let svc: Service = serde_json::from_value(json!({
        "_id": "abc",
        "name": "Premium Wash",
        "status": 200,
        "serviceID": "SRV-1",
        "location": "Andheri",
        "image": "https://img/x.jpg",
        "prices": { "small": 100, "mid": "150.5", "large": 200 }
    }))
    .unwrap();
    assert_eq!(svc.id, "abc");
    assert_eq!(svc.service_id, "SRV-1");
    assert!((svc.prices.mid - 150.5).abs() < f64::EPSILON);
}

#[test]
fn service_key_prefers_underscore_id() {
    let svc = Service { id: "a".to_owned(), service_id: "b".to_owned(), ..Service::default() };
    assert_eq!(svc.key(), "a");
}

#[test]
fn service_key_falls_back_to_service_id() {
    let svc = Service { service_id: "SRV-9".to_owned(), ..Service::default() };
    assert_eq!(svc.key(), "SRV-9");
}

#[test]
fn service_update_nests_payload() {
    let body = ServiceUpdate {
        id: "s1".to_owned(),
        payload: ServiceDraft {
            name: "Wash".to_owned(),
            image: "i".to_owned(),
            service_id: "SRV".to_owned(),
            location: "L".to_owned(),
            prices: Prices { small: 1.0, mid: 2.0, large: 3.0 },
        },
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["id"], "s1");
    assert_eq!(value["payload"]["serviceID"], "SRV");
    assert_eq!(value["payload"]["prices"]["large"], 3.0);
}

// =============================================================
// Packages
// =============================================================

#[test]
fn package_price_accepts_string() {
    let pkg: Package =
        serde_json::from_value(json!({ "_id": "p1", "name": "Gold", "price": "499", "description": ["a", "b"] }))
            .unwrap();
    assert!((pkg.price - 499.0).abs() < f64::EPSILON);
    assert_eq!(pkg.description, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn package_price_rejects_garbage() {
    let result = serde_json::from_value::<Package>(json!({ "_id": "p1", "price": "cheap" }));
    assert!(result.is_err());
}

#[test]
fn package_update_flattens_draft_and_adds_id() {
    let body = PackageUpdate {
        draft: PackageDraft { name: "Gold".to_owned(), price: 10.0, description: vec!["x".to_owned()] },
        id: "p1".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "name": "Gold", "price": 10.0, "description": ["x"], "id": "p1" })
    );
}

// =============================================================
// Null fields
// =============================================================

#[test]
fn why_us_null_image_reads_as_empty() {
    let item: WhyUsItem = serde_json::from_value(json!({ "_id": "w1", "title": null, "image": null })).unwrap();
    assert_eq!(item.id, "w1");
    assert!(item.title.is_empty());
    assert!(item.image.is_empty());
}

#[test]
fn package_null_description_reads_as_no_lines() {
    let pkg: Package =
        serde_json::from_value(json!({ "_id": "p1", "name": null, "price": 5, "description": null })).unwrap();
    assert!(pkg.name.is_empty());
    assert!(pkg.description.is_empty());
}

#[test]
fn service_null_text_fields_read_as_empty() {
    let svc: Service = serde_json::from_value(json!({
        "_id": "s1",
        "name": null,
        "serviceID": null,
        "location": null,
        "image": null,
        "prices": null
    }))
    .unwrap();
    assert!(svc.name.is_empty());
    assert!(svc.service_id.is_empty());
    assert!(svc.location.is_empty());
    assert!(svc.image.is_empty());
    assert_eq!(svc.prices, Prices::default());
}

#[test]
fn one_null_field_does_not_fail_the_whole_list() {
    let list: ListPayload<Service> = serde_json::from_value(json!([
        { "_id": "s1", "name": "Wash", "location": "Andheri" },
        { "_id": "s2", "name": "Polish", "location": null }
    ]))
    .unwrap();
    let items = list.into_vec();
    assert_eq!(items.len(), 2);
    assert!(items[1].location.is_empty());
}

// =============================================================
// ListPayload / misc
// =============================================================

#[test]
fn list_payload_accepts_bare_array() {
    let list: ListPayload<WhyUsItem> = serde_json::from_value(json!([{ "_id": "w1", "title": "Fast" }])).unwrap();
    assert_eq!(list.into_vec().len(), 1);
}

#[test]
fn list_payload_accepts_data_envelope() {
    let list: ListPayload<Service> =
        serde_json::from_value(json!({ "data": [{ "_id": "s1" }, { "_id": "s2" }] })).unwrap();
    let items = list.into_vec();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, "s2");
}

#[test]
fn list_payload_object_without_data_is_empty() {
    let list: ListPayload<Service> = serde_json::from_value(json!({ "message": "none" })).unwrap();
    assert!(list.into_vec().is_empty());
}

#[test]
fn login_response_without_token_parses() {
    let resp: LoginResponse = serde_json::from_value(json!({ "message": "Invalid credentials" })).unwrap();
    assert!(resp.token.is_none());
    assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn why_us_update_uses_underscore_id() {
    let body = WhyUsUpdate { id: "w1".to_owned(), title: "T".to_owned(), image: "I".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "_id": "w1", "title": "T", "image": "I" }));
}
