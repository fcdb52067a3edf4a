use super::*;

fn filled() -> ServiceForm {
    let mut form = ServiceForm::default();
    form.set(ServiceField::Name, "Foam Wash".to_owned());
    form.set(ServiceField::ImageLink, "https://cdn.example.com/wash.png".to_owned());
    form.set(ServiceField::ServiceId, "SRV-7".to_owned());
    form.set(ServiceField::Location, "Andheri".to_owned());
    form.set(ServiceField::PriceSmall, "199".to_owned());
    form.set(ServiceField::PriceMid, "249.5".to_owned());
    form.set(ServiceField::PriceLarge, "0".to_owned());
    form
}

#[test]
fn empty_form_reports_every_field() {
    let errors = ServiceForm::default().errors();
    assert_eq!(errors.len(), ServiceField::ALL.len());
    assert_eq!(errors.get(&ServiceField::Name).map(String::as_str), Some("Required"));
}

#[test]
fn errors_are_hidden_until_touched() {
    let mut form = ServiceForm::default();
    assert_eq!(form.visible_error(ServiceField::Name), None);
    form.touch(ServiceField::Name);
    assert_eq!(form.visible_error(ServiceField::Name), Some("Required".to_owned()));
    assert_eq!(form.visible_error(ServiceField::Location), None);
}

#[test]
fn negative_price_blocks_submit() {
    let mut form = filled();
    form.set(ServiceField::PriceMid, "-5".to_owned());
    assert!(form.submit().is_none());
    assert_eq!(form.visible_error(ServiceField::PriceMid), Some("Mid vehicle price must be ≥ 0".to_owned()));
}

#[test]
fn non_numeric_price_blocks_submit() {
    let mut form = filled();
    form.set(ServiceField::PriceLarge, "cheap".to_owned());
    assert!(form.submit().is_none());
}

#[test]
fn empty_required_field_blocks_submit() {
    let mut form = filled();
    form.set(ServiceField::Location, "  ".to_owned());
    assert!(form.submit().is_none());
    assert_eq!(form.visible_error(ServiceField::Location), Some("Required".to_owned()));
}

#[test]
fn valid_form_submits_parsed_draft() {
    let mut form = filled();
    let draft = form.submit().unwrap();
    assert_eq!(draft.name, "Foam Wash");
    assert_eq!(draft.service_id, "SRV-7");
    assert_eq!(draft.prices, Prices { small: 199.0, mid: 249.5, large: 0.0 });
}

#[test]
fn from_service_populates_fields() {
    let service = Service {
        id: "s1".to_owned(),
        name: "Polish".to_owned(),
        location: "Bandra".to_owned(),
        prices: Prices { small: 100.0, mid: 150.0, large: 200.5 },
        ..Service::default()
    };
    let form = ServiceForm::from_service(&service);
    assert_eq!(form.value(ServiceField::Name), "Polish");
    assert_eq!(form.value(ServiceField::PriceSmall), "100");
    assert_eq!(form.value(ServiceField::PriceLarge), "200.5");
}
