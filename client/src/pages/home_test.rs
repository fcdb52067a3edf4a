use super::*;

#[test]
fn home_opens_on_why_us() {
    assert_eq!(HomeTab::default(), HomeTab::WhyUs);
}

#[test]
fn tabs_are_listed_in_sidebar_order() {
    let labels: Vec<_> = HomeTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["Why Us", "Services", "Packages"]);
}
